//! Stubs that ship with kiln, one per artifact kind.
//!
//! Placeholders use `{{ name }}` syntax; see the pipeline for the variables
//! every stub receives (`filename`, `pascalName`, `snakeName`, ...). A project
//! can shadow any of these with `<stubs>/<kind>.stub`.

use kiln_core::domain::ArtifactKind;

/// Source of the built-in stub for `kind`.
pub fn builtin_stub(kind: ArtifactKind) -> &'static str {
    match kind {
        ArtifactKind::File => FILE,
        ArtifactKind::View => VIEW,
        ArtifactKind::Model => MODEL,
        ArtifactKind::Migration => MIGRATION,
        ArtifactKind::Controller => CONTROLLER,
        ArtifactKind::Action => ACTION,
        ArtifactKind::CreateOptions => CREATE_OPTIONS,
        ArtifactKind::UpdateOptions => UPDATE_OPTIONS,
        ArtifactKind::ModelInterface => MODEL_INTERFACE,
        ArtifactKind::IdentifierOptions => IDENTIFIER_OPTIONS,
        ArtifactKind::Route => ROUTE,
        ArtifactKind::Validator => VALIDATOR,
        ArtifactKind::Index => INDEX,
        ArtifactKind::Seeder => SEEDER,
    }
}

/// `(stub id, source)` for every kind.
pub fn all_stubs() -> impl Iterator<Item = (&'static str, &'static str)> {
    ArtifactKind::ALL
        .into_iter()
        .map(|kind| (kind.stub(), builtin_stub(kind)))
}

const FILE: &str = "\
// {{ filename }}{{ extname }}
";

const VIEW: &str = "\
@layout('layouts/main')

@section('content')
  <h1>{{ pascalName }}</h1>
@end
";

const MODEL: &str = "\
import { BaseModel, column } from '@ioc:Adonis/Lucid/Orm'

export default class {{ filename }} extends BaseModel {
  @column({ isPrimary: true })
  public id: number
}
";

const MIGRATION: &str = "\
import BaseSchema from '@ioc:Adonis/Lucid/Schema'

export default class extends BaseSchema {
  protected tableName = '{{ filename }}'

  public async up () {
    this.schema.createTable(this.tableName, (table) => {
      table.increments('id')
      table.timestamps(true, true)
    })
  }

  public async down () {
    this.schema.dropTable(this.tableName)
  }
}
";

const CONTROLLER: &str = "\
import type { HttpContextContract } from '@ioc:Adonis/Core/HttpContext'
import {{ pascalName }}Actions from 'App/Actions/{{ plural }}Actions'

export default class {{ filename }} {
  public async index ({ response }: HttpContextContract) {
    return response.ok(await {{ pascalName }}Actions.list())
  }

  public async show ({ params, response }: HttpContextContract) {
    return response.ok(await {{ pascalName }}Actions.find(params.id))
  }
}
";

const ACTION: &str = "\
export default class {{ filename }} {
  public static async list () {
    return []
  }

  public static async find (id: number) {
    return { id }
  }
}
";

const CREATE_OPTIONS: &str = "\
export type {{ filename }} = {
  // fields accepted when creating a {{ singular }}
}
";

const UPDATE_OPTIONS: &str = "\
export type {{ filename }} = {
  // fields accepted when updating a {{ singular }}
}
";

const MODEL_INTERFACE: &str = "\
export interface {{ filename }} {
  id: number
}
";

const IDENTIFIER_OPTIONS: &str = "\
export type {{ filename }} = {
  id: number
}
";

const ROUTE: &str = "\
import Route from '@ioc:Adonis/Core/Route'

Route.group(() => {
  Route.get('/', '{{ pascalName }}Controller.index')
  Route.get('/:id', '{{ pascalName }}Controller.show')
}).prefix('/{{ filename }}')
";

const VALIDATOR: &str = "\
import { schema } from '@ioc:Adonis/Core/Validator'
import type { HttpContextContract } from '@ioc:Adonis/Core/HttpContext'

export default class {{ filename }} {
  constructor (protected ctx: HttpContextContract) {}

  public schema = schema.create({})

  public messages = {}
}
";

const INDEX: &str = "\
export * from './{{ name }}'
";

const SEEDER: &str = "\
import BaseSeeder from '@ioc:Adonis/Lucid/Seeder'

export default class {{ filename }} extends BaseSeeder {
  public async run () {
    // seed {{ plural }}
  }
}
";
