//! End-to-end: pipeline + rc-file context + stub renderer on a real directory.

use std::fs;
use std::path::Path;

use kiln_adapters::{
    LocalFilesystem, RC_FILE_NAME, RcFile, RcProjectContext, StubRenderer, project_stub_store,
};
use kiln_core::prelude::*;
use tempfile::TempDir;

fn init_project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let rc = RcFile::default_layout().to_json().unwrap();
    fs::write(tmp.path().join(RC_FILE_NAME), rc).unwrap();
    tmp
}

fn pipeline_for(root: &Path) -> GenerationPipeline {
    let context = RcProjectContext::load(root).unwrap();
    let store = project_stub_store(&context);
    let renderer = StubRenderer::new(Box::new(store), Box::new(LocalFilesystem::new()));
    GenerationPipeline::new(Box::new(context), Box::new(renderer))
}

fn generate(root: &Path, name: &str, kind: ArtifactKind) -> KilnResult<ArtifactDescriptor> {
    let label = ArtifactLabel::new(name, kind).unwrap();
    pipeline_for(root).generate(&GenerationRequest::new(root, label))
}

#[test]
fn model_is_rendered_into_app_models() {
    let project = init_project();

    let descriptor = generate(project.path(), "user", ArtifactKind::Model).unwrap();

    let expected = project.path().join("app/Models/User.ts");
    assert_eq!(descriptor.path, expected);
    let content = fs::read_to_string(expected).unwrap();
    assert!(content.contains("export default class User extends BaseModel"));
}

#[test]
fn project_stub_shadows_builtin() {
    let project = init_project();
    fs::create_dir_all(project.path().join("stubs")).unwrap();
    fs::write(
        project.path().join("stubs/controller.stub"),
        "// {{ filename }} for {{ plural }}",
    )
    .unwrap();

    let descriptor = generate(project.path(), "users", ArtifactKind::Controller).unwrap();

    assert_eq!(
        fs::read_to_string(descriptor.path).unwrap(),
        "// UserController for users"
    );
}

#[test]
fn existing_file_is_kept_without_force() {
    let project = init_project();
    generate(project.path(), "user", ArtifactKind::Model).unwrap();

    let file = project.path().join("app/Models/User.ts");
    fs::write(&file, "hand edited").unwrap();

    let err = generate(project.path(), "user", ArtifactKind::Model).unwrap_err();
    assert_eq!(err.code(), "render");
    assert_eq!(fs::read_to_string(&file).unwrap(), "hand edited");
}

#[test]
fn directory_without_rc_file_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let err = generate(tmp.path(), "user", ArtifactKind::Model).unwrap_err();
    assert_eq!(err.code(), "not-a-project");
    assert!(fs::read_dir(tmp.path()).unwrap().next().is_none());
}

#[test]
fn missing_namespace_is_unresolvable() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(RC_FILE_NAME),
        r#"{"namespaces": {"models": "app/Models"}}"#,
    )
    .unwrap();

    let err = generate(tmp.path(), "create_users", ArtifactKind::Migration).unwrap_err();
    assert_eq!(err.code(), "unresolvable-destination");
    assert!(err.to_string().contains("migration"));
}
