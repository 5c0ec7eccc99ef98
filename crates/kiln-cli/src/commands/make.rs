//! Implementation of the per-kind generation subcommands (`kiln model`, ...).
//!
//! Responsibility: turn CLI arguments and config into a `GenerationRequest`,
//! wire the adapters into a `GenerationPipeline`, and report the result.
//! Naming and placement rules live in `kiln-core`.

use tracing::{debug, instrument};

use kiln_adapters::{LocalFilesystem, RcProjectContext, StubRenderer, project_stub_store};
use kiln_core::{
    application::{
        ArtifactDescriptor, ArtifactPlan, Capabilities, DestinationProvider, GenerationPipeline,
        GenerationRequest,
    },
    domain::{ArtifactKind, ArtifactLabel, StubRef, TransformationConfig},
    error::KilnError,
};

use crate::{
    cli::MakeArgs,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute a generation subcommand for `kind`.
#[instrument(skip_all, fields(kind = %kind, name = %args.name))]
pub fn execute(
    kind: ArtifactKind,
    args: &MakeArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let request = build_request(kind, args, config)?;
    debug!(
        transformations = ?request.transformations,
        overwrite = request.overwrite,
        "Request built"
    );

    let context = RcProjectContext::load(&args.project)?;
    let store = project_stub_store(&context);
    let renderer = StubRenderer::new(Box::new(store), Box::new(LocalFilesystem::new()));
    let pipeline = GenerationPipeline::new(Box::new(context), Box::new(renderer));

    if args.dry_run {
        let plan = pipeline.plan(&request)?;
        report_plan(&plan, output)
    } else {
        let descriptor = pipeline.generate(&request)?;
        report_written(&descriptor, output)
    }
}

/// Assemble the request: kind defaults, then config, then flags.
pub fn build_request(
    kind: ArtifactKind,
    args: &MakeArgs,
    config: &AppConfig,
) -> CliResult<GenerationRequest> {
    let label = ArtifactLabel::new(&args.name, kind).map_err(KilnError::from)?;

    let mut capabilities = Capabilities::for_kind(kind);
    if let Some(template) = &args.template {
        capabilities.stub = StubRef::new(template.clone());
    }
    if let Some(dir) = &args.dir {
        capabilities.destination = DestinationProvider::Directory(dir.clone());
    }
    capabilities.template_data = args.data.iter().cloned().collect();

    Ok(GenerationRequest::new(&args.project, label)
        .with_transformations(transformations(kind, args, config))
        .with_capabilities(capabilities)
        .with_overwrite(args.force || config.generation.overwrite))
}

fn transformations(kind: ArtifactKind, args: &MakeArgs, config: &AppConfig) -> TransformationConfig {
    let mut transformations = config.conventions_for(kind);

    if let Some(form) = args.form {
        transformations = transformations.with_form(form.into());
    }
    if let Some(pattern) = args.pattern {
        transformations = transformations.with_pattern(pattern.into());
    }
    if let Some(suffix) = &args.suffix {
        transformations = transformations.with_suffix(suffix.clone());
    }
    if let Some(extname) = &args.extname {
        transformations = transformations.with_extname(extname.clone());
    }
    for ignored in &args.form_ignore {
        transformations = transformations.ignore_form_for(*ignored);
    }
    if args.exact {
        transformations = transformations.exact();
    }

    transformations
}

fn report_plan(plan: &ArtifactPlan, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        return output.json(plan);
    }

    output.info(&format!(
        "Would create {} {} (stub: {})",
        plan.kind,
        plan.path.display(),
        plan.stub
    ))?;
    Ok(())
}

fn report_written(descriptor: &ArtifactDescriptor, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        return output.json(descriptor);
    }

    output.success(&format!(
        "Created {} {}",
        descriptor.kind,
        descriptor.path.display()
    ))?;
    Ok(())
}
