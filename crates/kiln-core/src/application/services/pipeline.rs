//! Generation pipeline - one artifact per run.
//!
//! ```text
//! Idle ─▶ ContextValidated ─▶ Transformed ─▶ Resolved ─▶ Rendered ─▶ Done
//!   └──────────────┴────────────────┴──────────────┴───────────┴──▶ Failed
//! ```
//!
//! Each step either advances or moves to `Failed` and returns the error.
//! A failed run is terminal: nothing is cleaned up and nothing is retried.
//! The pipeline holds no state between runs.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{ProjectContext, TemplateRenderer},
    },
    domain::{
        ArtifactKind, ArtifactLabel, CasePattern, DestinationResolver, NamespaceMap, StubRef,
        TemplateData, TransformationConfig, apply_casing, inflection, transform,
    },
    error::{KilnError, KilnResult},
};

// ── State ────────────────────────────────────────────────────────────────────

/// Where a pipeline run currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    ContextValidated,
    Transformed,
    Resolved,
    Rendered,
    Done,
    Failed,
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::ContextValidated => "context-validated",
            Self::Transformed => "transformed",
            Self::Resolved => "resolved",
            Self::Rendered => "rendered",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(s)
    }
}

struct Run {
    state: PipelineState,
}

impl Run {
    fn new() -> Self {
        Self {
            state: PipelineState::Idle,
        }
    }

    fn advance(&mut self, next: PipelineState) {
        debug!(from = %self.state, to = %next, "pipeline transition");
        self.state = next;
    }

    /// Advance to `next` on success, to `Failed` on error.
    fn settle<T>(&mut self, next: PipelineState, result: KilnResult<T>) -> KilnResult<T> {
        match result {
            Ok(value) => {
                self.advance(next);
                Ok(value)
            }
            Err(e) => {
                debug!(error = %e, at = %self.state, "pipeline failed");
                self.advance(PipelineState::Failed);
                Err(e)
            }
        }
    }
}

// ── Request ──────────────────────────────────────────────────────────────────

/// Where the artifact's directory comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DestinationProvider {
    /// Look up the label's group kind in the project's namespace table.
    #[default]
    Namespace,
    /// Use this directory; relative paths are joined onto the app root.
    Directory(PathBuf),
}

/// Per-run collaborators: which stub, which directory, which extra data.
#[derive(Debug, Clone, PartialEq)]
pub struct Capabilities {
    pub stub: StubRef,
    pub destination: DestinationProvider,
    pub template_data: TemplateData,
}

impl Capabilities {
    /// The kind's own stub, namespace lookup, no extra data.
    pub fn for_kind(kind: ArtifactKind) -> Self {
        Self {
            stub: StubRef::new(kind.stub()),
            destination: DestinationProvider::Namespace,
            template_data: TemplateData::new(),
        }
    }
}

/// Everything one pipeline run needs.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub app_root: PathBuf,
    pub label: ArtifactLabel,
    pub transformations: TransformationConfig,
    pub capabilities: Capabilities,
    pub overwrite: bool,
}

impl GenerationRequest {
    /// Request using the kind's default conventions and capabilities.
    pub fn new(app_root: impl Into<PathBuf>, label: ArtifactLabel) -> Self {
        let kind = label.kind();
        Self {
            app_root: app_root.into(),
            transformations: kind.conventions(),
            capabilities: Capabilities::for_kind(kind),
            label,
            overwrite: false,
        }
    }

    pub fn with_transformations(mut self, transformations: TransformationConfig) -> Self {
        self.transformations = transformations;
        self
    }

    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}

// ── Output ───────────────────────────────────────────────────────────────────

/// A resolved but not yet rendered artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactPlan {
    pub destination_dir: PathBuf,
    pub filename: String,
    pub kind: ArtifactKind,
    pub label: String,
    pub path: PathBuf,
    pub stub: StubRef,
    #[serde(skip)]
    pub stem: String,
}

/// Description of a written artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactDescriptor {
    pub destination_dir: PathBuf,
    pub filename: String,
    pub kind: ArtifactKind,
    pub label: String,
    pub path: PathBuf,
}

// ── Pipeline ─────────────────────────────────────────────────────────────────

/// Turns a [`GenerationRequest`] into a written file.
pub struct GenerationPipeline {
    context: Box<dyn ProjectContext>,
    renderer: Box<dyn TemplateRenderer>,
}

impl GenerationPipeline {
    pub fn new(context: Box<dyn ProjectContext>, renderer: Box<dyn TemplateRenderer>) -> Self {
        Self { context, renderer }
    }

    /// Run up to `Resolved` without rendering. Backs `--dry-run`.
    #[instrument(
        skip_all,
        fields(kind = %request.label.kind(), name = %request.label.raw_name())
    )]
    pub fn plan(&self, request: &GenerationRequest) -> KilnResult<ArtifactPlan> {
        let mut run = Run::new();
        self.resolve(&mut run, request)
    }

    /// Run the whole machine and write the artifact.
    #[instrument(
        skip_all,
        fields(kind = %request.label.kind(), name = %request.label.raw_name())
    )]
    pub fn generate(&self, request: &GenerationRequest) -> KilnResult<ArtifactDescriptor> {
        let mut run = Run::new();
        let plan = self.resolve(&mut run, request)?;

        let mut data = request.capabilities.template_data.clone();
        data.merge_defaults(builtin_data(&plan, request));

        let written = self.renderer.render(
            &plan.stub,
            &plan.destination_dir,
            &plan.filename,
            &data,
            request.overwrite,
        );
        let path = run.settle(PipelineState::Rendered, written)?;
        run.advance(PipelineState::Done);

        info!(path = %path.display(), "Artifact generated");

        Ok(ArtifactDescriptor {
            destination_dir: plan.destination_dir,
            filename: plan.filename,
            kind: plan.kind,
            label: plan.label,
            path,
        })
    }

    /// Idle → ContextValidated → Transformed → Resolved.
    fn resolve(&self, run: &mut Run, request: &GenerationRequest) -> KilnResult<ArtifactPlan> {
        let label = &request.label;

        let context: KilnResult<()> = if self.context.has_project_root(&request.app_root) {
            Ok(())
        } else {
            Err(ApplicationError::NotAProject {
                root: request.app_root.clone(),
            }
            .into())
        };
        run.settle(PipelineState::ContextValidated, context)?;

        let name = transform(label, &request.transformations).map_err(KilnError::from);
        let name = run.settle(PipelineState::Transformed, name)?;

        let destination_dir: KilnResult<PathBuf> = match &request.capabilities.destination {
            DestinationProvider::Directory(dir) => Ok(request.app_root.join(dir)),
            DestinationProvider::Namespace => {
                let group = label.group_label();
                DestinationResolver::resolve(group, &ProjectNamespaces(self.context.as_ref()))
                    .ok_or_else(|| {
                        ApplicationError::UnresolvableDestination {
                            kind: group,
                            namespace: group.namespace(),
                        }
                        .into()
                    })
            }
        };
        let destination_dir = run.settle(PipelineState::Resolved, destination_dir)?;

        Ok(ArtifactPlan {
            path: destination_dir.join(&name.filename),
            destination_dir,
            filename: name.filename,
            kind: label.kind(),
            label: label.raw_name().to_string(),
            stub: request.capabilities.stub.clone(),
            stem: name.stem,
        })
    }
}

/// The project context seen as a namespace table.
struct ProjectNamespaces<'a>(&'a dyn ProjectContext);

impl NamespaceMap for ProjectNamespaces<'_> {
    fn directory(&self, namespace: &str) -> Option<PathBuf> {
        self.0.resolve_namespace_directory(namespace)
    }
}

/// Variables every stub can use; caller data takes precedence.
fn builtin_data(plan: &ArtifactPlan, request: &GenerationRequest) -> TemplateData {
    let (_, leaf) = request.label.segments();

    TemplateData::new()
        .with("filename", plan.stem.as_str())
        .with("extname", request.transformations.extname.as_str())
        .with("kind", plan.kind.as_str())
        .with("resourceName", request.label.raw_name())
        .with("name", leaf)
        .with("singular", inflection::singularize(leaf))
        .with("plural", inflection::pluralize(leaf))
        .with("camelName", apply_casing(leaf, CasePattern::CamelCase))
        .with("snakeName", apply_casing(leaf, CasePattern::SnakeCase))
        .with("pascalName", apply_casing(leaf, CasePattern::PascalCase))
}
