//! Application layer errors.
//!
//! These are environment and collaborator failures: the project is missing,
//! its layout has no directory for a kind, or the renderer could not write.
//! Input defects are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ArtifactKind;
use crate::error::ErrorCategory;

/// Errors that occur during pipeline orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// No project configuration at the requested root.
    #[error("'{}' is not a kiln project", root.display())]
    NotAProject { root: PathBuf },

    /// The project has no directory for this kind.
    #[error("no directory configured for {kind} (namespace '{namespace}')")]
    UnresolvableDestination {
        kind: ArtifactKind,
        namespace: &'static str,
    },

    /// The rendering collaborator failed.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Stub store access failed (lock poisoned).
    #[error("stub store is unavailable")]
    StoreLockError,
}

/// Failures reported by a `TemplateRenderer`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("stub '{stub}' not found")]
    TemplateNotFound { stub: String },

    #[error("'{}' already exists", path.display())]
    DestinationExists { path: PathBuf },

    #[error("failed to write '{}': {reason}", path.display())]
    WriteFailed { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotAProject { root } => vec![
                format!("No .kilnrc.json found in {}", root.display()),
                "Run `kiln init` to create one".into(),
                "Or point at the project with --project <dir>".into(),
            ],
            Self::UnresolvableDestination { kind, namespace } => vec![
                format!("Add \"{namespace}\" to the namespaces table in .kilnrc.json"),
                format!("Or pass --dir <path> to place this {kind} explicitly"),
            ],
            Self::Render(RenderError::TemplateNotFound { stub }) => vec![
                format!("Create stubs/{stub}.stub in the project"),
                "Or pick another stub with --template".into(),
            ],
            Self::Render(RenderError::DestinationExists { .. }) => {
                vec!["Use --force to overwrite the existing file".into()]
            }
            Self::Render(RenderError::WriteFailed { path, .. }) => vec![
                format!("Check write permissions for {}", path.display()),
            ],
            Self::StoreLockError => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotAProject { .. } | Self::UnresolvableDestination { .. } => {
                ErrorCategory::Configuration
            }
            Self::Render(RenderError::TemplateNotFound { .. }) => ErrorCategory::NotFound,
            Self::Render(RenderError::DestinationExists { .. }) => ErrorCategory::Validation,
            Self::Render(RenderError::WriteFailed { .. }) | Self::StoreLockError => {
                ErrorCategory::Internal
            }
        }
    }

    /// Stable identifier printed next to the message.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotAProject { .. } => "not-a-project",
            Self::UnresolvableDestination { .. } => "unresolvable-destination",
            Self::Render(_) => "render",
            Self::StoreLockError => "internal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolvable_destination_names_the_kind() {
        let err = ApplicationError::UnresolvableDestination {
            kind: ArtifactKind::Migration,
            namespace: "migrations",
        };
        assert!(err.to_string().contains("migration"));
        assert!(err.suggestions().iter().any(|s| s.contains("\"migrations\"")));
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn render_errors_pass_through_unchanged() {
        let err: ApplicationError = RenderError::TemplateNotFound {
            stub: "model".into(),
        }
        .into();
        assert_eq!(err.to_string(), "stub 'model' not found");
        assert_eq!(err.code(), "render");
    }
}
