//! Error handling for the kiln CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages and a stable code
//! - Actionable suggestions
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use kiln_core::error::{ErrorCategory as CoreCategory, KilnError};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input that clap could not catch.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `kiln-core` or an adapter.
    #[error(transparent)]
    Core(#[from] KilnError),

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::ConfigError {
            message: format!("{err:#}"),
            source: Some(err.into()),
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message } => vec![
                format!("Check your input: {message}"),
                "Use --help for usage information".into(),
            ],
            Self::ConfigError { .. } => vec![
                format!(
                    "Check your config file at {}",
                    crate::config::AppConfig::config_path().display()
                ),
                "Environment overrides use the KILN_ prefix, e.g. KILN_OUTPUT__FORMAT=json".into(),
            ],
            Self::Core(core) => core.suggestions(),
            Self::IoError { .. } => vec![
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Stable identifier printed in `Error [<code>]`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "invalid-input",
            Self::ConfigError { .. } => "configuration",
            Self::Core(core) => core.code(),
            Self::IoError { .. } => "io",
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}\n",
            format!("Error [{}]:", self.code()).red().bold(),
            self.to_string().red()
        ));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "  {} {}\n",
                    "\u{2192}".dimmed(), // →
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {suggestion}\n"));
            }
        }

        if !verbose {
            output.push_str(&format!(
                "\n{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = format!("Error [{}]: {}\n", self.code(), self);

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!(code = self.code(), "User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!(code = self.code(), "Not found: {}", self),
            ErrorCategory::Configuration => {
                tracing::error!(code = self.code(), "Configuration error: {}", self)
            }
            ErrorCategory::Internal => {
                tracing::error!(code = self.code(), "Internal error: {}", self)
            }
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Converts foreign error types into [`CliError`] at call-sites with a
/// context message.
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

impl<T> IntoCli<T> for Result<T, serde_json::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::ConfigError {
            message: f().into(),
            source: Some(Box::new(e)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiln_core::application::{ApplicationError, RenderError};
    use kiln_core::domain::{ArtifactKind, DomainError};
    use std::io;

    fn core(err: impl Into<KilnError>) -> CliError {
        CliError::Core(err.into())
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn invalid_name_is_a_user_error() {
        let err = core(DomainError::EmptyName);
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.code(), "empty-name");
    }

    #[test]
    fn missing_template_is_not_found() {
        let err = core(RenderError::TemplateNotFound {
            stub: "widget".into(),
        });
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn not_a_project_is_a_configuration_error() {
        let err = core(ApplicationError::NotAProject {
            root: "/tmp/nowhere".into(),
        });
        assert_eq!(err.exit_code(), 4);
        assert_eq!(err.code(), "not-a-project");
    }

    #[test]
    fn io_error_is_internal() {
        let err = CliError::from(io::Error::other("disk on fire"));
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.code(), "io");
    }

    #[test]
    fn anyhow_errors_become_config_errors() {
        let err = CliError::from(anyhow::anyhow!("bad toml"));
        assert_eq!(err.exit_code(), 4);
        assert!(err.to_string().contains("bad toml"));
    }

    // ── formatting ────────────────────────────────────────────────────────

    #[test]
    fn plain_format_leads_with_code() {
        let err = core(ApplicationError::UnresolvableDestination {
            kind: ArtifactKind::Migration,
            namespace: "migrations",
        });
        let text = err.format_plain(false);
        assert!(text.starts_with("Error [unresolvable-destination]: "));
        assert!(text.contains("migration"));
        assert!(text.contains("Suggestions:"));
        assert!(text.contains("--verbose"));
    }

    #[test]
    fn verbose_plain_format_shows_cause_chain() {
        let err = io::Error::other("root cause");
        let err: CliResult<()> = Err(err).with_cli_context(|| "writing .kilnrc.json");
        let text = err.unwrap_err().format_plain(true);
        assert!(text.contains("I/O error: writing .kilnrc.json"));
        assert!(text.contains("Caused by: root cause"));
        assert!(!text.contains("--verbose"));
    }

    #[test]
    fn destination_exists_suggests_force() {
        let err = core(RenderError::DestinationExists {
            path: "app/Models/User.ts".into(),
        });
        assert!(err.suggestions().iter().any(|s| s.contains("--force")));
    }
}
