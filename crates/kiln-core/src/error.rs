//! Unified error handling for Kiln Core.
//!
//! Wraps domain and application errors in one type so callers get a single
//! `Result` alias plus suggestions, a display category and a stable code.

use thiserror::Error;

use crate::application::{ApplicationError, RenderError};
use crate::domain::DomainError;

/// Root error type for Kiln Core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KilnError {
    /// Invalid input: unknown kind, empty name, bad extension or option.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Project context, destination or rendering failures.
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl KilnError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { .. } => vec![
                "Check .kilnrc.json and your kiln config file".into(),
                "Run `kiln config path` to see where config is read from".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in kiln".into(),
                "Re-run with -vvv and include the output when reporting it".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Stable, machine-readable identifier for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Domain(e) => e.code(),
            Self::Application(e) => e.code(),
            Self::Configuration { .. } => "configuration",
            Self::Internal { .. } => "internal",
        }
    }
}

impl From<RenderError> for KilnError {
    fn from(err: RenderError) -> Self {
        Self::Application(ApplicationError::Render(err))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type KilnResult<T> = Result<T, KilnError>;
