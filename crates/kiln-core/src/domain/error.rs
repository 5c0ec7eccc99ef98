// ============================================================================
// domain/error.rs - INPUT VALIDATION ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Every variant is an input defect: it is reported immediately and never
/// retried, because the same input fails the same way every time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("unknown artifact kind '{token}'")]
    InvalidKind { token: String },

    #[error("resource name cannot be empty")]
    EmptyName,

    #[error("resource name '{name}' leaves the destination directory")]
    UnsafePath { name: String },

    #[error("invalid extension '{extname}': must start with '.'")]
    InvalidExtension { extname: String },

    #[error("invalid {option} '{value}': expected one of {expected}")]
    InvalidOption {
        option: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidKind { token } => vec![
                format!("'{token}' is not a known artifact kind"),
                "Try: kiln kinds".into(),
            ],
            Self::EmptyName => vec![
                "Pass a resource name, e.g. `kiln model user`".into(),
            ],
            Self::UnsafePath { .. } => vec![
                "Use a relative name without '..' segments, e.g. `admin/users`".into(),
                "Pass --dir <path> to place the file somewhere else".into(),
            ],
            Self::InvalidExtension { extname } => vec![
                format!("Prefix the extension with a dot: '.{extname}'"),
            ],
            Self::InvalidOption { option, expected, .. } => {
                vec![format!("Valid values for {option}: {expected}")]
            }
        }
    }

    /// Stable identifier printed next to the message.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidKind { .. } => "invalid-kind",
            Self::EmptyName => "empty-name",
            Self::UnsafePath { .. } => "unsafe-path",
            Self::InvalidExtension { .. } => "invalid-extension",
            Self::InvalidOption { .. } => "invalid-option",
        }
    }
}

