//! `ArtifactLabel`: one named thing to generate.

use std::fmt;
use std::path::Path;

use crate::domain::{error::DomainError, kind::ArtifactKind};

/// A validated resource name bound to exactly one [`ArtifactKind`].
///
/// Immutable once built. The name is stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactLabel {
    raw_name: String,
    kind: ArtifactKind,
    group: ArtifactKind,
}

impl ArtifactLabel {
    /// Bind `raw_name` to `kind`.
    ///
    /// Fails with [`DomainError::EmptyName`] when the name is blank and with
    /// [`DomainError::UnsafePath`] when it is absolute or has a `..` segment.
    pub fn new(raw_name: impl AsRef<str>, kind: ArtifactKind) -> Result<Self, DomainError> {
        let trimmed = raw_name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyName);
        }
        if escapes_destination(trimmed) {
            return Err(DomainError::UnsafePath {
                name: trimmed.to_string(),
            });
        }

        Ok(Self {
            raw_name: trimmed.to_string(),
            kind,
            group: kind,
        })
    }

    /// Same as [`ArtifactLabel::new`] but takes the kind as a user token.
    ///
    /// The kind is checked first, so an unknown kind with an empty name
    /// reports [`DomainError::InvalidKind`].
    pub fn parse(raw_name: impl AsRef<str>, kind: &str) -> Result<Self, DomainError> {
        let kind = kind.parse::<ArtifactKind>()?;
        Self::new(raw_name, kind)
    }

    pub fn raw_name(&self) -> &str {
        &self.raw_name
    }

    pub const fn kind(&self) -> ArtifactKind {
        self.kind
    }

    /// The kind this label is grouped under when resolving a destination.
    pub const fn group_label(&self) -> ArtifactKind {
        self.group
    }

    /// Split the name into leading directory segments and the leaf.
    ///
    /// `"admin/users"` becomes `(["admin"], "users")`. Empty segments from
    /// doubled or trailing slashes are dropped.
    pub fn segments(&self) -> (Vec<&str>, &str) {
        let mut parts: Vec<&str> = self
            .raw_name
            .split(['/', '\\'])
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();

        // new() guarantees at least one non-blank character; a name made only
        // of separators keeps its raw form as the leaf.
        match parts.pop() {
            Some(leaf) => (parts, leaf),
            None => (Vec::new(), self.raw_name.as_str()),
        }
    }
}

fn escapes_destination(name: &str) -> bool {
    name.starts_with(['/', '\\'])
        || Path::new(name).is_absolute()
        || name.split(['/', '\\']).any(|segment| segment.trim() == "..")
}

impl fmt::Display for ArtifactLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.raw_name)
    }
}
