//! The artifact kind registry.
//!
//! # Design
//!
//! `ArtifactKind` is a closed enum. Everything the rest of the crate needs to
//! know about a kind (its namespace key, its naming conventions, its default
//! stub) is plain data returned from an exhaustive `match` here, so the
//! transformer and the resolver never branch on a kind themselves.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant and append it to `ALL`
//! 2. Add the `as_str`, `namespace` and `conventions` arms
//! 3. Ship a stub for it in `kiln-adapters`
//! 4. Add the subcommand variant in `kiln-cli`

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    naming::{CasePattern, Form, TransformationConfig},
};

/// A category of generated source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    File,
    View,
    Model,
    Migration,
    Controller,
    Action,
    CreateOptions,
    UpdateOptions,
    ModelInterface,
    IdentifierOptions,
    Route,
    Validator,
    Index,
    Seeder,
}

impl ArtifactKind {
    /// Every kind, in help-text order.
    pub const ALL: [ArtifactKind; 14] = [
        Self::File,
        Self::View,
        Self::Model,
        Self::Migration,
        Self::Controller,
        Self::Action,
        Self::CreateOptions,
        Self::UpdateOptions,
        Self::ModelInterface,
        Self::IdentifierOptions,
        Self::Route,
        Self::Validator,
        Self::Index,
        Self::Seeder,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::View => "view",
            Self::Model => "model",
            Self::Migration => "migration",
            Self::Controller => "controller",
            Self::Action => "action",
            Self::CreateOptions => "create-options",
            Self::UpdateOptions => "update-options",
            Self::ModelInterface => "model-interface",
            Self::IdentifierOptions => "identifier-options",
            Self::Route => "route",
            Self::Validator => "validator",
            Self::Index => "index",
            Self::Seeder => "seeder",
        }
    }

    /// Key looked up in the project's namespace table.
    pub const fn namespace(&self) -> &'static str {
        match self {
            Self::File => "files",
            Self::View => "views",
            Self::Model => "models",
            Self::Migration => "migrations",
            Self::Controller => "controllers",
            Self::Action => "actions",
            Self::CreateOptions => "create-options",
            Self::UpdateOptions => "update-options",
            Self::ModelInterface => "model-interfaces",
            Self::IdentifierOptions => "identifier-options",
            Self::Route => "routes",
            Self::Validator => "validators",
            Self::Index => "indexes",
            Self::Seeder => "seeders",
        }
    }

    /// Identifier of the stub rendered for this kind unless overridden.
    pub const fn stub(&self) -> &'static str {
        self.as_str()
    }

    /// Default naming conventions for this kind.
    pub fn conventions(&self) -> TransformationConfig {
        let (form, pattern, suffix, extname) = match self {
            Self::File => (None, None, None, ".ts"),
            Self::View => (None, Some(CasePattern::SnakeCase), None, ".edge"),
            Self::Model => (Some(Form::Singular), Some(CasePattern::PascalCase), None, ".ts"),
            Self::Migration => (Some(Form::Plural), Some(CasePattern::SnakeCase), None, ".ts"),
            Self::Controller => (
                Some(Form::Singular),
                Some(CasePattern::PascalCase),
                Some("Controller"),
                ".ts",
            ),
            Self::Action => (
                Some(Form::Plural),
                Some(CasePattern::PascalCase),
                Some("Actions"),
                ".ts",
            ),
            Self::CreateOptions => (
                Some(Form::Singular),
                Some(CasePattern::PascalCase),
                Some("CreateOptions"),
                ".ts",
            ),
            Self::UpdateOptions => (
                Some(Form::Singular),
                Some(CasePattern::PascalCase),
                Some("UpdateOptions"),
                ".ts",
            ),
            Self::ModelInterface => (
                Some(Form::Singular),
                Some(CasePattern::PascalCase),
                Some("Interface"),
                ".ts",
            ),
            Self::IdentifierOptions => (
                Some(Form::Singular),
                Some(CasePattern::PascalCase),
                Some("IdentifierOptions"),
                ".ts",
            ),
            Self::Route => (Some(Form::Plural), Some(CasePattern::CamelCase), None, ".ts"),
            Self::Validator => (
                Some(Form::Singular),
                Some(CasePattern::PascalCase),
                Some("Validator"),
                ".ts",
            ),
            Self::Index => (None, None, None, ".ts"),
            Self::Seeder => (
                Some(Form::Singular),
                Some(CasePattern::PascalCase),
                Some("Seeder"),
                ".ts",
            ),
        };

        TransformationConfig {
            form,
            pattern,
            suffix: suffix.map(str::to_string),
            extname: extname.to_string(),
            ..TransformationConfig::default()
        }
    }
}

/// Whether `token` names a registered kind.
pub fn is_valid_kind(token: &str) -> bool {
    token.parse::<ArtifactKind>().is_ok()
}

/// All registered kinds, in help-text order.
pub fn all_kinds() -> &'static [ArtifactKind] {
    &ArtifactKind::ALL
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        ArtifactKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| DomainError::InvalidKind {
                token: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_round_trips_through_its_token() {
        for kind in all_kinds() {
            assert_eq!(kind.as_str().parse::<ArtifactKind>().unwrap(), *kind);
        }
    }

    #[test]
    fn parsing_is_case_insensitive_and_accepts_underscores() {
        assert_eq!(
            "Model_Interface".parse::<ArtifactKind>().unwrap(),
            ArtifactKind::ModelInterface
        );
        assert_eq!("SEEDER".parse::<ArtifactKind>().unwrap(), ArtifactKind::Seeder);
    }

    #[test]
    fn unknown_token_is_invalid_kind() {
        assert!(!is_valid_kind("factory"));
        assert!(!is_valid_kind(""));
        assert_eq!(
            "factory".parse::<ArtifactKind>(),
            Err(DomainError::InvalidKind {
                token: "factory".into()
            })
        );
    }

    #[test]
    fn all_kinds_is_ordered_and_complete() {
        let kinds = all_kinds();
        assert_eq!(kinds.len(), 14);
        assert_eq!(kinds.first(), Some(&ArtifactKind::File));
        assert_eq!(kinds.last(), Some(&ArtifactKind::Seeder));
    }

    #[test]
    fn namespaces_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for kind in all_kinds() {
            assert!(seen.insert(kind.namespace()), "duplicate: {kind}");
        }
    }

    #[test]
    fn controller_conventions_carry_suffix() {
        let cfg = ArtifactKind::Controller.conventions();
        assert_eq!(cfg.form, Some(Form::Singular));
        assert_eq!(cfg.pattern, Some(CasePattern::PascalCase));
        assert_eq!(cfg.suffix.as_deref(), Some("Controller"));
        assert_eq!(cfg.extname, ".ts");
        assert!(!cfg.create_exact);
    }

    #[test]
    fn serde_uses_kebab_case_tokens() {
        let json = serde_json::to_string(&ArtifactKind::CreateOptions).unwrap();
        assert_eq!(json, "\"create-options\"");
    }
}
