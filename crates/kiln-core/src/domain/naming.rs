//! Name transformation: resource name → convention-correct filename.
//!
//! # Pipeline
//!
//! ```text
//! raw leaf ──strip suffix──▶ form ──▶ casing ──▶ suffix ──▶ extension
//!  "usersController"  "users"   "user"   "User"  "UserController"  "UserController.ts"
//! ```
//!
//! The order is fixed. Casing runs after inflection so irregular plurals are
//! inflected as whole words, and the suffix is appended last so it is never
//! itself re-cased.
//!
//! Exact mode ([`TransformationConfig::create_exact`]) skips everything but
//! the extension and takes the caller's name literally.
//!
//! Everything here is pure: ASCII rules only, no locale, no I/O.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use heck::{ToLowerCamelCase, ToPascalCase, ToSnakeCase};
use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, inflection, kind::ArtifactKind, label::ArtifactLabel};

// ── Form ─────────────────────────────────────────────────────────────────────

/// Grammatical number applied to the resource name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Form {
    Singular,
    Plural,
}

impl Form {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Singular => "singular",
            Self::Plural => "plural",
        }
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Form {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "singular" | "one" => Ok(Self::Singular),
            "plural" | "many" => Ok(Self::Plural),
            other => Err(DomainError::InvalidOption {
                option: "form",
                value: other.to_string(),
                expected: "singular, plural",
            }),
        }
    }
}

// ── CasePattern ──────────────────────────────────────────────────────────────

/// Identifier casing applied to the resource name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CasePattern {
    CamelCase,
    SnakeCase,
    PascalCase,
}

impl CasePattern {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CamelCase => "camelcase",
            Self::SnakeCase => "snakecase",
            Self::PascalCase => "pascalcase",
        }
    }
}

impl fmt::Display for CasePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CasePattern {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "camelcase" | "camel" => Ok(Self::CamelCase),
            "snakecase" | "snake" => Ok(Self::SnakeCase),
            "pascalcase" | "pascal" => Ok(Self::PascalCase),
            _ => Err(DomainError::InvalidOption {
                option: "pattern",
                value: s.to_string(),
                expected: "camelcase, snakecase, pascalcase",
            }),
        }
    }
}

// ── TransformationConfig ─────────────────────────────────────────────────────

/// Which transformations to apply to a resource name.
///
/// | Field              | Default | Effect when unset                     |
/// |--------------------|---------|---------------------------------------|
/// | `form`             | `None`  | number left as typed                  |
/// | `pattern`          | `None`  | casing left as typed                  |
/// | `suffix`           | `None`  | nothing stripped or appended          |
/// | `extname`          | `.ts`   | always applied; must start with `.`   |
/// | `form_ignore_list` | empty   | every kind gets `form`                |
/// | `create_exact`     | `false` | when `true`, only `extname` is honored|
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformationConfig {
    pub form: Option<Form>,
    pub pattern: Option<CasePattern>,
    pub suffix: Option<String>,
    pub extname: String,
    pub form_ignore_list: BTreeSet<ArtifactKind>,
    pub create_exact: bool,
}

impl Default for TransformationConfig {
    fn default() -> Self {
        Self {
            form: None,
            pattern: None,
            suffix: None,
            extname: ".ts".to_string(),
            form_ignore_list: BTreeSet::new(),
            create_exact: false,
        }
    }
}

impl TransformationConfig {
    pub fn with_form(mut self, form: Form) -> Self {
        self.form = Some(form);
        self
    }

    pub fn with_pattern(mut self, pattern: CasePattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn with_extname(mut self, extname: impl Into<String>) -> Self {
        self.extname = extname.into();
        self
    }

    /// Exempt `kind` from form transformation.
    pub fn ignore_form_for(mut self, kind: ArtifactKind) -> Self {
        self.form_ignore_list.insert(kind);
        self
    }

    /// Switch to exact mode: the name is used literally.
    pub fn exact(mut self) -> Self {
        self.create_exact = true;
        self
    }
}

// ── Output ───────────────────────────────────────────────────────────────────

/// Result of transforming one label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformedName {
    /// Transformed leaf without extension (`UserController`).
    pub stem: String,
    /// Path relative to the destination directory (`admin/UserController.ts`).
    pub filename: String,
}

// ── Operations ───────────────────────────────────────────────────────────────

/// Pluralize or singularize `name` unless `kind` is exempt.
pub fn apply_form(
    name: &str,
    form: Form,
    ignore_list: &BTreeSet<ArtifactKind>,
    kind: ArtifactKind,
) -> String {
    if ignore_list.contains(&kind) {
        return name.to_string();
    }

    match form {
        Form::Singular => inflection::singularize(name),
        Form::Plural => inflection::pluralize(name),
    }
}

/// Re-case `name` after tokenizing on case boundaries, `_` and `-`.
///
/// Names containing non-ASCII characters are returned unchanged.
pub fn apply_casing(name: &str, pattern: CasePattern) -> String {
    if !name.is_ascii() {
        return name.to_string();
    }

    match pattern {
        CasePattern::CamelCase => name.to_lower_camel_case(),
        CasePattern::SnakeCase => name.to_snake_case(),
        CasePattern::PascalCase => name.to_pascal_case(),
    }
}

/// Append `suffix` unless `name` already ends with it.
pub fn apply_suffix(name: &str, suffix: &str) -> String {
    if name.ends_with(suffix) {
        name.to_string()
    } else {
        format!("{name}{suffix}")
    }
}

/// `name` + `extname`; the extension must start with `.`.
pub fn build_filename(name: &str, extname: &str) -> Result<String, DomainError> {
    validate_extname(extname)?;
    Ok(format!("{name}{extname}"))
}

/// Exact mode: the caller's name taken literally, plus the extension.
pub fn compose_exact(raw_name: &str, extname: &str) -> String {
    format!("{raw_name}{extname}")
}

/// Run the full naming pipeline for `label` under `config`.
pub fn transform(
    label: &ArtifactLabel,
    config: &TransformationConfig,
) -> Result<TransformedName, DomainError> {
    if config.create_exact {
        validate_extname(&config.extname)?;
        let (_, leaf) = label.segments();
        return Ok(TransformedName {
            stem: leaf.to_string(),
            filename: compose_exact(label.raw_name(), &config.extname),
        });
    }

    let (dirs, leaf) = label.segments();
    let suffix = config.suffix.as_deref().filter(|s| !s.is_empty());

    let mut name = match suffix {
        Some(suffix) => strip_suffix(leaf, suffix),
        None => leaf.to_string(),
    };

    if let Some(form) = config.form {
        name = apply_form(&name, form, &config.form_ignore_list, label.kind());
    }
    if let Some(pattern) = config.pattern {
        name = apply_casing(&name, pattern);
    }
    if let Some(suffix) = suffix {
        name = apply_suffix(&name, suffix);
    }

    let file = build_filename(&name, &config.extname)?;
    let filename = dirs
        .iter()
        .copied()
        .chain(std::iter::once(file.as_str()))
        .collect::<Vec<_>>()
        .join("/");

    Ok(TransformedName {
        stem: name,
        filename,
    })
}

fn validate_extname(extname: &str) -> Result<(), DomainError> {
    if extname.starts_with('.') {
        Ok(())
    } else {
        Err(DomainError::InvalidExtension {
            extname: extname.to_string(),
        })
    }
}

/// Drop a trailing copy of `suffix` (ASCII case-insensitive) and any
/// separator left in front of it.
///
/// The copy must start a word of its own: after `_`, `-` or a space, or as
/// an uppercase letter following a lowercase letter or digit
/// (`usersController`). `transactions` keeps its `actions`. A name that is
/// only the suffix is kept.
fn strip_suffix(name: &str, suffix: &str) -> String {
    if name.len() <= suffix.len()
        || !name
            .to_ascii_lowercase()
            .ends_with(&suffix.to_ascii_lowercase())
    {
        return name.to_string();
    }

    let start = name.len() - suffix.len();
    let (Some(head), Some(tail)) = (name.get(..start), name.get(start..)) else {
        return name.to_string();
    };
    if !starts_word(head, tail) {
        return name.to_string();
    }

    let stripped = head.trim_end_matches(['_', '-', ' ']);
    if stripped.is_empty() {
        name.to_string()
    } else {
        stripped.to_string()
    }
}

fn starts_word(head: &str, tail: &str) -> bool {
    let (Some(prev), Some(first)) = (head.chars().last(), tail.chars().next()) else {
        return false;
    };
    matches!(prev, '_' | '-' | ' ')
        || ((prev.is_ascii_lowercase() || prev.is_ascii_digit()) && first.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn label(name: &str, kind: ArtifactKind) -> ArtifactLabel {
        ArtifactLabel::new(name, kind).unwrap()
    }

    #[test]
    fn form_respects_ignore_list() {
        let ignore: BTreeSet<_> = [ArtifactKind::ModelInterface].into_iter().collect();
        assert_eq!(
            apply_form("users", Form::Singular, &ignore, ArtifactKind::ModelInterface),
            "users"
        );
        assert_eq!(
            apply_form("users", Form::Singular, &ignore, ArtifactKind::Model),
            "user"
        );
    }

    #[test]
    fn casing_variants() {
        assert_eq!(apply_casing("user_profile", CasePattern::PascalCase), "UserProfile");
        assert_eq!(apply_casing("UserProfile", CasePattern::SnakeCase), "user_profile");
        assert_eq!(apply_casing("user-profile", CasePattern::CamelCase), "userProfile");
    }

    #[test]
    fn casing_leaves_non_ascii_alone() {
        assert_eq!(apply_casing("Über_Nutzer", CasePattern::SnakeCase), "Über_Nutzer");
    }

    #[test]
    fn suffix_is_not_duplicated() {
        assert_eq!(apply_suffix("User", "Controller"), "UserController");
        assert_eq!(apply_suffix("UserController", "Controller"), "UserController");
    }

    #[test]
    fn filename_requires_dot_extension() {
        assert_eq!(build_filename("User", ".ts").unwrap(), "User.ts");
        assert_eq!(
            build_filename("User", "ts"),
            Err(DomainError::InvalidExtension {
                extname: "ts".into()
            })
        );
    }

    #[test]
    fn model_scenario() {
        let cfg = TransformationConfig::default()
            .with_form(Form::Singular)
            .with_pattern(CasePattern::PascalCase)
            .with_extname(".ts");
        let out = transform(&label("user", ArtifactKind::Model), &cfg).unwrap();
        assert_eq!(out.filename, "User.ts");
        assert_eq!(out.stem, "User");
    }

    #[test]
    fn controller_scenario() {
        let cfg = TransformationConfig::default()
            .with_form(Form::Singular)
            .with_pattern(CasePattern::PascalCase)
            .with_suffix("Controller")
            .with_extname(".ts");
        let out = transform(&label("users", ArtifactKind::Controller), &cfg).unwrap();
        assert_eq!(out.filename, "UserController.ts");
    }

    #[test]
    fn existing_suffix_is_stripped_before_form() {
        let cfg = ArtifactKind::Controller.conventions();
        for raw in ["usersController", "UsersController", "users_controller"] {
            let out = transform(&label(raw, ArtifactKind::Controller), &cfg).unwrap();
            assert_eq!(out.filename, "UserController.ts", "input: {raw}");
        }
    }

    #[test]
    fn suffix_inside_a_word_is_not_stripped() {
        let cfg = ArtifactKind::Action.conventions();
        for (raw, expected) in [
            ("transactions", "TransactionsActions.ts"),
            ("reactions", "ReactionsActions.ts"),
            ("userActions", "UsersActions.ts"),
        ] {
            let out = transform(&label(raw, ArtifactKind::Action), &cfg).unwrap();
            assert_eq!(out.filename, expected, "input: {raw}");
        }
    }

    #[test]
    fn route_of_u_noun_plural_is_stable() {
        let cfg = ArtifactKind::Route.conventions();
        for raw in ["sku", "skus"] {
            let out = transform(&label(raw, ArtifactKind::Route), &cfg).unwrap();
            assert_eq!(out.filename, "skus.ts", "input: {raw}");
        }
    }

    #[test]
    fn name_equal_to_suffix_is_kept() {
        let cfg = TransformationConfig::default()
            .with_pattern(CasePattern::PascalCase)
            .with_suffix("Controller");
        let out = transform(&label("controller", ArtifactKind::Controller), &cfg).unwrap();
        assert_eq!(out.filename, "Controller.ts");
    }

    #[test]
    fn exact_mode_takes_name_literally() {
        let cfg = ArtifactKind::Controller
            .conventions()
            .with_extname(".ts")
            .exact();
        let out = transform(&label("custom/path/Thing", ArtifactKind::Controller), &cfg).unwrap();
        assert_eq!(out.filename, "custom/path/Thing.ts");
        assert_eq!(out.stem, "Thing");
    }

    #[test]
    fn exact_mode_still_checks_extension() {
        let cfg = TransformationConfig::default().with_extname("ts").exact();
        assert!(matches!(
            transform(&label("thing", ArtifactKind::File), &cfg),
            Err(DomainError::InvalidExtension { .. })
        ));
    }

    #[test]
    fn nested_names_keep_directories_verbatim() {
        let cfg = ArtifactKind::Controller.conventions();
        let out = transform(&label("Admin/users", ArtifactKind::Controller), &cfg).unwrap();
        assert_eq!(out.filename, "Admin/UserController.ts");
        assert_eq!(out.stem, "UserController");
    }

    #[test]
    fn migration_conventions() {
        let cfg = ArtifactKind::Migration.conventions();
        let out = transform(&label("BlogPost", ArtifactKind::Migration), &cfg).unwrap();
        assert_eq!(out.filename, "blog_posts.ts");
    }

    #[test]
    fn route_conventions() {
        let cfg = ArtifactKind::Route.conventions();
        let out = transform(&label("order_item", ArtifactKind::Route), &cfg).unwrap();
        assert_eq!(out.filename, "orderItems.ts");
    }

    #[test]
    fn form_and_pattern_parse_aliases() {
        assert_eq!("Plural".parse::<Form>().unwrap(), Form::Plural);
        assert_eq!("snake".parse::<CasePattern>().unwrap(), CasePattern::SnakeCase);
        assert_eq!("pascal-case".parse::<CasePattern>().unwrap(), CasePattern::PascalCase);
        assert!("kebab".parse::<CasePattern>().is_err());
        assert!("dual".parse::<Form>().is_err());
    }

    const IDENTIFIER: &str = "[a-z]{1,10}|[a-z]{1,8}(_[a-z]{1,8}){1,2}|[a-z]{1,8}([A-Z][a-z]{1,8}){1,2}|[A-Z][a-z]{1,8}([A-Z][a-z]{1,8}){0,2}|[A-Z]{1,6}";

    const SUFFIXED: &[ArtifactKind] = &[
        ArtifactKind::Controller,
        ArtifactKind::Action,
        ArtifactKind::CreateOptions,
        ArtifactKind::UpdateOptions,
        ArtifactKind::ModelInterface,
        ArtifactKind::IdentifierOptions,
        ArtifactKind::Validator,
        ArtifactKind::Seeder,
    ];

    proptest! {
        #[test]
        fn form_is_idempotent(name in IDENTIFIER, plural in any::<bool>()) {
            let form = if plural { Form::Plural } else { Form::Singular };
            let none = BTreeSet::new();
            let once = apply_form(&name, form, &none, ArtifactKind::Model);
            let twice = apply_form(&once, form, &none, ArtifactKind::Model);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn single_words_are_never_cut_by_the_suffix(
            leaf in "[a-z]{1,12}",
            kind in prop::sample::select(SUFFIXED),
        ) {
            let cfg = kind.conventions();
            let suffix = cfg.suffix.clone().unwrap_or_default();
            let formed = match cfg.form {
                Some(form) => apply_form(&leaf, form, &cfg.form_ignore_list, kind),
                None => leaf.clone(),
            };
            let cased = match cfg.pattern {
                Some(pattern) => apply_casing(&formed, pattern),
                None => formed,
            };

            let out = transform(&label(&leaf, kind), &cfg).unwrap();
            prop_assert_eq!(out.stem, apply_suffix(&cased, &suffix));
        }

        #[test]
        fn camel_cased_suffix_copy_is_stripped(
            leaf in "[a-z]{1,10}",
            kind in prop::sample::select(SUFFIXED),
        ) {
            let cfg = kind.conventions();
            let suffix = cfg.suffix.clone().unwrap_or_default();
            let plain = transform(&label(&leaf, kind), &cfg).unwrap();
            let doubled = transform(&label(&format!("{leaf}{suffix}"), kind), &cfg).unwrap();
            prop_assert_eq!(doubled.filename, plain.filename);
        }

        #[test]
        fn suffix_is_idempotent(name in "[A-Za-z]{1,12}", suffix in "[A-Z][a-z]{1,8}") {
            let once = apply_suffix(&name, &suffix);
            prop_assert_eq!(apply_suffix(&once, &suffix), once.clone());
        }

        #[test]
        fn camel_snake_camel_round_trips(
            head in "[a-z]{1,8}",
            tail in prop::collection::vec("[A-Z][a-z]{1,8}", 0..4),
        ) {
            let camel = format!("{head}{}", tail.concat());
            let snake = apply_casing(&camel, CasePattern::SnakeCase);
            prop_assert_eq!(apply_casing(&snake, CasePattern::CamelCase), camel);
        }
    }
}
