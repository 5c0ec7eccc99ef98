//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `KILN_`-prefixed environment variables (`KILN_OUTPUT__FORMAT=json`)
//! 3. Config file (`--config` or [`AppConfig::config_path`])
//! 4. Built-in defaults (always present)

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use kiln_core::domain::{ArtifactKind, CasePattern, Form, TransformationConfig};

use crate::cli::global::OutputFormat;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// Generation behaviour shared by every kind.
    pub generation: GenerationConfig,
    /// Per-kind naming overrides, keyed by kind token (`controller`, ...).
    pub conventions: BTreeMap<String, ConventionOverride>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Kinds that keep the name's grammatical number as typed.
    pub form_ignore_list: Vec<ArtifactKind>,
    /// Replace existing files without `--force`.
    pub overwrite: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            form_ignore_list: vec![ArtifactKind::ModelInterface],
            overwrite: false,
        }
    }
}

/// Replaces individual fields of a kind's built-in conventions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConventionOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<Form>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<CasePattern>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extname: Option<String>,
}

impl ConventionOverride {
    /// Layer this override on top of `base`.
    pub fn apply(&self, mut base: TransformationConfig) -> TransformationConfig {
        if let Some(form) = self.form {
            base.form = Some(form);
        }
        if let Some(pattern) = self.pattern {
            base.pattern = Some(pattern);
        }
        if let Some(suffix) = &self.suffix {
            base.suffix = Some(suffix.clone());
        }
        if let Some(extname) = &self.extname {
            base.extname = extname.clone();
        }
        base
    }
}

impl AppConfig {
    /// Load configuration from the file and the environment.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };

        let config: Self = Config::builder()
            .add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix("KILN")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("generation.form_ignore_list")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("failed to read configuration from {}", path.display()))?
            .try_deserialize()
            .context("configuration has an invalid shape")?;

        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document on its own, without the environment layer.
    #[cfg(test)]
    pub fn from_toml(source: &str) -> anyhow::Result<Self> {
        let config: Self = Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.kiln.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "kiln", "kiln")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".kiln.toml"))
    }

    /// Every `conventions` key must name a kind and every extname must be
    /// usable.
    pub fn validate(&self) -> anyhow::Result<()> {
        for (token, over) in &self.conventions {
            let kind: ArtifactKind = token
                .parse()
                .with_context(|| format!("unknown kind '{token}' in [conventions]"))?;
            if let Some(extname) = &over.extname {
                if !extname.starts_with('.') || extname.len() < 2 {
                    anyhow::bail!(
                        "conventions.{kind}.extname must start with '.', got '{extname}'"
                    );
                }
            }
        }
        Ok(())
    }

    /// Kind defaults with this config's override and ignore list applied.
    pub fn conventions_for(&self, kind: ArtifactKind) -> TransformationConfig {
        let mut base = kind.conventions();
        if let Some(over) = self
            .conventions
            .iter()
            .find(|(token, _)| token.parse::<ArtifactKind>().ok() == Some(kind))
            .map(|(_, over)| over)
        {
            base = over.apply(base);
        }
        base.form_ignore_list
            .extend(self.generation.form_ignore_list.iter().copied());
        base
    }

    /// Where the default config would be written by `kiln config path`.
    pub fn describe_path(path: &Path) -> String {
        if path.exists() {
            path.display().to_string()
        } else {
            format!("{} (not created yet)", path.display())
        }
    }
}
