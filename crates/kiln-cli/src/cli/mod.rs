//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use kiln_core::domain::{ArtifactKind, CasePattern, Form, TemplateData};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "kiln",
    bin_name = "kiln",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Convention-driven source file generator",
    long_about = "Kiln turns a resource name into a correctly named, correctly \
                  placed source file for each artifact kind of a backend project.",
    after_help = "EXAMPLES:\n\
        \x20 kiln init\n\
        \x20 kiln model user                   # app/Models/User.ts\n\
        \x20 kiln controller users             # app/Controllers/Http/UserController.ts\n\
        \x20 kiln migration create_users --dry-run\n\
        \x20 kiln kinds --format json",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
///
/// The first fourteen generate one artifact each and share [`MakeArgs`].
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a plain source file.
    File(MakeArgs),
    /// Create a view template.
    View(MakeArgs),
    /// Create a model.
    #[command(after_help = "EXAMPLES:\n\
        \x20 kiln model user\n\
        \x20 kiln model admin/user --dry-run")]
    Model(MakeArgs),
    /// Create a database migration.
    Migration(MakeArgs),
    /// Create an HTTP controller.
    #[command(after_help = "EXAMPLES:\n\
        \x20 kiln controller users\n\
        \x20 kiln controller users --suffix Handler --pattern snake")]
    Controller(MakeArgs),
    /// Create an actions class.
    Action(MakeArgs),
    /// Create a create-options type.
    CreateOptions(MakeArgs),
    /// Create an update-options type.
    UpdateOptions(MakeArgs),
    /// Create a model interface.
    ModelInterface(MakeArgs),
    /// Create an identifier-options type.
    IdentifierOptions(MakeArgs),
    /// Create a route file.
    Route(MakeArgs),
    /// Create a request validator.
    Validator(MakeArgs),
    /// Create an index (barrel) file.
    Index(MakeArgs),
    /// Create a database seeder.
    Seeder(MakeArgs),

    /// List artifact kinds with their namespace and naming defaults.
    #[command(
        visible_alias = "ls",
        after_help = "EXAMPLES:\n\
            \x20 kiln kinds\n\
            \x20 kiln kinds --format json"
    )]
    Kinds(KindsArgs),

    /// Mark a directory as a kiln project.
    #[command(after_help = "EXAMPLES:\n\
        \x20 kiln init                  # current directory\n\
        \x20 kiln init --project ../api\n\
        \x20 kiln init --with-stubs     # copy built-in stubs for editing")]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(after_help = "EXAMPLES:\n\
        \x20 kiln completions bash > ~/.local/share/bash-completion/completions/kiln\n\
        \x20 kiln completions zsh  > ~/.zfunc/_kiln")]
    Completions(CompletionsArgs),

    /// Inspect configuration.
    #[command(subcommand)]
    Config(ConfigCommands),
}

impl Commands {
    /// The kind and arguments of a generation subcommand.
    pub fn as_make(&self) -> Option<(ArtifactKind, &MakeArgs)> {
        let (kind, args) = match self {
            Self::File(args) => (ArtifactKind::File, args),
            Self::View(args) => (ArtifactKind::View, args),
            Self::Model(args) => (ArtifactKind::Model, args),
            Self::Migration(args) => (ArtifactKind::Migration, args),
            Self::Controller(args) => (ArtifactKind::Controller, args),
            Self::Action(args) => (ArtifactKind::Action, args),
            Self::CreateOptions(args) => (ArtifactKind::CreateOptions, args),
            Self::UpdateOptions(args) => (ArtifactKind::UpdateOptions, args),
            Self::ModelInterface(args) => (ArtifactKind::ModelInterface, args),
            Self::IdentifierOptions(args) => (ArtifactKind::IdentifierOptions, args),
            Self::Route(args) => (ArtifactKind::Route, args),
            Self::Validator(args) => (ArtifactKind::Validator, args),
            Self::Index(args) => (ArtifactKind::Index, args),
            Self::Seeder(args) => (ArtifactKind::Seeder, args),
            Self::Kinds(_) | Self::Init(_) | Self::Completions(_) | Self::Config(_) => {
                return None;
            }
        };
        Some((kind, args))
    }
}

// ── make ──────────────────────────────────────────────────────────────────────

/// Arguments shared by every generation subcommand.
#[derive(Debug, Clone, Args)]
pub struct MakeArgs {
    /// Resource name, optionally with directories (`admin/users`).
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Grammatical number to apply.
    #[arg(long = "form", value_enum, help = "Force singular or plural")]
    pub form: Option<FormArg>,

    /// Identifier casing to apply.
    #[arg(long = "pattern", value_enum, help = "Casing of the file name")]
    pub pattern: Option<PatternArg>,

    /// Suffix appended after casing.
    #[arg(long = "suffix", value_name = "SUFFIX", help = "Suffix to append")]
    pub suffix: Option<String>,

    /// File extension, including the dot.
    #[arg(long = "extname", value_name = "EXT", help = "File extension (e.g. .ts)")]
    pub extname: Option<String>,

    /// Use the name literally; only the extension is added.
    #[arg(long = "exact", help = "Skip all name transformations")]
    pub exact: bool,

    /// Kinds that keep the name's number as typed.
    #[arg(
        long = "form-ignore",
        value_name = "KIND",
        value_parser = parse_kind,
        help = "Skip form transformation for KIND (repeatable)"
    )]
    pub form_ignore: Vec<ArtifactKind>,

    /// Stub to render instead of the kind's default.
    #[arg(long = "template", value_name = "ID", help = "Stub id to render")]
    pub template: Option<String>,

    /// Explicit destination, relative to the project root.
    #[arg(long = "dir", value_name = "DIR", help = "Write into DIR instead of the kind's namespace")]
    pub dir: Option<PathBuf>,

    /// Extra template variables.
    #[arg(
        long = "data",
        value_name = "KEY=VALUE",
        value_parser = parse_data_pair,
        help = "Template variable (repeatable); VALUE may be JSON"
    )]
    pub data: Vec<(String, serde_json::Value)>,

    /// Replace an existing file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing files")]
    pub force: bool,

    /// Print what would be written without touching the disk.
    #[arg(short = 'n', long = "dry-run", help = "Show the plan only")]
    pub dry_run: bool,

    /// Project root.
    #[arg(
        short = 'p',
        long = "project",
        value_name = "DIR",
        default_value = ".",
        help = "Project root containing .kilnrc.json"
    )]
    pub project: PathBuf,
}

fn parse_kind(token: &str) -> Result<ArtifactKind, String> {
    token.parse::<ArtifactKind>().map_err(|e| e.to_string())
}

fn parse_data_pair(pair: &str) -> Result<(String, serde_json::Value), String> {
    TemplateData::parse_pair(pair).map_err(|e| e.to_string())
}

/// `--form` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormArg {
    #[value(alias = "one")]
    Singular,
    #[value(alias = "many")]
    Plural,
}

impl std::fmt::Display for FormArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Form::from(*self).fmt(f)
    }
}

impl From<FormArg> for Form {
    fn from(arg: FormArg) -> Self {
        match arg {
            FormArg::Singular => Form::Singular,
            FormArg::Plural => Form::Plural,
        }
    }
}

/// `--pattern` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PatternArg {
    #[value(name = "camelcase", alias = "camel")]
    Camel,
    #[value(name = "snakecase", alias = "snake")]
    Snake,
    #[value(name = "pascalcase", alias = "pascal")]
    Pascal,
}

impl std::fmt::Display for PatternArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        CasePattern::from(*self).fmt(f)
    }
}

impl From<PatternArg> for CasePattern {
    fn from(arg: PatternArg) -> Self {
        match arg {
            PatternArg::Camel => CasePattern::CamelCase,
            PatternArg::Snake => CasePattern::SnakeCase,
            PatternArg::Pascal => CasePattern::PascalCase,
        }
    }
}

// ── kinds ─────────────────────────────────────────────────────────────────────

/// Arguments for `kiln kinds`.
#[derive(Debug, Args)]
pub struct KindsArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: KindsFormat,
}

/// Output format for the `kinds` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindsFormat {
    /// Human-readable table.
    Table,
    /// One token per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `kiln init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Directory to initialise.
    #[arg(
        short = 'p',
        long = "project",
        value_name = "DIR",
        default_value = ".",
        help = "Project root to initialise"
    )]
    pub project: PathBuf,

    /// Overwrite an existing `.kilnrc.json`.
    #[arg(short = 'f', long = "force", help = "Overwrite existing rc file")]
    pub force: bool,

    /// Copy the built-in stubs into the project's stub directory.
    #[arg(long = "with-stubs", help = "Write editable copies of the built-in stubs")]
    pub with_stubs: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `kiln completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `kiln config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `generation.overwrite`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn every_kind_has_a_subcommand() {
        let cmd = Cli::command();
        for kind in ArtifactKind::ALL {
            assert!(
                cmd.find_subcommand(kind.as_str()).is_some(),
                "missing subcommand for {kind}"
            );
        }
    }

    #[test]
    fn parse_model_command() {
        let cli = Cli::parse_from(["kiln", "model", "user"]);
        let (kind, args) = cli.command.as_make().unwrap();
        assert_eq!(kind, ArtifactKind::Model);
        assert_eq!(args.name, "user");
        assert_eq!(args.project, PathBuf::from("."));
        assert!(!args.force);
    }

    #[test]
    fn kebab_case_kind_subcommand() {
        let cli = Cli::parse_from(["kiln", "create-options", "user"]);
        let (kind, _) = cli.command.as_make().unwrap();
        assert_eq!(kind, ArtifactKind::CreateOptions);
    }

    #[test]
    fn transformation_flags() {
        let cli = Cli::parse_from([
            "kiln",
            "controller",
            "users",
            "--form",
            "plural",
            "--pattern",
            "snake",
            "--suffix",
            "_handler",
            "--extname",
            ".js",
            "--form-ignore",
            "model_interface",
            "--form-ignore",
            "route",
        ]);
        let (_, args) = cli.command.as_make().unwrap();
        assert_eq!(args.form, Some(FormArg::Plural));
        assert_eq!(args.pattern, Some(PatternArg::Snake));
        assert_eq!(args.suffix.as_deref(), Some("_handler"));
        assert_eq!(args.extname.as_deref(), Some(".js"));
        assert_eq!(
            args.form_ignore,
            vec![ArtifactKind::ModelInterface, ArtifactKind::Route]
        );
    }

    #[test]
    fn data_pairs_parse_json_values() {
        let cli = Cli::parse_from([
            "kiln", "view", "home", "--data", "title=Home", "--data", "count=3",
        ]);
        let (_, args) = cli.command.as_make().unwrap();
        assert_eq!(args.data[0], ("title".to_string(), serde_json::json!("Home")));
        assert_eq!(args.data[1], ("count".to_string(), serde_json::json!(3)));
    }

    #[test]
    fn malformed_data_pair_is_rejected() {
        assert!(Cli::try_parse_from(["kiln", "view", "home", "--data", "novalue"]).is_err());
    }

    #[test]
    fn unknown_form_ignore_kind_is_rejected() {
        assert!(
            Cli::try_parse_from(["kiln", "model", "user", "--form-ignore", "widget"]).is_err()
        );
    }

    #[test]
    fn value_enum_display_matches_core() {
        assert_eq!(FormArg::Singular.to_string(), "singular");
        assert_eq!(PatternArg::Pascal.to_string(), "pascalcase");
    }

    #[test]
    fn aux_commands_are_not_make() {
        let cli = Cli::parse_from(["kiln", "kinds"]);
        assert!(cli.command.as_make().is_none());
        assert!(matches!(cli.command, Commands::Kinds(_)));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["kiln", "--quiet", "--verbose", "kinds"]);
        assert!(result.is_err());
    }
}
