//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "stubble",
    bin_name = "stubble",
    version  = env!("CARGO_PKG_VERSION"),
    about    = "\u{26a1} Convention-driven class generation",
    long_about = "Stubble generates data carrier and service classes from \
                  slash-separated names, deriving the type name, namespace, \
                  and file location from per-kind conventions.",
    after_help = "EXAMPLES:\n\
        \x20 stubble make dto User/CreateUser\n\
        \x20 stubble make service Admin/Invoice\n\
        \x20 stubble make service Invoice --root backend --dry-run\n\
        \x20 stubble list --format json\n\
        \x20 stubble completions bash > /usr/share/bash-completion/completions/stubble",
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
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a class from its name.
    #[command(
        visible_alias = "m",
        about = "Generate a class",
        after_help = "EXAMPLES:\n\
            \x20 stubble make dto User/CreateUser\n\
            \x20 stubble make service Admin/Invoice\n\
            \x20 stubble make service Service/User     # same as 'make service User'\n\
            \x20 stubble make service Invoice --dry-run"
    )]
    Make(MakeArgs),

    /// List the registered kinds and their conventions.
    #[command(
        visible_alias = "ls",
        about = "List registered kinds",
        after_help = "EXAMPLES:\n\
            \x20 stubble list\n\
            \x20 stubble list --format json\n\
            \x20 stubble list --format csv"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stubble completions bash > ~/.local/share/bash-completion/completions/stubble\n\
            \x20 stubble completions zsh  > ~/.zfunc/_stubble\n\
            \x20 stubble completions fish > ~/.config/fish/completions/stubble.fish"
    )]
    Completions(CompletionsArgs),
}

// ── make ──────────────────────────────────────────────────────────────────────

/// Arguments for `stubble make`.
#[derive(Debug, Args)]
pub struct MakeArgs {
    /// Artifact kind to generate.  Prompted for when omitted on a terminal.
    #[arg(value_name = "KIND", value_enum, help = "Artifact kind (dto, service)")]
    pub kind: Option<KindArg>,

    /// Artifact name.  Segments separate with `/` (or `\`); the last segment
    /// becomes the type name.  Prompted for when omitted on a terminal.
    #[arg(value_name = "NAME", help = "Artifact name, e.g. User/CreateUser")]
    pub name: Option<String>,

    /// Application root directory the generated path is joined to.
    #[arg(
        long = "root",
        value_name = "DIR",
        help = "Application root (default: config, then current directory)"
    )]
    pub root: Option<PathBuf>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `stubble list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One kind name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stubble completions`.
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
    PowerShell,
    Elvish,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Artifact kinds accepted on the command line.
///
/// Mirrors `stubble_core::domain::Kind`; the CLI keeps its own enum so clap
/// derive attributes never leak into the core crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum KindArg {
    Dto,
    Service,
}

impl std::fmt::Display for KindArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dto => write!(f, "dto"),
            Self::Service => write!(f, "service"),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn kind_arg_display() {
        assert_eq!(KindArg::Dto.to_string(), "dto");
        assert_eq!(KindArg::Service.to_string(), "service");
    }

    #[test]
    fn parse_make_command() {
        let cli = Cli::parse_from(["stubble", "make", "dto", "User/CreateUser"]);
        let Commands::Make(args) = cli.command else {
            panic!("expected Make command");
        };
        assert_eq!(args.kind, Some(KindArg::Dto));
        assert_eq!(args.name.as_deref(), Some("User/CreateUser"));
        assert!(!args.dry_run);
    }

    #[test]
    fn make_alias_parses() {
        let cli = Cli::parse_from(["stubble", "m", "service", "Invoice"]);
        assert!(matches!(cli.command, Commands::Make(_)));
    }

    #[test]
    fn make_accepts_root_and_dry_run() {
        let cli = Cli::parse_from([
            "stubble", "make", "service", "Invoice", "--root", "backend", "--dry-run",
        ]);
        let Commands::Make(args) = cli.command else {
            panic!("expected Make command");
        };
        assert_eq!(args.root.as_deref(), Some(std::path::Path::new("backend")));
        assert!(args.dry_run);
    }

    #[test]
    fn make_positionals_are_optional() {
        let cli = Cli::parse_from(["stubble", "make"]);
        let Commands::Make(args) = cli.command else {
            panic!("expected Make command");
        };
        assert_eq!(args.kind, None);
        assert_eq!(args.name, None);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let result = Cli::try_parse_from(["stubble", "make", "widget", "User"]);
        assert!(result.is_err());
    }

    #[test]
    fn list_format_defaults_to_table() {
        let cli = Cli::parse_from(["stubble", "list"]);
        let Commands::List(args) = cli.command else {
            panic!("expected List command");
        };
        assert!(matches!(args.format, ListFormat::Table));
    }

    #[test]
    fn list_alias_parses() {
        let cli = Cli::parse_from(["stubble", "ls", "--format", "json"]);
        assert!(matches!(cli.command, Commands::List(_)));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["stubble", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
