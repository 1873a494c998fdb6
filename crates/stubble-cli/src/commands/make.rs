//! Implementation of the `stubble make` command.
//!
//! Responsibility: resolve KIND, NAME, and the application root from
//! arguments, config, or prompts, call the core scaffold service, and
//! display the result.  No generation logic lives here.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use stubble_adapters::{BuiltinTemplates, LocalFilesystem};
use stubble_core::application::ScaffoldService;
use stubble_core::domain::Kind;

use crate::{
    cli::{KindArg, MakeArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `stubble make` command.
///
/// Dispatch sequence:
/// 1. Resolve the artifact kind (argument, config default, prompt)
/// 2. Resolve the artifact name (argument, prompt)
/// 3. Resolve the application root (argument, config default, `.`)
/// 4. Early-exit if `--dry-run`: print the plan without writing
/// 5. Execute generation via `ScaffoldService`
#[instrument(skip_all)]
pub fn execute(
    args: MakeArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1-3. Resolve inputs
    let kind = resolve_kind(args.kind, &config)?;
    let name = resolve_name(args.name)?;
    let root = resolve_root(args.root, &config);

    debug!(kind = %kind, name = %name, root = %root.display(), "Inputs resolved");

    // Wire the production adapters into the core service.
    let templates = Box::new(BuiltinTemplates::new());
    let filesystem = Box::new(LocalFilesystem::new());
    let service = ScaffoldService::new(templates, filesystem);

    // 4. Dry run: describe but do not write.
    if args.dry_run {
        let plan = service.plan(&name, kind).map_err(CliError::Core)?;
        output.info(&format!("Dry run: would create {}", plan.type_name))?;
        output.print(&format!("  Kind:      {}", kind.label()))?;
        output.print(&format!("  Namespace: {}", plan.namespace))?;
        output.print(&format!(
            "  File:      {}",
            root.join(&plan.relative_path).display()
        ))?;
        return Ok(());
    }

    // 5. Generate
    info!(kind = %kind, name = %name, "Generation started");
    let created = service
        .generate(&name, kind, &root)
        .map_err(CliError::Core)?;
    info!(type_name = %created.type_name, "Generation completed");

    output.success(&format!("Created {}", created.type_name))?;
    output.detail(&format!("Location: {}", created.relative_path.display()))?;

    Ok(())
}

// ── Input resolution ──────────────────────────────────────────────────────────

/// Kind precedence: positional argument, then the config default, then an
/// interactive prompt when stdin is a terminal.
fn resolve_kind(arg: Option<KindArg>, config: &AppConfig) -> CliResult<Kind> {
    if let Some(kind) = arg {
        return Ok(convert_kind(kind));
    }

    if let Some(default) = config.defaults.kind.as_deref() {
        return default.parse::<Kind>().map_err(|e| CliError::ConfigError {
            message: format!("invalid defaults.kind '{default}': {e}"),
            source: None,
        });
    }

    prompt_kind()
}

/// Name precedence: positional argument, then an interactive prompt.
fn resolve_name(arg: Option<String>) -> CliResult<String> {
    if let Some(name) = arg {
        return Ok(name);
    }

    prompt_name()
}

/// Root precedence: `--root`, then the config default, then the current
/// directory.
fn resolve_root(arg: Option<PathBuf>, config: &AppConfig) -> PathBuf {
    arg.or_else(|| config.defaults.root.clone())
        .unwrap_or_else(|| PathBuf::from("."))
}

// ── Type conversions CLI → core ───────────────────────────────────────────────

fn convert_kind(kind: KindArg) -> Kind {
    match kind {
        KindArg::Dto => Kind::Dto,
        KindArg::Service => Kind::Service,
    }
}

// ── Prompts ───────────────────────────────────────────────────────────────────

#[cfg(feature = "interactive")]
fn prompt_kind() -> CliResult<Kind> {
    use dialoguer::{Select, theme::ColorfulTheme};

    if !std::io::IsTerminal::is_terminal(&std::io::stdin()) {
        return Err(missing_kind());
    }

    let labels: Vec<&str> = Kind::ALL.iter().map(|kind| kind.label()).collect();
    let picked = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("What should be generated?")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(prompt_error)?;

    Ok(Kind::ALL[picked])
}

#[cfg(not(feature = "interactive"))]
fn prompt_kind() -> CliResult<Kind> {
    if std::io::IsTerminal::is_terminal(&std::io::stdin()) {
        return Err(CliError::FeatureNotAvailable {
            feature: "interactive",
        });
    }
    Err(missing_kind())
}

#[cfg(feature = "interactive")]
fn prompt_name() -> CliResult<String> {
    use dialoguer::{Input, theme::ColorfulTheme};

    if !std::io::IsTerminal::is_terminal(&std::io::stdin()) {
        return Err(missing_name());
    }

    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Artifact name (e.g. User/CreateUser)")
        .interact_text()
        .map_err(prompt_error)?;

    Ok(name)
}

#[cfg(not(feature = "interactive"))]
fn prompt_name() -> CliResult<String> {
    if std::io::IsTerminal::is_terminal(&std::io::stdin()) {
        return Err(CliError::FeatureNotAvailable {
            feature: "interactive",
        });
    }
    Err(missing_name())
}

#[cfg(feature = "interactive")]
fn prompt_error(err: dialoguer::Error) -> CliError {
    let dialoguer::Error::IO(source) = err;
    // Ctrl-C inside a prompt surfaces as an interrupted read.
    if source.kind() == std::io::ErrorKind::Interrupted {
        CliError::Cancelled
    } else {
        CliError::IoError {
            message: "interactive prompt failed".into(),
            source,
        }
    }
}

fn missing_kind() -> CliError {
    let kinds = Kind::ALL
        .iter()
        .map(|kind| kind.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    CliError::InvalidInput {
        message: format!("no KIND given; pass one of: {kinds}"),
    }
}

fn missing_name() -> CliError {
    CliError::InvalidInput {
        message: "no NAME given; pass a name like User/CreateUser".into(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
