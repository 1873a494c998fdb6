//! Implementation of the `stubble list` command.
//!
//! Joins the convention registry with the template store so the listing
//! shows, per kind, where artifacts land and whether a template backs them.

use serde::Serialize;

use stubble_adapters::BuiltinTemplates;
use stubble_core::application::TemplateStore;
use stubble_core::domain::{CONVENTION_REGISTRY, KindConvention, Template};

use crate::{
    cli::{ListArgs, ListFormat, global::GlobalArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// One row of the kind listing.
#[derive(Debug, Serialize)]
struct KindRow {
    kind: &'static str,
    namespace_root: &'static str,
    directory: &'static str,
    suffix: &'static str,
    extension: &'static str,
    template: &'static str,
}

pub fn execute(args: ListArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let store = BuiltinTemplates::new();
    let templates = store.list().map_err(CliError::Core)?;

    let rows: Vec<KindRow> = CONVENTION_REGISTRY
        .iter()
        .map(|convention| build_row(convention, &templates))
        .collect();

    match args.format {
        ListFormat::Table => {
            output.header("Registered kinds:")?;
            for row in &rows {
                output.print(&format!(
                    "  {:<10} {:<14} {}/<Name>{}.{}",
                    row.kind, row.namespace_root, row.directory, row.suffix, row.extension
                ))?;
            }
        }

        ListFormat::List => {
            for row in &rows {
                println!("{}", row.kind);
            }
        }

        ListFormat::Json => {
            // Serialise straight to stdout (bypasses OutputManager because
            // JSON output must stay parseable even in non-TTY pipes).
            let json = serde_json::to_string_pretty(&rows).map_err(|e| CliError::IoError {
                message: "failed to serialise kind listing".into(),
                source: std::io::Error::other(e),
            })?;
            println!("{json}");
        }

        ListFormat::Csv => {
            println!("kind,namespace_root,directory,suffix,extension,template");
            for row in &rows {
                println!(
                    "{},{},{},{},{},{}",
                    row.kind,
                    row.namespace_root,
                    row.directory,
                    row.suffix,
                    row.extension,
                    row.template
                );
            }
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn build_row(convention: &KindConvention, templates: &[Template]) -> KindRow {
    let template = if templates.iter().any(|t| t.kind == convention.kind) {
        "builtin"
    } else {
        "missing"
    };

    KindRow {
        kind: convention.kind.as_str(),
        namespace_root: convention.root_namespace,
        directory: convention.root_dir,
        suffix: convention.type_suffix,
        extension: convention.source_ext,
        template,
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
