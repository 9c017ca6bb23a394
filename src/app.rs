//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - resolves the data source and loads the document
//! - derives and validates the starting selection
//! - prints reports/tables, writes exports, or hands off to the TUI

use std::collections::BTreeSet;

use clap::Parser;

use crate::cli::{Command, DataArgs, ExportArgs};
use crate::data::DataSource;
use crate::domain::{
    DOUBLING_MONTHS_MAX, DOUBLING_MONTHS_MIN, HorizonsDoc, Selection,
};
use crate::error::AppError;

/// Entry point for the `hz` binary.
pub fn run() -> Result<(), AppError> {
    // We want `hz` and `hz --sample` to behave like `hz tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing. This preserves a clean clap structure while
    // retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Tui(args) => handle_tui(args),
        Command::Report(args) => handle_report(args),
        Command::Table(args) => handle_table(args),
        Command::Export(args) => handle_export(args),
    }
}

/// Load the document and derive the run's starting selection.
pub fn load_run(args: &DataArgs) -> Result<(HorizonsDoc, Selection), AppError> {
    let source = DataSource::resolve(args.data.as_deref(), args.sample)?;
    let doc = crate::data::load_document(&source)?;
    let selection = selection_from_args(&doc, args)?;
    Ok((doc, selection))
}

fn handle_report(args: DataArgs) -> Result<(), AppError> {
    let (doc, selection) = load_run(&args)?;
    println!("{}", crate::report::render_report(&doc, &selection));
    Ok(())
}

fn handle_table(args: DataArgs) -> Result<(), AppError> {
    let (doc, selection) = load_run(&args)?;
    println!("{}", crate::report::render_table(&doc, &selection));
    Ok(())
}

fn handle_export(args: ExportArgs) -> Result<(), AppError> {
    let (doc, selection) = load_run(&args.data)?;
    let written = crate::io::export::export_all(&args.out, &doc, &selection)?;
    for path in written {
        println!("wrote {}", path.display());
    }
    Ok(())
}

fn handle_tui(args: DataArgs) -> Result<(), AppError> {
    crate::tui::run(args)
}

/// Apply CLI overrides on top of the document-derived defaults, refusing
/// values the document cannot satisfy.
pub fn selection_from_args(doc: &HorizonsDoc, args: &DataArgs) -> Result<Selection, AppError> {
    let mut selection = Selection::for_document(doc);

    if let Some(model) = &args.model {
        if !doc.model_names().contains(model) {
            return Err(AppError::new(2, format!("Unknown model '{model}'.")));
        }
        selection.model = Some(model.clone());
    }

    if let Some(split) = &args.split {
        if !doc.agent_economics.split_presets.contains_key(split) {
            return Err(AppError::new(2, format!("Unknown split preset '{split}'.")));
        }
        selection.split = Some(split.clone());
    }

    if !args.domains.is_empty() {
        let known = doc.domain_keys();
        let mut domains = BTreeSet::new();
        for key in &args.domains {
            if !known.contains(key) {
                return Err(AppError::new(2, format!("Unknown domain '{key}'.")));
            }
            domains.insert(key.clone());
        }
        selection.domains = domains;
    }

    if !(args.doubling_months.is_finite()
        && args.doubling_months >= DOUBLING_MONTHS_MIN
        && args.doubling_months <= DOUBLING_MONTHS_MAX)
    {
        return Err(AppError::new(
            2,
            format!(
                "Doubling months must be between {DOUBLING_MONTHS_MIN} and {DOUBLING_MONTHS_MAX}."
            ),
        ));
    }
    selection.doubling_months = args.doubling_months;

    if args.top == 0 {
        return Err(AppError::new(2, "Top-model cap must be at least 1."));
    }
    selection.top_n = args.top;

    Ok(selection)
}

/// Rewrite argv so `hz` defaults to `hz tui`.
///
/// Rules:
/// - `hz`                      -> `hz tui`
/// - `hz --sample ...`         -> `hz tui --sample ...`
/// - `hz --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "tui" | "report" | "table" | "export");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
