//! Command-line parsing for the time-horizons dashboard.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the view/transform code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{DEFAULT_DOUBLING_MONTHS, TOP_MODELS};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "hz", version, about = "Time-horizons benchmark dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Launch the interactive TUI dashboard.
    ///
    /// This renders the same views as `hz report`, but live: tabs per chart,
    /// model/split/domain controls, and a doubling-time slider.
    Tui(DataArgs),
    /// Print the full text report and exit.
    Report(DataArgs),
    /// Print the task records table and exit.
    Table(DataArgs),
    /// Write per-view CSV exports and a JSON bundle.
    Export(ExportArgs),
}

/// Common options for loading the document and shaping the initial selection.
#[derive(Debug, Parser, Clone)]
pub struct DataArgs {
    /// Document URL or local JSON path. URLs need an http:// or https:// scheme.
    #[arg(long, value_name = "URL|PATH")]
    pub data: Option<String>,

    /// Use the built-in sample document instead of fetching.
    #[arg(long)]
    pub sample: bool,

    /// Model for the curves view (full document name, before display cleanup).
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Cost split preset key from the document's economics section.
    #[arg(long)]
    pub split: Option<String>,

    /// Keep only these domain keys in domain-keyed views (repeatable).
    #[arg(short = 'd', long = "domain", value_name = "KEY")]
    pub domains: Vec<String>,

    /// Assumed doubling time in months for the forecast view.
    #[arg(long, default_value_t = DEFAULT_DOUBLING_MONTHS)]
    pub doubling_months: f64,

    /// Model cap for the heatmap and the economics top lists.
    #[arg(long, default_value_t = TOP_MODELS)]
    pub top: usize,
}

/// Options for `hz export`.
#[derive(Debug, Parser)]
pub struct ExportArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Output directory for the export files.
    #[arg(long, default_value = "hz-out")]
    pub out: PathBuf,
}
