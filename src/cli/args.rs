//! Command-line argument definitions for the POS analyzer
//!
//! Defines the complete CLI interface using the clap derive API. CLI flags
//! override the layered configuration (defaults, then config file).

use crate::app::models::NumberLocale;
use crate::constants::{DEFAULT_CHART_TOP_N, DEFAULT_CHART_WIDTH, DEFAULT_TOP_N};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the POS sales report analyzer
///
/// Cleans a semi-structured point-of-sale CSV export (metadata preamble,
/// locale-formatted numbers, payment and subtotal rows interleaved with
/// real line items) and produces a ranked sales summary.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pos-analyzer",
    version,
    about = "Clean POS CSV exports and produce ranked sales summaries",
    long_about = "Analyzes point-of-sale export files that mix metadata, payment-method rows, \
                  category subtotals and grand totals into the same table as genuine menu items. \
                  Locates the real data header, normalizes locale-formatted numbers, filters out \
                  non-item rows and reports totals with a top-N revenue ranking."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the POS analyzer
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Analyze an export and print the sales report (default command)
    Analyze(AnalyzeArgs),
    /// Analyze an export and print a horizontal bar chart of top sellers
    Chart(ChartArgs),
}

/// Shared options for commands that run the analysis pipeline
#[derive(Debug, Clone, Parser)]
pub struct PipelineArgs {
    /// Path to the POS export file to analyze
    #[arg(value_name = "FILE", help = "Path to the POS export file")]
    pub input: PathBuf,

    /// Path to configuration file
    ///
    /// TOML configuration for the input format, exclusion rules and sanity
    /// limits. If not specified, looks for ~/.config/pos-analyzer/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Field delimiter of the export
    #[arg(
        long = "delimiter",
        value_name = "CHAR",
        help = "Field delimiter of the export (defaults to ';')"
    )]
    pub delimiter: Option<char>,

    /// Numeric locale of the export
    #[arg(
        long = "locale",
        value_enum,
        value_name = "LOCALE",
        help = "Numeric locale of the export (decimal-comma or decimal-point)"
    )]
    pub locale: Option<NumberLocale>,

    /// Maximum plausible revenue for a single line item
    ///
    /// Rows strictly above this value are treated as mis-parsed aggregate
    /// rows and skipped.
    #[arg(
        long = "ceiling",
        value_name = "AMOUNT",
        help = "Revenue sanity ceiling for a single line item"
    )]
    pub revenue_ceiling: Option<f64>,

    /// Additional label fragments to exclude
    ///
    /// Appended to the configured exclusion vocabulary. May be given
    /// multiple times.
    #[arg(
        short = 'x',
        long = "exclude",
        value_name = "FRAGMENT",
        help = "Additional label fragment to exclude (repeatable)"
    )]
    pub extra_exclusions: Vec<String>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors and the report itself
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress logging except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl PipelineArgs {
    /// Map verbosity flags to a tracing level filter string
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Arguments for the analyze command (console sales report)
#[derive(Debug, Clone, Parser)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub pipeline: PipelineArgs,

    /// Number of top sellers to list
    #[arg(
        short = 'n',
        long = "top",
        value_name = "COUNT",
        default_value_t = DEFAULT_TOP_N,
        help = "Number of top sellers to list"
    )]
    pub top_n: usize,
}

/// Arguments for the chart command (console bar chart)
#[derive(Debug, Clone, Parser)]
pub struct ChartArgs {
    #[command(flatten)]
    pub pipeline: PipelineArgs,

    /// Number of bars to draw
    #[arg(
        short = 'n',
        long = "top",
        value_name = "COUNT",
        default_value_t = DEFAULT_CHART_TOP_N,
        help = "Number of bars to draw"
    )]
    pub top_n: usize,

    /// Width of the longest bar in characters
    #[arg(
        short = 'w',
        long = "width",
        value_name = "CHARS",
        default_value_t = DEFAULT_CHART_WIDTH,
        help = "Width of the longest bar in characters"
    )]
    pub width: usize,
}
