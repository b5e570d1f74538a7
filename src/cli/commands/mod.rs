//! Command implementations for the POS analyzer CLI
//!
//! Each command is implemented in its own module; `shared` carries the
//! logging setup, configuration layering and the pipeline run that both
//! renderers consume.

pub mod analyze;
pub mod chart;
pub mod shared;

pub use shared::RunStats;

use crate::cli::args::{Args, Commands};
use crate::{Error, Result};

/// Main command runner for the POS analyzer
///
/// Dispatches to the subcommand handler:
/// - `analyze`: console sales report with totals and a top-N ranking
/// - `chart`: console horizontal bar chart of top sellers by revenue
pub fn run(args: Args) -> Result<RunStats> {
    match args.command {
        Some(Commands::Analyze(analyze_args)) => analyze::run_analyze(analyze_args),
        Some(Commands::Chart(chart_args)) => chart::run_chart(chart_args),
        None => Err(Error::configuration("No subcommand provided")),
    }
}
