//! Analyze command implementation
//!
//! Runs the pipeline on one export file and renders the console sales
//! report: totals, the top-N ranking with revenue shares, and row-level
//! diagnostics.

use colored::Colorize;
use indicatif::HumanDuration;
use tracing::info;

use super::shared::{run_pipeline, setup_logging, RunStats};
use crate::cli::args::AnalyzeArgs;
use crate::Result;

/// Analyze command runner
pub fn run_analyze(args: AnalyzeArgs) -> Result<RunStats> {
    setup_logging(&args.pipeline)?;

    info!("Starting POS analyzer");
    let stats = run_pipeline(&args.pipeline, args.top_n)?;

    render_report(&args, &stats);
    Ok(stats)
}

/// Render the console sales report
fn render_report(args: &AnalyzeArgs, stats: &RunStats) {
    let summary = &stats.summary;
    let separator = "=".repeat(50);

    println!("\n{}", separator);
    println!("{}", "   POS Sales Report".bold());
    println!("{}", separator);
    println!(
        "[*] Items Accepted        : {} distinct line items",
        summary.items_accepted
    );
    println!(
        "[*] Total Quantity Sold   : {} units",
        summary.total_quantity
    );
    println!(
        "[*] Total Gross Revenue   : {}",
        format!("€{:.2}", summary.total_revenue).green().bold()
    );
    println!("{}", "-".repeat(50));

    println!("TOP {} Best Sellers by Revenue:", args.top_n);
    for item in &summary.ranked_items {
        println!(
            "- {:<25}: {:>10} ({:>5.1}%)",
            item.label,
            format!("€{:.2}", item.revenue),
            item.share_percent
        );
    }

    println!("{}", "-".repeat(50));
    println!(
        "Rows: {} read, {} rejected, {} excluded (header at row {})",
        stats.parse_stats.total_rows,
        stats.parse_stats.rows_rejected,
        stats.parse_stats.rows_excluded,
        stats.parse_stats.header_row
    );
    println!(
        "Done in {}",
        HumanDuration(stats.elapsed).to_string().cyan()
    );
    println!("{}\n", separator);
}
