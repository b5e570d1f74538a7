//! Chart command implementation
//!
//! Runs the same pipeline as `analyze` and renders the top sellers as a
//! horizontal bar chart on the console, highest revenue first.

use colored::Colorize;
use tracing::info;

use super::shared::{run_pipeline, setup_logging, RunStats};
use crate::cli::args::ChartArgs;
use crate::Result;

/// Chart command runner
pub fn run_chart(args: ChartArgs) -> Result<RunStats> {
    setup_logging(&args.pipeline)?;

    info!("Starting POS analyzer (chart view)");
    let stats = run_pipeline(&args.pipeline, args.top_n)?;

    print!("{}", render_chart(&stats, args.top_n, args.width));
    Ok(stats)
}

/// Render the ranked revenues as a horizontal bar chart
///
/// Bars are scaled so the highest revenue fills `width` characters. The
/// label column width adapts to the longest label in the ranking.
fn render_chart(stats: &RunStats, top_n: usize, width: usize) -> String {
    let ranked: Vec<(&str, f64)> = stats.summary.ranked_revenues().collect();

    let mut output = String::new();
    output.push_str(&format!(
        "\nTop {} Menu Items by Revenue\n\n",
        ranked.len().min(top_n)
    ));

    let max_revenue = ranked
        .iter()
        .map(|(_, revenue)| *revenue)
        .fold(f64::MIN, f64::max);
    let label_width = ranked
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);

    for (label, revenue) in &ranked {
        let bar_len = ((revenue / max_revenue) * width as f64).round() as usize;
        let bar = "█".repeat(bar_len.max(1));
        output.push_str(&format!(
            "{:<label_width$} | {} €{:.2}\n",
            label,
            bar.blue(),
            revenue,
        ));
    }

    output.push_str(&format!(
        "\nTotal revenue across accepted items: €{:.2}\n\n",
        stats.summary.total_revenue
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{RankedItem, SalesSummary};
    use crate::app::services::pos_csv_parser::ParseStats;
    use std::time::Duration;

    fn run_stats() -> RunStats {
        let ranked_items = vec![
            RankedItem {
                label: "Latte".to_string(),
                revenue: 200.0,
                quantity: 50,
                share_percent: 66.7,
            },
            RankedItem {
                label: "Espresso".to_string(),
                revenue: 100.0,
                quantity: 40,
                share_percent: 33.3,
            },
        ];
        RunStats {
            summary: SalesSummary {
                items_accepted: 2,
                total_quantity: 90,
                total_revenue: 300.0,
                ranked_items,
            },
            parse_stats: ParseStats::new(),
            elapsed: Duration::from_millis(5),
        }
    }

    #[test]
    fn test_chart_scales_to_width() {
        colored::control::set_override(false);
        let chart = render_chart(&run_stats(), 10, 20);

        // Top item fills the full width, second is proportionally shorter
        assert!(chart.contains(&"█".repeat(20)));
        assert!(chart.contains(&format!("Espresso | {}", "█".repeat(10))));
        assert!(!chart.contains(&"█".repeat(21)));
    }

    #[test]
    fn test_chart_lists_revenues_in_rank_order() {
        colored::control::set_override(false);
        let chart = render_chart(&run_stats(), 10, 20);
        let latte = chart.find("Latte").unwrap();
        let espresso = chart.find("Espresso").unwrap();
        assert!(latte < espresso);
        assert!(chart.contains("€200.00"));
        assert!(chart.contains("€300.00"));
    }
}
