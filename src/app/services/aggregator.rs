//! Sales aggregation and ranking
//!
//! Consumes the accepted line items of one run and produces the immutable
//! [`SalesSummary`]: quantity and revenue totals plus a top-N ranking by
//! revenue with percentage shares.

use tracing::debug;

use crate::app::models::{LineItem, RankedItem, SalesSummary};
use crate::{Error, Result};

/// Aggregate accepted line items into a ranked sales summary
///
/// Fails with [`Error::NoValidItems`] on empty input; a summary over zero
/// items has no meaningful totals and the share computation would divide
/// by zero. The ranking sort is stable, so ties keep their original
/// encounter order.
pub fn aggregate(items: &[LineItem], top_n: usize, file: &str) -> Result<SalesSummary> {
    if items.is_empty() {
        return Err(Error::no_valid_items(file));
    }

    let total_quantity: i64 = items.iter().map(|item| item.quantity).sum();
    let total_revenue: f64 = items.iter().map(|item| item.revenue).sum();

    debug!(
        "Aggregating {} items: {} units, {:.2} revenue",
        items.len(),
        total_quantity,
        total_revenue
    );

    let mut ranked: Vec<&LineItem> = items.iter().collect();
    // sort_by is stable; accepted revenues are finite so the comparison
    // never sees NaN
    ranked.sort_by(|a, b| b.revenue.partial_cmp(&a.revenue).unwrap_or(std::cmp::Ordering::Equal));

    let ranked_items = ranked
        .into_iter()
        .take(top_n)
        .map(|item| RankedItem {
            label: item.label.clone(),
            revenue: item.revenue,
            quantity: item.quantity,
            share_percent: (item.revenue / total_revenue) * 100.0,
        })
        .collect();

    Ok(SalesSummary {
        items_accepted: items.len(),
        total_quantity,
        total_revenue,
        ranked_items,
    })
}
