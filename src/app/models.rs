//! Core data models for the POS analyzer
//!
//! Contains the accepted line item record, the immutable sales summary
//! produced by the aggregator, and the numeric locale selector used by
//! the normalizer.

use serde::{Deserialize, Serialize};

/// Numeric formatting convention of the source export
///
/// German-style exports write `1.234,56`; canonical exports write
/// `1,234.56`. The normalizer strips the thousands separator and
/// canonicalizes the decimal separator according to this setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum NumberLocale {
    /// Thousands dot, decimal comma (`1.234,56`)
    DecimalComma,
    /// Thousands comma, decimal point (`1,234.56`)
    DecimalPoint,
}

impl NumberLocale {
    /// Separator to strip before parsing
    pub fn thousands_separator(&self) -> char {
        match self {
            NumberLocale::DecimalComma => '.',
            NumberLocale::DecimalPoint => ',',
        }
    }

    /// Separator to rewrite to `.` before parsing
    pub fn decimal_separator(&self) -> char {
        match self {
            NumberLocale::DecimalComma => ',',
            NumberLocale::DecimalPoint => '.',
        }
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        NumberLocale::DecimalComma
    }
}

/// A single accepted sales line item
///
/// Produced by the row extractor after numeric normalization and sanity
/// checks; rows that fail any check never become a `LineItem`.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    /// Trimmed item label as it appears in the export
    pub label: String,

    /// Units sold
    pub quantity: i64,

    /// Gross revenue in currency units, guaranteed `> 0`
    pub revenue: f64,
}

/// One entry in the ranked top-N listing
#[derive(Debug, Clone, PartialEq)]
pub struct RankedItem {
    pub label: String,
    pub revenue: f64,
    pub quantity: i64,
    /// Share of total revenue, in percent
    pub share_percent: f64,
}

/// Cleaned sales summary for one export file
///
/// Built once per run by the aggregator and immutable afterwards.
/// `ranked_items` is sorted by revenue descending, ties broken by
/// original encounter order.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesSummary {
    /// Number of distinct accepted line items
    pub items_accepted: usize,

    /// Total units sold across all accepted items
    pub total_quantity: i64,

    /// Total gross revenue across all accepted items
    pub total_revenue: f64,

    /// Top-N items by revenue with percentage shares
    pub ranked_items: Vec<RankedItem>,
}

impl SalesSummary {
    /// Ordered (label, revenue) pairs for chart consumers
    pub fn ranked_revenues(&self) -> impl Iterator<Item = (&str, f64)> {
        self.ranked_items
            .iter()
            .map(|item| (item.label.as_str(), item.revenue))
    }
}
