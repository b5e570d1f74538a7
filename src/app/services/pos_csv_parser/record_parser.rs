//! Individual row extraction for POS export records
//!
//! Turns one raw delimited row into a structured [`LineItem`], applying the
//! numeric normalizer and the configured sanity limits. Every failure mode
//! is a [`RowRejection`], never a file-level error: exports interleave
//! footers, separator rows and aggregates with genuine line items, so
//! per-row rejection must stay silent and countable.

use csv::StringRecord;

use super::numeric::{normalize_decimal, normalize_integer};
use crate::app::models::{LineItem, NumberLocale};
use crate::config::LimitsConfig;
use crate::constants::{LABEL_FIELD, QUANTITY_FIELD, REVENUE_FIELD};

/// Why a row was not accepted as a line item
#[derive(Debug, Clone, PartialEq)]
pub enum RowRejection {
    /// Fewer fields than the configured minimum
    TooFewFields { found: usize, required: usize },

    /// Label field empty after trimming
    EmptyLabel,

    /// Quantity or revenue field did not normalize to a number
    UnparsableNumber { field: &'static str, raw: String },

    /// Revenue not positive (footer and separator rows carry zero)
    NonPositiveRevenue { revenue: f64 },

    /// Revenue strictly above the sanity ceiling, treated as a mis-parsed
    /// aggregate row rather than a genuine sale
    OverCeiling { revenue: f64, ceiling: f64 },
}

impl std::fmt::Display for RowRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowRejection::TooFewFields { found, required } => {
                write!(f, "row has {} fields, {} required", found, required)
            }
            RowRejection::EmptyLabel => write!(f, "empty label"),
            RowRejection::UnparsableNumber { field, raw } => {
                write!(f, "unparsable {} value '{}'", field, raw)
            }
            RowRejection::NonPositiveRevenue { revenue } => {
                write!(f, "non-positive revenue {}", revenue)
            }
            RowRejection::OverCeiling { revenue, ceiling } => {
                write!(f, "revenue {} above ceiling {}", revenue, ceiling)
            }
        }
    }
}

/// Extract a candidate line item from one CSV record
///
/// Field layout in the observed template: label, unused, quantity, revenue.
/// The ceiling comparison is an exclusive upper bound: a revenue exactly at
/// the ceiling is accepted.
pub fn extract_line_item(
    record: &StringRecord,
    limits: &LimitsConfig,
    locale: NumberLocale,
) -> Result<LineItem, RowRejection> {
    if record.len() < limits.min_field_count {
        return Err(RowRejection::TooFewFields {
            found: record.len(),
            required: limits.min_field_count,
        });
    }

    let label = record.get(LABEL_FIELD).unwrap_or("").trim();
    if label.is_empty() {
        return Err(RowRejection::EmptyLabel);
    }

    let quantity_raw = record.get(QUANTITY_FIELD).unwrap_or("");
    let quantity = normalize_integer(quantity_raw, locale).map_err(|e| {
        RowRejection::UnparsableNumber {
            field: "quantity",
            raw: e.raw,
        }
    })?;

    let revenue_raw = record.get(REVENUE_FIELD).unwrap_or("");
    let revenue = normalize_decimal(revenue_raw, locale).map_err(|e| {
        RowRejection::UnparsableNumber {
            field: "revenue",
            raw: e.raw,
        }
    })?;

    if revenue <= 0.0 {
        return Err(RowRejection::NonPositiveRevenue { revenue });
    }

    if revenue > limits.revenue_ceiling {
        return Err(RowRejection::OverCeiling {
            revenue,
            ceiling: limits.revenue_ceiling,
        });
    }

    Ok(LineItem {
        label: label.to_string(),
        quantity,
        revenue,
    })
}
