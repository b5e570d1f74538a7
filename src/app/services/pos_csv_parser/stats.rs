//! Parsing statistics and result structures for POS export processing
//!
//! Tracks how many rows were read, accepted, rejected and excluded so the
//! report can show diagnostics without any row-level failure aborting the
//! run.

use crate::app::models::LineItem;

/// Parsing result with accepted line items and statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Line items that survived extraction and classification
    pub items: Vec<LineItem>,

    /// Parsing statistics for diagnostics
    pub stats: ParseStats,
}

/// Per-file parsing statistics
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// 1-based row number of the detected header line
    pub header_row: usize,

    /// Total number of data rows encountered after the header
    pub total_rows: usize,

    /// Rows accepted as genuine line items
    pub items_accepted: usize,

    /// Rows rejected by the extractor (short, unparsable, over ceiling)
    pub rows_rejected: usize,

    /// Rows excluded by the label classifier (tenders, categories, totals)
    pub rows_excluded: usize,

    /// Row-level notes kept for debugging
    pub notes: Vec<String>,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of data rows accepted, as a percentage
    pub fn acceptance_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.items_accepted as f64 / self.total_rows as f64) * 100.0
        }
    }
}
