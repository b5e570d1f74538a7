//! POS export parser with header detection and locale-aware normalization
//!
//! This service turns one semi-structured POS export into a stream of
//! accepted line items:
//! - Header location behind an arbitrary metadata preamble
//! - Locale-aware numeric normalization (thousands-dot, decimal-comma)
//! - Per-row extraction with silent, counted rejection of malformed rows
//! - Label classification via the exclusion rule set

pub mod header;
pub mod numeric;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
mod tests;

pub use header::locate_header;
pub use numeric::{normalize_decimal, normalize_integer, NormalizeError};
pub use parser::PosCsvParser;
pub use record_parser::{extract_line_item, RowRejection};
pub use stats::{ParseResult, ParseStats};
