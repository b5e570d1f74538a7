//! Application constants for the POS analyzer
//!
//! Default values for header detection, row layout, exclusion vocabulary
//! and report shape. Everything here is a default only; the effective
//! values come from [`crate::config::Config`] and can be overridden by a
//! TOML config file or CLI flags.

// =============================================================================
// Header Detection
// =============================================================================

/// Marker tokens that must all appear (case-insensitively) in the header row.
///
/// POS exports carry an arbitrary metadata preamble before the real table,
/// so the header is found by content rather than by position.
pub const DEFAULT_HEADER_MARKERS: &[&str] = &["plu", "anzahl", "total"];

/// UTF-8 byte order mark emitted by Excel-generated exports
pub const UTF8_BOM: char = '\u{feff}';

// =============================================================================
// Row Layout
// =============================================================================

/// Field delimiter used by the observed POS export template
pub const DEFAULT_DELIMITER: char = ';';

/// Field index of the item label
pub const LABEL_FIELD: usize = 0;

/// Field index of the quantity column
pub const QUANTITY_FIELD: usize = 2;

/// Field index of the revenue column
pub const REVENUE_FIELD: usize = 3;

/// Minimum number of fields a row must have to be considered at all.
///
/// Covers the label, quantity and revenue columns in the observed layout.
pub const DEFAULT_MIN_FIELD_COUNT: usize = 4;

// =============================================================================
// Sanity Limits
// =============================================================================

/// Maximum plausible revenue for a single line item, in currency units.
///
/// Rows above this are mis-parsed aggregate rows (grand totals, category
/// subtotals), not genuine sales. The bound is exclusive: a row exactly at
/// the ceiling is accepted.
pub const DEFAULT_REVENUE_CEILING: f64 = 15_000.0;

// =============================================================================
// Exclusion Vocabulary
// =============================================================================

/// Default label fragments that mark a row as noise rather than a menu item.
///
/// Covers payment tenders, menu category headers and subtotal markers as
/// they appear in the observed export template. Matching is case-insensitive
/// exact-or-substring. Business-specific, expected to drift; override via
/// the `[rules]` section of the config file.
pub const DEFAULT_EXCLUDED_LABELS: &[&str] = &[
    // Payment tenders
    "visa",
    "mastercard",
    "maestro",
    "bar",
    "barzahlung",
    "karte",
    "amex",
    "summe",
    // Categories and subtotals
    "speisen",
    "sonstiges",
    "total",
    "theke",
    "getränke",
    "kaffee & chai",
    "hafer heiss",
    "milch heiß",
    "kuchen",
    "snacks",
    "abfrage",
    "gesamt",
    "umsatz",
];

// =============================================================================
// Report Shape
// =============================================================================

/// Default number of ranked items in the console report
pub const DEFAULT_TOP_N: usize = 5;

/// Default number of bars in the chart view
pub const DEFAULT_CHART_TOP_N: usize = 10;

/// Default bar width (characters) for the chart view
pub const DEFAULT_CHART_WIDTH: usize = 40;
