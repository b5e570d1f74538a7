//! Locale-aware numeric normalization
//!
//! POS exports write numbers in the register's locale, e.g. `1.234,56` for
//! 1234.56. These helpers strip the thousands separator, canonicalize the
//! decimal separator and parse, returning an error instead of silently
//! coercing unparsable input to zero. Pure functions, no state.

use crate::app::models::NumberLocale;

/// A numeric field could not be normalized to a canonical value
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("could not parse '{raw}' as a number")]
pub struct NormalizeError {
    /// The original field value, before cleaning
    pub raw: String,
}

/// Normalize a locale-formatted decimal string to an `f64`
///
/// `"1.234,56"` with [`NumberLocale::DecimalComma`] yields `1234.56`;
/// `"0,50"` yields `0.5`. Whitespace around the value is ignored.
pub fn normalize_decimal(raw: &str, locale: NumberLocale) -> Result<f64, NormalizeError> {
    let cleaned = clean(raw, locale)?;

    cleaned.parse::<f64>().map_err(|_| NormalizeError {
        raw: raw.trim().to_string(),
    })
}

/// Normalize a locale-formatted integer string to an `i64`
///
/// Thousands separators are tolerated (`"1.234"` yields 1234 under
/// [`NumberLocale::DecimalComma`]); a fractional part is an error.
pub fn normalize_integer(raw: &str, locale: NumberLocale) -> Result<i64, NormalizeError> {
    let cleaned = clean(raw, locale)?;

    cleaned.parse::<i64>().map_err(|_| NormalizeError {
        raw: raw.trim().to_string(),
    })
}

/// Strip whitespace and thousands separators, canonicalize the decimal point
fn clean(raw: &str, locale: NumberLocale) -> Result<String, NormalizeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(NormalizeError {
            raw: trimmed.to_string(),
        });
    }

    let without_thousands: String = trimmed
        .chars()
        .filter(|&c| c != locale.thousands_separator())
        .collect();

    Ok(without_thousands.replace(locale.decimal_separator(), "."))
}
