//! Tests for locale-aware numeric normalization

use super::super::numeric::{normalize_decimal, normalize_integer};
use crate::app::models::NumberLocale;

#[test]
fn test_decimal_comma_with_thousands_dot() {
    let value = normalize_decimal("1.234,56", NumberLocale::DecimalComma).unwrap();
    assert!((value - 1234.56).abs() < 1e-9);
}

#[test]
fn test_decimal_comma_small_value() {
    let value = normalize_decimal("0,50", NumberLocale::DecimalComma).unwrap();
    assert!((value - 0.50).abs() < 1e-9);
}

#[test]
fn test_decimal_comma_without_separators() {
    let value = normalize_decimal("120", NumberLocale::DecimalComma).unwrap();
    assert!((value - 120.0).abs() < 1e-9);
}

#[test]
fn test_decimal_point_locale() {
    let value = normalize_decimal("1,234.56", NumberLocale::DecimalPoint).unwrap();
    assert!((value - 1234.56).abs() < 1e-9);
}

#[test]
fn test_surrounding_whitespace_ignored() {
    let value = normalize_decimal("  4,50  ", NumberLocale::DecimalComma).unwrap();
    assert!((value - 4.5).abs() < 1e-9);
}

#[test]
fn test_unparsable_decimal_is_an_error() {
    assert!(normalize_decimal("n/a", NumberLocale::DecimalComma).is_err());
    assert!(normalize_decimal("", NumberLocale::DecimalComma).is_err());
    assert!(normalize_decimal("   ", NumberLocale::DecimalComma).is_err());
    assert!(normalize_decimal("12,34,56", NumberLocale::DecimalComma).is_err());
}

#[test]
fn test_error_carries_original_value() {
    let err = normalize_decimal(" abc ", NumberLocale::DecimalComma).unwrap_err();
    assert_eq!(err.raw, "abc");
}

#[test]
fn test_integer_plain() {
    assert_eq!(normalize_integer("42", NumberLocale::DecimalComma).unwrap(), 42);
}

#[test]
fn test_integer_with_thousands_separator() {
    assert_eq!(
        normalize_integer("1.234", NumberLocale::DecimalComma).unwrap(),
        1234
    );
}

#[test]
fn test_integer_rejects_fractional_part() {
    assert!(normalize_integer("4,5", NumberLocale::DecimalComma).is_err());
}

#[test]
fn test_negative_values_pass_through() {
    let value = normalize_decimal("-12,50", NumberLocale::DecimalComma).unwrap();
    assert!((value + 12.5).abs() < 1e-9);
    assert_eq!(normalize_integer("-3", NumberLocale::DecimalComma).unwrap(), -3);
}
