//! Tests for header row detection

use super::super::header::locate_header;

fn markers() -> Vec<String> {
    vec!["plu".to_string(), "anzahl".to_string(), "total".to_string()]
}

#[test]
fn test_header_after_metadata_preamble() {
    let lines = vec![
        "Kiez Kaffee Kraft",
        "Monatsbericht Januar 2026",
        "Kasse 95286",
        "PLU;Warengruppe;Anzahl;Total",
        "Latte;X;5;4,50",
    ];

    assert_eq!(locate_header(&lines, &markers()), Some(3));
}

#[test]
fn test_header_at_first_line() {
    let lines = vec!["PLU;Warengruppe;Anzahl;Total", "Latte;X;5;4,50"];
    assert_eq!(locate_header(&lines, &markers()), Some(0));
}

#[test]
fn test_match_is_case_insensitive() {
    let lines = vec!["metadata", "plu;warengruppe;ANZAHL;ToTaL"];
    assert_eq!(locate_header(&lines, &markers()), Some(1));
}

#[test]
fn test_all_markers_required() {
    // "Anzahl" missing from the would-be header
    let lines = vec!["PLU;Warengruppe;Menge;Total", "Latte;X;5;4,50"];
    assert_eq!(locate_header(&lines, &markers()), None);
}

#[test]
fn test_no_header_anywhere() {
    let lines = vec!["just", "metadata", "lines"];
    assert_eq!(locate_header(&lines, &markers()), None);
}

#[test]
fn test_first_matching_line_wins() {
    let lines = vec![
        "PLU;Anzahl;Total",
        "row;1;2;3",
        "PLU;Anzahl;Total",
    ];
    assert_eq!(locate_header(&lines, &markers()), Some(0));
}

#[test]
fn test_empty_input() {
    let lines: Vec<&str> = Vec::new();
    assert_eq!(locate_header(&lines, &markers()), None);
}

#[test]
fn test_long_preamble_is_skipped_transparently() {
    let mut lines: Vec<String> = (0..200).map(|i| format!("meta line {}", i)).collect();
    lines.push("PLU;Warengruppe;Anzahl;Total".to_string());
    let refs: Vec<&str> = lines.iter().map(|s| s.as_str()).collect();

    assert_eq!(locate_header(&refs, &markers()), Some(200));
}
