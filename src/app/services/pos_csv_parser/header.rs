//! Header row detection for POS exports
//!
//! Exports carry a metadata preamble of arbitrary length (venue name,
//! reporting period, register id) before the real table. The header row is
//! found by content: the first line containing all configured marker tokens,
//! compared case-insensitively.

/// Find the 0-based index of the header row
///
/// A line matches when it contains every marker token, case-insensitively.
/// Returns `None` when no line in the whole file matches; callers must
/// treat that as fatal for the file, not attempt partial analysis.
pub fn locate_header(lines: &[&str], markers: &[String]) -> Option<usize> {
    let lowered_markers: Vec<String> = markers.iter().map(|m| m.to_lowercase()).collect();

    lines.iter().position(|line| {
        let lowered_line = line.to_lowercase();
        lowered_markers
            .iter()
            .all(|marker| lowered_line.contains(marker.as_str()))
    })
}
