//! Core POS export parser implementation
//!
//! Orchestrates one file analysis: read the export into memory, strip the
//! BOM, locate the real header row behind the metadata preamble, then feed
//! each data row through extraction and classification. Row-level failures
//! are absorbed into statistics; only file-level conditions become errors.

use std::path::Path;
use tracing::{debug, info};

use super::header::locate_header;
use super::record_parser::extract_line_item;
use super::stats::{ParseResult, ParseStats};
use crate::app::services::exclusion::ExclusionRules;
use crate::config::Config;
use crate::constants::UTF8_BOM;
use crate::{Error, Result};

/// Parser for semi-structured POS export files
///
/// One instance per configuration; each `parse_file` call is an independent
/// single-pass run with no state carried between files.
#[derive(Debug)]
pub struct PosCsvParser {
    config: Config,
    rules: ExclusionRules,
}

impl PosCsvParser {
    /// Create a parser with compiled exclusion rules
    pub fn new(config: Config) -> Self {
        let rules = ExclusionRules::from_fragments(&config.rules.excluded_labels);
        Self { config, rules }
    }

    /// Parse a POS export file and return accepted items with statistics
    pub fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!("Parsing POS export: {}", file_path.display());

        let content = std::fs::read_to_string(file_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::file_not_found(file_path.display().to_string())
            } else {
                Error::io(
                    format!("Failed to read file {}", file_path.display()),
                    e,
                )
            }
        })?;

        self.parse_content(&content, &file_path.display().to_string())
    }

    /// Parse export content that has already been read into memory
    pub fn parse_content(&self, content: &str, file: &str) -> Result<ParseResult> {
        // Excel-generated exports start with a UTF-8 BOM
        let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);
        let lines: Vec<&str> = content.lines().collect();

        let header_idx = locate_header(&lines, &self.config.input.header_markers)
            .ok_or_else(|| Error::header_not_found(file, &self.config.input.header_markers))?;

        info!("Header detected at row {}", header_idx + 1);

        let mut stats = ParseStats {
            header_row: header_idx + 1,
            ..ParseStats::new()
        };

        let data_region = lines[header_idx..].join("\n");
        let items = self.parse_data_region(&data_region, file, &mut stats)?;

        info!(
            "Parsed {} line items from {} rows ({} rejected, {} excluded)",
            stats.items_accepted, stats.total_rows, stats.rows_rejected, stats.rows_excluded
        );

        Ok(ParseResult { items, stats })
    }

    /// Run the extract/classify loop over the data region below the header
    fn parse_data_region(
        &self,
        data_region: &str,
        file: &str,
        stats: &mut ParseStats,
    ) -> Result<Vec<crate::app::models::LineItem>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(self.config.input.delimiter as u8)
            .has_headers(true)
            .flexible(true)
            .from_reader(data_region.as_bytes());

        let mut items = Vec::new();

        for result in csv_reader.records() {
            stats.total_rows += 1;

            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    // Malformed rows are expected in dirty exports; count, don't abort
                    stats.rows_rejected += 1;
                    stats
                        .notes
                        .push(format!("row {}: CSV error: {}", stats.total_rows, e));
                    debug!("CSV error at row {} in '{}': {}", stats.total_rows, file, e);
                    continue;
                }
            };

            let item = match extract_line_item(&record, &self.config.limits, self.config.input.locale)
            {
                Ok(item) => item,
                Err(rejection) => {
                    stats.rows_rejected += 1;
                    stats
                        .notes
                        .push(format!("row {}: {}", stats.total_rows, rejection));
                    debug!("Rejected row {}: {}", stats.total_rows, rejection);
                    continue;
                }
            };

            if self.rules.is_excluded(&item.label) {
                stats.rows_excluded += 1;
                debug!("Excluded non-item row '{}'", item.label);
                continue;
            }

            stats.items_accepted += 1;
            items.push(item);
        }

        Ok(items)
    }
}
