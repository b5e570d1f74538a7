//! Configuration management and validation.
//!
//! Provides the layered configuration for the analysis pipeline: built-in
//! defaults, then an optional TOML config file, then CLI overrides applied
//! by the command layer. The exclusion vocabulary and sanity limits are
//! deliberately configuration data rather than code, since the set of
//! non-item labels is business-specific and drifts with the POS template.

use crate::app::models::NumberLocale;
use crate::constants::{
    DEFAULT_DELIMITER, DEFAULT_EXCLUDED_LABELS, DEFAULT_HEADER_MARKERS, DEFAULT_MIN_FIELD_COUNT,
    DEFAULT_REVENUE_CEILING, DEFAULT_TOP_N, LABEL_FIELD, QUANTITY_FIELD, REVENUE_FIELD,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Input format settings for the export file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Field delimiter of the export (semicolon in the observed template)
    pub delimiter: char,

    /// Tokens that must all appear in the header row (case-insensitive)
    pub header_markers: Vec<String>,

    /// Numeric formatting convention of the export
    pub locale: NumberLocale,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            header_markers: DEFAULT_HEADER_MARKERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            locale: NumberLocale::default(),
        }
    }
}

/// Exclusion rule settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Label fragments marking payment tenders, categories and subtotals.
    /// Setting this in a config file replaces the built-in vocabulary.
    pub excluded_labels: Vec<String>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            excluded_labels: DEFAULT_EXCLUDED_LABELS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Sanity limits and report shape
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum plausible single-item revenue; rows strictly above are rejected
    pub revenue_ceiling: f64,

    /// Minimum field count for a row to be considered
    pub min_field_count: usize,

    /// Number of items in the ranked listing
    pub top_n: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            revenue_ceiling: DEFAULT_REVENUE_CEILING,
            min_field_count: DEFAULT_MIN_FIELD_COUNT,
            top_n: DEFAULT_TOP_N,
        }
    }
}

/// Complete analyzer configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub rules: RulesConfig,
    pub limits: LimitsConfig,
}

impl Config {
    /// Default config file location (`~/.config/pos-analyzer/config.toml`)
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))?;
        Ok(config_dir.join("pos-analyzer").join("config.toml"))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            Error::configuration(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration with layered approach: defaults, then an optional
    /// config file. CLI overrides are applied afterwards by the command layer.
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => {
                // Fall back to the default location if a file exists there
                match Self::default_config_path() {
                    Ok(path) if path.exists() => Self::from_file(&path)?,
                    _ => Self::default(),
                }
            }
        };

        Ok(config)
    }

    /// Validate the configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.input.header_markers.is_empty() {
            return Err(Error::configuration(
                "At least one header marker token is required",
            ));
        }

        if self.input.header_markers.iter().any(|m| m.trim().is_empty()) {
            return Err(Error::configuration(
                "Header marker tokens must not be empty",
            ));
        }

        if !self.limits.revenue_ceiling.is_finite() || self.limits.revenue_ceiling <= 0.0 {
            return Err(Error::configuration(format!(
                "Revenue ceiling must be a positive number, got {}",
                self.limits.revenue_ceiling
            )));
        }

        // The fixed row layout reads fields 0, 2 and 3; a lower minimum
        // would let the extractor index past the end of short rows.
        let required = [LABEL_FIELD, QUANTITY_FIELD, REVENUE_FIELD]
            .into_iter()
            .max()
            .unwrap_or(0)
            + 1;
        if self.limits.min_field_count < required {
            return Err(Error::configuration(format!(
                "Minimum field count must be at least {} to cover the label, quantity and revenue columns",
                required
            )));
        }

        if self.limits.top_n == 0 {
            return Err(Error::configuration("Top-N count must be at least 1"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.input.delimiter, ';');
        assert_eq!(config.limits.top_n, 5);
        assert!(config.rules.excluded_labels.contains(&"visa".to_string()));
    }

    #[test]
    fn test_validate_rejects_empty_markers() {
        let mut config = Config::default();
        config.input.header_markers.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_nonpositive_ceiling() {
        let mut config = Config::default();
        config.limits.revenue_ceiling = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_short_min_field_count() {
        let mut config = Config::default();
        config.limits.min_field_count = 2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file_partial_sections() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[limits]\nrevenue_ceiling = 20000.0\ntop_n = 3\n\n[input]\nlocale = \"decimal-point\""
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.limits.revenue_ceiling, 20000.0);
        assert_eq!(config.limits.top_n, 3);
        assert_eq!(config.input.locale, NumberLocale::DecimalPoint);
        // Unspecified sections keep defaults
        assert_eq!(config.input.delimiter, ';');
        assert!(!config.rules.excluded_labels.is_empty());
    }

    #[test]
    fn test_from_file_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml [").unwrap();
        assert!(Config::from_file(file.path()).is_err());
    }
}
