//! POS Analyzer Library
//!
//! A Rust library for cleaning semi-structured point-of-sale CSV exports
//! and producing ranked sales summaries.
//!
//! This library provides tools for:
//! - Locating the real data table inside exports with metadata preambles
//! - Normalizing locale-formatted numerics (e.g. `1.234,56`) to canonical values
//! - Filtering payment-tender, category and subtotal rows out of the item stream
//! - Aggregating accepted line items into a ranked revenue summary
//! - Comprehensive error handling with per-row graceful degradation

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregator;
        pub mod exclusion;
        pub mod pos_csv_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{LineItem, NumberLocale, SalesSummary};
pub use config::Config;

/// Result type alias for the POS analyzer
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for POS export processing operations
///
/// Only file-level failures are represented here. Row-level conditions
/// (short rows, unparsable numerics, over-ceiling values) are absorbed
/// inside the parser and surfaced through statistics instead.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file does not exist or is not readable
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// CSV-level parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// File was read but no line contained all header marker tokens
    #[error("Could not find the data header in '{file}' (expected a row containing: {markers})")]
    HeaderNotFound { file: String, markers: String },

    /// Header was found but no rows survived extraction and classification
    #[error(
        "No valid product items found in '{file}'. Check the exclusion rules and data header assumptions."
    )]
    NoValidItems { file: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a header not found error
    pub fn header_not_found(file: impl Into<String>, markers: &[String]) -> Self {
        Self::HeaderNotFound {
            file: file.into(),
            markers: markers.join(", "),
        }
    }

    /// Create a no valid items error
    pub fn no_valid_items(file: impl Into<String>) -> Self {
        Self::NoValidItems { file: file.into() }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
