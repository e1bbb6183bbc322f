//! Error types for the millwright library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for millwright operations.
///
/// The validation path itself never produces errors: an invalid
/// specification is a normal outcome carried as data. Errors exist only
/// where real failures can happen, i.e. loading price lists and
/// deserializing specifications.
#[derive(Debug, Error)]
pub enum MillwrightError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A price-list row references a material the engine does not know.
    #[error("Unknown material '{0}' at row {1}")]
    UnknownMaterial(String, usize),

    /// A price-list row holds a value that does not parse.
    #[error("Parse error at row {row}, column '{column}': {message}")]
    Parse {
        row: usize,
        column: String,
        message: String,
    },

    /// Empty file or no usable rows.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for millwright operations.
pub type Result<T> = std::result::Result<T, MillwrightError>;
