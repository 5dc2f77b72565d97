//! Error types for CSV discovery and loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while discovering and loading CSV files.
///
/// Every variant is fatal: the migration aborts on the first error with
/// no partial-state cleanup.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Directory listing or file access failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV content (including ragged rows).
    #[error("csv parse error: {0}")]
    Csv(#[from] csv::Error),

    /// A value in a timestamp column did not match any accepted format.
    #[error("unparseable timestamp in column '{column}': '{value}'")]
    InvalidTimestamp {
        /// Column the value came from (`date` or `issued`).
        column: String,
        /// The offending raw value.
        value: String,
    },

    /// The file name yields no usable table name (no stem).
    #[error("cannot derive a table name from '{0}'")]
    TableName(PathBuf),
}

/// Convenience alias for results with [`LoadError`].
pub type Result<T> = std::result::Result<T, LoadError>;
