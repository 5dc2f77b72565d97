//! Error types for DDL execution and bulk insertion.

use thiserror::Error;

/// Errors that can occur while creating tables or inserting rows.
#[derive(Debug, Error)]
pub enum SqliteError {
    /// SQLite operation failure, including table-already-exists on a
    /// rerun and any constraint violation the engine enforces.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A table's columns do not all hold the same number of cells.
    #[error("table '{table}' has ragged columns: expected {expected} cells, column '{column}' has {actual}")]
    RaggedTable {
        /// Offending table name.
        table: String,
        /// Cell count of the first column.
        expected: usize,
        /// Column whose cell count differs.
        column: String,
        /// That column's cell count.
        actual: usize,
    },
}

/// Convenience alias for results with [`SqliteError`].
pub type Result<T> = std::result::Result<T, SqliteError>;
