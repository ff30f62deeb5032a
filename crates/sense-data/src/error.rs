//! Data-loading error types.

use std::path::PathBuf;

/// Errors that can occur while loading and mapping the input tables.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// An expected directory or file is absent.
    #[error(
        "Missing input {}: {reason}. Run from the directory that contains it or pass --data-dir.",
        path.display()
    )]
    MissingInput { path: PathBuf, reason: String },

    /// A file exists but could not be parsed as CSV with any configured encoding.
    #[error("Unreadable CSV {}: {reason}", path.display())]
    Unreadable { path: PathBuf, reason: String },

    /// None of the candidate identifier columns exist in a table.
    #[error("Table '{table}' has no identifier column (tried: {tried})")]
    MissingIdColumn { table: String, tried: String },

    /// None of the candidate text columns exist in the descriptions table.
    #[error("Table '{table}' has no description text column (tried: {tried})")]
    NoTextColumn { table: String, tried: String },

    /// `DuckDB` operation failed.
    #[error("DuckDB error: {0}")]
    DuckDb(#[from] duckdb::Error),

    /// I/O error while listing the data directory.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
