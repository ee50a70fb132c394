//! Error types for attendance-ledger — Railway Programming
//!
//! Infrastructure failures return `Result<T, AttendanceError>`.
//! Rejected actions (bad credentials, undecodable tokens, role denials)
//! are not errors; they are reported through [`crate::Outcome`].

use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for all ledger operations
#[derive(Error, Debug)]
pub enum AttendanceError {
    // ─── Storage Errors ───

    #[error("Table {table} not found at {}", .path.display())]
    TableNotFound { table: String, path: PathBuf },

    #[error("Table {table} is missing column '{column}'")]
    MissingColumn { table: String, column: String },

    #[error("Row width mismatch in {table}: expected {expected} fields, got {actual}")]
    RowWidth {
        table: String,
        expected: usize,
        actual: usize,
    },

    // ─── Session Errors ───

    #[error("Input closed while waiting for: {0}")]
    InputClosed(String),

    // ─── Infrastructure Errors ───

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, AttendanceError>;
