//! Error handling for availability conversion.
//!
//! Provides error types with context for input reading, header parsing,
//! record shape checks and timestamp re-encoding failures.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Invalid header on line {line}: {reason}")]
    InvalidHeader { line: usize, reason: String },

    #[error("Record on line {line} has {found} fields, expected {expected}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },

    #[error("Invalid calendar date in timestamp '{value}': {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

pub type Result<T> = std::result::Result<T, SyncError>;
