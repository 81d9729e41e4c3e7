// src/error.rs

//! Error types for Pantry
//!
//! Validation failures and missing records are not errors: the workflow
//! reports them as normal outcomes. Anything that reaches this enum is a
//! storage or I/O problem.

use thiserror::Error;

/// Main error type for Pantry operations
#[derive(Debug, Error)]
pub enum Error {
    /// SQLite failure (open, query, constraint)
    #[error("Database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),

    /// Filesystem failure
    #[error("I/O error: {0}")]
    IoError(String),

    /// Database or directory initialization failure
    #[error("Initialization error: {0}")]
    InitError(String),

    /// A record that must exist was not found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Stored value could not be decoded
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err.to_string())
    }
}

/// Result type alias for Pantry operations
pub type Result<T> = std::result::Result<T, Error>;
