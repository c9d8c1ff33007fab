//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum that covers all error
//! cases in the library, so callers can match on what went wrong.
//!
//! Lines that do not match the chat format are **not** errors: the loader
//! drops them silently. Errors are reserved for conditions that make the
//! whole call fail.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::table::Column;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::ChatTable;
///
/// fn my_function() -> Result<ChatTable> {
///     chatlens::load_str("[2024-01-01, 9:00 AM] Alice: Hi", true)
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// The chat log could not be opened or read.
    ///
    /// This happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - The file is not valid UTF-8
    #[error("Cannot read chat log {}: {source}", path.display())]
    FileAccess {
        /// The path that was requested
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A timestamp could not be split into date and time.
    ///
    /// Splitting expects a comma between the two parts, e.g. `2024-01-15, 9:30 AM`.
    #[error("Invalid timestamp '{timestamp}': expected 'date, time' separated by a comma")]
    InvalidTimestamp {
        /// The timestamp text as captured from the line
        timestamp: String,
    },

    /// An operation needed a column the table does not have.
    ///
    /// Keyword search, for example, requires the `Date` column produced by
    /// timestamp splitting.
    #[error("Missing column '{column}'")]
    MissingColumn {
        /// The column that was required
        column: Column,
    },

    /// A search pattern failed to compile.
    #[error("Invalid search pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// An I/O error occurred while writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// CSV rendering error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON rendering error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatlensError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatlensError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates a file access error for `path`.
    pub fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ChatlensError::FileAccess {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid timestamp error.
    pub fn invalid_timestamp(timestamp: impl Into<String>) -> Self {
        ChatlensError::InvalidTimestamp {
            timestamp: timestamp.into(),
        }
    }

    /// Creates a missing column error.
    pub fn missing_column(column: Column) -> Self {
        ChatlensError::MissingColumn { column }
    }

    /// Returns `true` if the input file could not be opened or read.
    pub fn is_file_access(&self) -> bool {
        matches!(self, ChatlensError::FileAccess { .. })
    }

    /// Returns `true` if this is a timestamp format error.
    pub fn is_invalid_timestamp(&self) -> bool {
        matches!(self, ChatlensError::InvalidTimestamp { .. })
    }

    /// Returns `true` if a required column was missing.
    pub fn is_missing_column(&self) -> bool {
        matches!(self, ChatlensError::MissingColumn { .. })
    }
}
