//! Error types for ballout table operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for ballout operations.
pub type BalloutResult<T> = Result<T, BalloutError>;

/// Errors that can occur while reading a ballout table or writing symbols.
#[derive(Debug, Error)]
pub enum BalloutError {
    /// Failed to open or read the file.
    #[error("Failed to read file: {path}")]
    FileRead {
        /// Path to the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to write the output.
    #[error("Failed to write file: {path}")]
    FileWrite {
        /// Path to the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The CSV layer rejected the input.
    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// No blank delimiter row, or no header row after it.
    #[error("No header row found: {message}")]
    MissingHeader {
        /// Description of what's missing.
        message: String,
    },

    /// A data row has fewer fields than the header.
    #[error("Line {line}: expected {expected} fields, found {found}")]
    ShortRow {
        /// Line number in the input file (1-based).
        line: u64,
        /// Number of header columns.
        expected: usize,
        /// Number of fields in the row.
        found: usize,
    },

    /// A data row has non-empty fields past the last header column.
    #[error("Line {line}: {found} fields but the header only names {expected}")]
    LongRow {
        /// Line number in the input file (1-based).
        line: u64,
        /// Number of header columns.
        expected: usize,
        /// Number of fields in the row.
        found: usize,
    },

    /// The pad number column is not an integer.
    #[error("Line {line}: invalid pad number '{value}'")]
    InvalidPadNumber {
        /// Line number in the input file (1-based).
        line: u64,
        /// The offending value.
        value: String,
    },

    /// Requested package is not a header column.
    #[error("Package not found: {name}")]
    PackageNotFound {
        /// Package name that was requested.
        name: String,
    },
}

impl BalloutError {
    /// Creates a file read error.
    pub fn file_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Creates a file write error.
    pub fn file_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }

    /// Creates a missing header error.
    pub fn missing_header(message: impl Into<String>) -> Self {
        Self::MissingHeader {
            message: message.into(),
        }
    }

    /// Creates a package lookup error.
    pub fn package_not_found(name: impl Into<String>) -> Self {
        Self::PackageNotFound { name: name.into() }
    }
}
