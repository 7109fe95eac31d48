//! Error types for ballout-kicad configuration.
//!
//! Table and output errors live in [`crate::ballout::error`].

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read configuration file: {path}")]
    ReadError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed.
    #[error("failed to parse configuration file: {path}")]
    ParseError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {path}")]
    NotFound {
        /// Path where the configuration file was expected.
        path: PathBuf,
    },

    /// A setting holds a value the converter cannot use.
    #[error("invalid value for '{key}' in configuration: {message}")]
    ValidationError {
        /// Dotted path of the setting (e.g. `logging.level`).
        key: String,
        /// Description of the validation failure.
        message: String,
    },
}
