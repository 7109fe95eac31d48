//! Configuration structures for deserialisation.
//!
//! These structures map directly to the JSON configuration file format.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::generator::{GeneratorOptions, UnassignedBank};

/// Root configuration structure.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Optional JSON schema reference (ignored during parsing).
    #[serde(rename = "$schema", default)]
    _schema: Option<String>,

    /// Optional comment field (ignored during parsing).
    #[serde(rename = "_comment", default)]
    _comment: Option<String>,

    /// Symbol generation settings.
    #[serde(default)]
    pub symbol: SymbolConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any validation checks fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                key: "logging.level".to_string(),
                message: format!(
                    "'{}' is not one of: {}",
                    self.logging.level,
                    valid_levels.join(", ")
                ),
            });
        }
        Ok(())
    }
}

/// Symbol generation configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SymbolConfig {
    /// Place `GND` after every other signal of its bank.
    /// Default: true
    #[serde(default = "default_true")]
    pub ground_last: bool,

    /// Grouping of pads without a bank: "keep" or "split".
    /// Default: "keep"
    #[serde(default)]
    pub unassigned_bank: UnassignedBank,
}

impl Default for SymbolConfig {
    fn default() -> Self {
        Self {
            ground_last: default_true(),
            unassigned_bank: UnassignedBank::default(),
        }
    }
}

impl From<&SymbolConfig> for GeneratorOptions {
    fn from(config: &SymbolConfig) -> Self {
        Self {
            ground_last: config.ground_last,
            unassigned_bank: config.unassigned_bank,
        }
    }
}

const fn default_true() -> bool {
    true
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
