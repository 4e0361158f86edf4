//! Configuration key access and validation.
//!
//! Type-safe interface for getting and setting configuration values by
//! `section.key` name, used by the `config get`/`config set` commands.

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use super::settings::ConfigFile;
use crate::export::ExportFormat;
use crate::geohash::{MAX_PRECISION, MIN_PRECISION};

/// Errors that can occur when getting or setting configuration values.
#[derive(Debug, Error)]
pub enum ConfigKeyError {
    /// Unknown configuration key.
    #[error("Unknown configuration key '{0}'")]
    UnknownKey(String),

    /// Validation failed for the value.
    #[error("Invalid value for {key}: {reason}")]
    ValidationFailed { key: String, reason: String },
}

/// Supported configuration keys.
///
/// Each key maps to a specific field in [`ConfigFile`] and knows how to
/// get and set its value with validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    /// `coverage.default_precision`
    CoverageDefaultPrecision,
    /// `coverage.max_cells`
    CoverageMaxCells,
    /// `export.format`
    ExportFormat,
    /// `logging.file`
    LoggingFile,
}

impl FromStr for ConfigKey {
    type Err = ConfigKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "coverage.default_precision" => Ok(ConfigKey::CoverageDefaultPrecision),
            "coverage.max_cells" => Ok(ConfigKey::CoverageMaxCells),
            "export.format" => Ok(ConfigKey::ExportFormat),
            "logging.file" => Ok(ConfigKey::LoggingFile),
            other => Err(ConfigKeyError::UnknownKey(other.to_string())),
        }
    }
}

impl ConfigKey {
    /// All keys, ordered by section for display.
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::CoverageDefaultPrecision,
            ConfigKey::CoverageMaxCells,
            ConfigKey::ExportFormat,
            ConfigKey::LoggingFile,
        ]
    }

    /// Full `section.key` name.
    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::CoverageDefaultPrecision => "coverage.default_precision",
            ConfigKey::CoverageMaxCells => "coverage.max_cells",
            ConfigKey::ExportFormat => "export.format",
            ConfigKey::LoggingFile => "logging.file",
        }
    }

    /// The `[section]` this key belongs to.
    pub fn section(&self) -> &'static str {
        self.name().split('.').next().unwrap_or_default()
    }

    /// The key name within its section.
    pub fn key_name(&self) -> &'static str {
        self.name().split('.').nth(1).unwrap_or_default()
    }

    /// Current value as a display string.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::CoverageDefaultPrecision => {
                config.coverage.default_precision.to_string()
            }
            ConfigKey::CoverageMaxCells => config.coverage.max_cells.to_string(),
            ConfigKey::ExportFormat => config.export.format.to_string(),
            ConfigKey::LoggingFile => config.logging.file.display().to_string(),
        }
    }

    /// Set the value from a string, validating it first.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigKeyError> {
        match self {
            ConfigKey::CoverageDefaultPrecision => {
                let precision: u8 = value.parse().map_err(|_| self.validation_failed(
                    "must be an integer between 1 and 12",
                ))?;
                if !(MIN_PRECISION..=MAX_PRECISION).contains(&precision) {
                    return Err(self.validation_failed("must be between 1 and 12"));
                }
                config.coverage.default_precision = precision;
            }
            ConfigKey::CoverageMaxCells => {
                let max_cells: usize = value
                    .parse()
                    .map_err(|_| self.validation_failed("must be a positive integer"))?;
                if max_cells == 0 {
                    return Err(self.validation_failed("must be greater than zero"));
                }
                config.coverage.max_cells = max_cells;
            }
            ConfigKey::ExportFormat => {
                config.export.format = value
                    .parse::<ExportFormat>()
                    .map_err(|reason| self.validation_failed(&reason))?;
            }
            ConfigKey::LoggingFile => {
                if value.trim().is_empty() {
                    return Err(self.validation_failed("must be a file path"));
                }
                config.logging.file = PathBuf::from(value);
            }
        }
        Ok(())
    }

    fn validation_failed(&self, reason: &str) -> ConfigKeyError {
        ConfigKeyError::ValidationFailed {
            key: self.name().to_string(),
            reason: reason.to_string(),
        }
    }
}
