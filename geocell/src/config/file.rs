//! Configuration file handling for ~/.geocell/config.ini.
//!
//! Loads and saves user configuration with sensible defaults. Settings
//! structs live in [`super::settings`], constants in [`super::defaults`].

use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;

use super::settings::ConfigFile;
use crate::export::ExportFormat;
use crate::geohash::{MAX_PRECISION, MIN_PRECISION};

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Failed to write config file
    #[error("Failed to write config file: {0}")]
    WriteError(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// Failed to create config directory
    #[error("Failed to create config directory: {0}")]
    DirectoryError(std::io::Error),
}

impl ConfigFile {
    /// Load configuration from the default path (~/.geocell/config.ini).
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load() -> Result<Self, ConfigFileError> {
        let path = config_file_path();
        Self::load_from(&path)
    }

    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        parse_ini(&ini)
    }

    /// Save configuration to the default path (~/.geocell/config.ini).
    pub fn save(&self) -> Result<(), ConfigFileError> {
        let path = config_file_path();
        self.save_to(&path)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigFileError::DirectoryError)?;
        }

        let content = to_config_string(self);
        std::fs::write(path, content).map_err(|e| ConfigFileError::WriteError(e.to_string()))
    }

    /// Create the default config file if it doesn't exist.
    ///
    /// Returns the path to the config file.
    pub fn ensure_exists() -> Result<PathBuf, ConfigFileError> {
        let path = config_file_path();
        if !path.exists() {
            let config = Self::default();
            config.save_to(&path)?;
        }
        Ok(path)
    }
}

/// Get the path to the config directory (~/.geocell).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".geocell")
}

/// Get the path to the config file (~/.geocell/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}

/// Parse a loaded INI document into a [`ConfigFile`].
///
/// Missing sections and keys fall back to defaults; present values are
/// validated and rejected with [`ConfigFileError::InvalidValue`].
fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    if let Some(section) = ini.section(Some("coverage")) {
        if let Some(value) = section.get("default_precision") {
            let precision: u8 = value.parse().map_err(|_| invalid(
                "coverage",
                "default_precision",
                value,
                "must be an integer",
            ))?;
            if !(MIN_PRECISION..=MAX_PRECISION).contains(&precision) {
                return Err(invalid(
                    "coverage",
                    "default_precision",
                    value,
                    "must be between 1 and 12",
                ));
            }
            config.coverage.default_precision = precision;
        }
        if let Some(value) = section.get("max_cells") {
            let max_cells: usize = value.parse().map_err(|_| invalid(
                "coverage",
                "max_cells",
                value,
                "must be a positive integer",
            ))?;
            if max_cells == 0 {
                return Err(invalid(
                    "coverage",
                    "max_cells",
                    value,
                    "must be greater than zero",
                ));
            }
            config.coverage.max_cells = max_cells;
        }
    }

    if let Some(section) = ini.section(Some("export")) {
        if let Some(value) = section.get("format") {
            config.export.format = value
                .parse::<ExportFormat>()
                .map_err(|reason| invalid("export", "format", value, &reason))?;
        }
    }

    if let Some(section) = ini.section(Some("logging")) {
        if let Some(value) = section.get("file") {
            config.logging.file = PathBuf::from(value);
        }
    }

    Ok(config)
}

/// Serialize a [`ConfigFile`] to INI text.
fn to_config_string(config: &ConfigFile) -> String {
    format!(
        "[coverage]\n\
         default_precision = {}\n\
         max_cells = {}\n\
         \n\
         [export]\n\
         format = {}\n\
         \n\
         [logging]\n\
         file = {}\n",
        config.coverage.default_precision,
        config.coverage.max_cells,
        config.export.format,
        config.logging.file.display(),
    )
}

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
