//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;

use crate::export::ExportFormat;

use super::defaults;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    /// Coverage settings
    pub coverage: CoverageSettings,
    /// Export settings
    pub export: ExportSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Coverage configuration.
///
/// The Inner/Outer policy is not configurable: it must be stated
/// explicitly on every call so equivalent invocations can never produce
/// different coverage.
#[derive(Debug, Clone)]
pub struct CoverageSettings {
    /// Precision used when a command does not pass `--precision` (1-12)
    pub default_precision: u8,
    /// Ceiling on the cell count of a single coverage run
    pub max_cells: usize,
}

/// Export configuration.
#[derive(Debug, Clone)]
pub struct ExportSettings {
    /// Output format used when a command does not pass `--format`
    pub format: ExportFormat,
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            coverage: CoverageSettings {
                default_precision: defaults::DEFAULT_COVERAGE_PRECISION,
                max_cells: defaults::DEFAULT_MAX_CELLS,
            },
            export: ExportSettings {
                format: defaults::DEFAULT_EXPORT_FORMAT,
            },
            logging: LoggingSettings {
                file: defaults::default_log_file(),
            },
        }
    }
}
