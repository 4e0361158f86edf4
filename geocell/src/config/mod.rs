//! Configuration for GeoCell.
//!
//! User configuration lives in `~/.geocell/config.ini`. Settings structs
//! are in [`settings`], defaults in [`defaults`], file I/O in [`file`], and
//! typed key access for the `config get`/`config set` commands in [`keys`].

mod defaults;
mod file;
mod keys;
mod settings;

pub use defaults::{
    default_log_file, DEFAULT_COVERAGE_PRECISION, DEFAULT_EXPORT_FORMAT, DEFAULT_MAX_CELLS,
};
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use keys::{ConfigKey, ConfigKeyError};
pub use settings::{ConfigFile, CoverageSettings, ExportSettings, LoggingSettings};
