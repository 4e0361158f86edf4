//! Default values for all configuration settings.

use std::path::PathBuf;

use crate::export::ExportFormat;

use super::file::config_directory;

/// Default geohash precision for coverage runs.
pub const DEFAULT_COVERAGE_PRECISION: u8 = 6;

/// Default ceiling on the cell count of a single coverage run.
///
/// Generous enough for city-scale areas at precision 7; a cap this size
/// keeps a mistaken precision-12 request over a country from exhausting
/// memory.
pub const DEFAULT_MAX_CELLS: usize = 50_000;

/// Default export format.
pub const DEFAULT_EXPORT_FORMAT: ExportFormat = ExportFormat::Csv;

/// Default log file path (~/.geocell/geocell.log).
pub fn default_log_file() -> PathBuf {
    config_directory().join("geocell.log")
}
