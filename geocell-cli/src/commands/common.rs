//! Shared argument types and helpers for command handlers.

use std::fs;
use std::path::Path;

use clap::ValueEnum;

use geocell::config::ConfigFile;
use geocell::coverage::CoveragePolicy;
use geocell::export::ExportFormat;

use crate::error::CliError;

/// Coverage policy selection.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PolicyArg {
    /// Only cells fully contained in the area
    Inner,
    /// Every cell that touches the area
    Outer,
}

impl From<PolicyArg> for CoveragePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Inner => CoveragePolicy::Inner,
            PolicyArg::Outer => CoveragePolicy::Outer,
        }
    }
}

/// Output format selection.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// CSV rows of geohash and WKT geometry
    Csv,
    /// GeoJSON FeatureCollection of cell polygons
    Geojson,
    /// Comma-joined geohash list
    List,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Geojson => ExportFormat::GeoJson,
            FormatArg::List => ExportFormat::List,
        }
    }
}

/// Resolve the export format from CLI argument or config default.
pub fn resolve_format(arg: Option<FormatArg>, config: &ConfigFile) -> ExportFormat {
    match arg {
        Some(format) => format.into(),
        None => config.export.format,
    }
}

/// Resolve the precision from CLI argument or config default.
pub fn resolve_precision(arg: Option<u8>, config: &ConfigFile) -> u8 {
    arg.unwrap_or(config.coverage.default_precision)
}

/// Read an input file to a string.
pub fn read_input_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|error| CliError::FileRead {
        path: path.display().to_string(),
        error,
    })
}

/// Write output to a file, or to stdout when no path is given.
pub fn write_output(output: Option<&Path>, content: &str) -> Result<(), CliError> {
    match output {
        Some(path) => {
            fs::write(path, content).map_err(|error| CliError::FileWrite {
                path: path.display().to_string(),
                error,
            })?;
            println!("Wrote {}", path.display());
            Ok(())
        }
        None => {
            println!("{}", content);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_arg_maps_to_policy() {
        assert_eq!(CoveragePolicy::from(PolicyArg::Inner), CoveragePolicy::Inner);
        assert_eq!(CoveragePolicy::from(PolicyArg::Outer), CoveragePolicy::Outer);
    }

    #[test]
    fn test_resolve_format_prefers_argument() {
        let config = ConfigFile::default();
        assert_eq!(
            resolve_format(Some(FormatArg::Geojson), &config),
            ExportFormat::GeoJson
        );
        assert_eq!(resolve_format(None, &config), config.export.format);
    }

    #[test]
    fn test_resolve_precision_falls_back_to_config() {
        let mut config = ConfigFile::default();
        config.coverage.default_precision = 8;
        assert_eq!(resolve_precision(Some(5), &config), 5);
        assert_eq!(resolve_precision(None, &config), 8);
    }
}
