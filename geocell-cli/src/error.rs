//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use geocell::config::ConfigFileError;
use geocell::coverage::CoverageError;
use geocell::export::ExportError;
use geocell::geohash::GeohashError;
use geocell::geometry::GeometryError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Invalid command-line input
    InvalidInput(String),
    /// Failed to parse input geometry
    Geometry(GeometryError),
    /// Coverage generation failed
    Coverage(CoverageError),
    /// Geohash encoding or decoding failed
    Geohash(GeohashError),
    /// Output serialization failed
    Export(ExportError),
    /// Failed to read input file
    FileRead { path: String, error: std::io::Error },
    /// Failed to write output file
    FileWrite { path: String, error: std::io::Error },
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::Coverage(CoverageError::CoverageTooLarge { .. }) => {
                eprintln!();
                eprintln!("To cover this area, either:");
                eprintln!("  1. Lower the precision with --precision");
                eprintln!("  2. Raise the ceiling with --max-cells");
                eprintln!("     (or: geocell config set coverage.max_cells <n>)");
            }
            CliError::Config(_) => {
                eprintln!();
                eprintln!("Use 'geocell config list' to see available keys.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Geometry(e) => write!(f, "Failed to parse geometry: {}", e),
            CliError::Coverage(e) => write!(f, "Coverage failed: {}", e),
            CliError::Geohash(e) => write!(f, "{}", e),
            CliError::Export(e) => write!(f, "Failed to serialize output: {}", e),
            CliError::FileRead { path, error } => {
                write!(f, "Failed to read file '{}': {}", path, error)
            }
            CliError::FileWrite { path, error } => {
                write!(f, "Failed to write file '{}': {}", path, error)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Geometry(e) => Some(e),
            CliError::Coverage(e) => Some(e),
            CliError::Geohash(e) => Some(e),
            CliError::Export(e) => Some(e),
            CliError::FileRead { error, .. } => Some(error),
            CliError::FileWrite { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<GeometryError> for CliError {
    fn from(e: GeometryError) -> Self {
        CliError::Geometry(e)
    }
}

impl From<CoverageError> for CliError {
    fn from(e: CoverageError) -> Self {
        CliError::Coverage(e)
    }
}

impl From<GeohashError> for CliError {
    fn from(e: GeohashError) -> Self {
        CliError::Geohash(e)
    }
}

impl From<ExportError> for CliError {
    fn from(e: ExportError) -> Self {
        CliError::Export(e)
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e.to_string())
    }
}
