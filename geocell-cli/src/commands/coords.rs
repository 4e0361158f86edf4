//! Coords command - extract per-feature coordinates from GeoJSON as CSV.

use std::path::PathBuf;

use clap::Args;
use geojson::GeoJson;

use geocell::export::{coordinate_rows_to_csv, feature_coordinate_rows};

use super::common::{read_input_file, write_output};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the coords command.
#[derive(Debug, Args)]
pub struct CoordsArgs {
    /// GeoJSON input file
    #[arg(long)]
    pub input: PathBuf,

    /// Feature property to use as the row name (defaults to feature index)
    #[arg(long)]
    pub name_property: Option<String>,

    /// Output file (stdout when omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Run the coords command.
pub fn run(args: CoordsArgs) -> Result<(), CliError> {
    let runner = CliRunner::new()?;
    runner.log_startup("coords");

    let text = read_input_file(&args.input)?;
    let gj: GeoJson = text
        .parse()
        .map_err(|e: geojson::Error| CliError::InvalidInput(e.to_string()))?;

    let rows = feature_coordinate_rows(&gj, args.name_property.as_deref())?;
    let content = coordinate_rows_to_csv(&rows)?;
    write_output(args.output.as_deref(), &content)
}
