//! Cover command - cover an area with geohash cells.

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use geocell::coverage::{cover, CoverageOptions};
use geocell::export::export_cells;
use geocell::geometry::{parse_coordinate_ring, read_geojson};

use super::common::{
    read_input_file, resolve_format, resolve_precision, write_output, FormatArg, PolicyArg,
};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the cover command.
#[derive(Debug, Args)]
pub struct CoverArgs {
    /// Area as a comma-separated lat,lon ring (e.g. "-6.17,106.82,-6.17,106.84,...")
    #[arg(long, conflicts_with = "input", allow_hyphen_values = true)]
    pub coords: Option<String>,

    /// Area as a GeoJSON file (Feature, FeatureCollection or Geometry)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Geohash precision (1-12, defaults to coverage.default_precision)
    #[arg(long)]
    pub precision: Option<u8>,

    /// Coverage policy: inner keeps contained cells, outer keeps touching cells
    #[arg(long, value_enum)]
    pub policy: PolicyArg,

    /// Output format (defaults to export.format)
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Output file (stdout when omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Ceiling on the cell count (defaults to coverage.max_cells)
    #[arg(long)]
    pub max_cells: Option<usize>,
}

/// Run the cover command.
pub fn run(args: CoverArgs) -> Result<(), CliError> {
    let runner = CliRunner::new()?;
    runner.log_startup("cover");
    let config = runner.config();

    let polygons = match (&args.coords, &args.input) {
        (Some(coords), None) => vec![parse_coordinate_ring(coords)?],
        (None, Some(path)) => {
            let text = read_input_file(path)?;
            read_geojson(&text)?
        }
        _ => {
            return Err(CliError::InvalidInput(
                "expected exactly one of --coords or --input".to_string(),
            ))
        }
    };

    let precision = resolve_precision(args.precision, config);
    let format = resolve_format(args.format, config);
    let max_cells = args.max_cells.unwrap_or(config.coverage.max_cells);
    let options = CoverageOptions::with_max_cells(max_cells);

    info!(
        precision,
        policy = %args.policy_name(),
        polygons = polygons.len(),
        "generating coverage"
    );

    let cells = cover(&polygons, precision, args.policy.into(), &options)?;
    info!(cells = cells.len(), "coverage complete");

    if args.output.is_some() {
        println!("Covered area with {} cells at precision {}", cells.len(), precision);
    }

    let content = export_cells(&cells, format)?;
    write_output(args.output.as_deref(), &content)
}

impl CoverArgs {
    fn policy_name(&self) -> &'static str {
        match self.policy {
            PolicyArg::Inner => "inner",
            PolicyArg::Outer => "outer",
        }
    }
}
