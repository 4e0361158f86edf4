//! Cells command - map a geohash list to exportable cell geometry.

use std::path::PathBuf;

use clap::Args;

use geocell::cells::cell_set_center;
use geocell::export::export_cells;
use geocell::normalize::normalize;

use super::common::{read_input_file, resolve_format, write_output, FormatArg};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the cells command.
#[derive(Debug, Args)]
pub struct CellsArgs {
    /// Geohashes, separated by commas, semicolons or whitespace
    #[arg(conflicts_with = "input")]
    pub geohashes: Option<String>,

    /// File containing the geohash list
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Output format (defaults to export.format)
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Output file (stdout when omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Run the cells command.
pub fn run(args: CellsArgs) -> Result<(), CliError> {
    let runner = CliRunner::new()?;
    runner.log_startup("cells");
    let config = runner.config();

    let raw = match (&args.geohashes, &args.input) {
        (Some(raw), None) => raw.clone(),
        (None, Some(path)) => read_input_file(path)?,
        _ => {
            return Err(CliError::InvalidInput(
                "expected exactly one of a geohash list or --input".to_string(),
            ))
        }
    };

    let cells = normalize(&raw);
    if cells.is_empty() {
        return Err(CliError::InvalidInput(
            "no valid geohashes in input".to_string(),
        ));
    }

    if args.output.is_some() {
        println!("{} valid geohashes", cells.len());
        if let Some((lat, lon)) = cell_set_center(&cells)? {
            println!("Center: {}, {}", lat, lon);
        }
    }

    let format = resolve_format(args.format, config);
    let content = export_cells(&cells, format)?;
    write_output(args.output.as_deref(), &content)
}
