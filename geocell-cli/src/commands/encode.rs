//! Encode command - encode a coordinate to a geohash.

use clap::Args;

use geocell::geohash::encode;

use super::common::resolve_precision;
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the encode command.
#[derive(Debug, Args)]
pub struct EncodeArgs {
    /// Latitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Longitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,

    /// Geohash precision (1-12, defaults to coverage.default_precision)
    #[arg(long)]
    pub precision: Option<u8>,
}

/// Run the encode command.
pub fn run(args: EncodeArgs) -> Result<(), CliError> {
    let runner = CliRunner::new()?;
    runner.log_startup("encode");

    let precision = resolve_precision(args.precision, runner.config());
    let geohash = encode(args.lat, args.lon, precision)?;

    println!("{}", geohash);
    Ok(())
}
