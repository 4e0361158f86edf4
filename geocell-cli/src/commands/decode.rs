//! Decode command - decode a geohash to its bounds and center.

use clap::Args;

use geocell::geohash::decode_bounds;

use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the decode command.
#[derive(Debug, Args)]
pub struct DecodeArgs {
    /// Geohash to decode
    pub geohash: String,
}

/// Run the decode command.
pub fn run(args: DecodeArgs) -> Result<(), CliError> {
    let runner = CliRunner::new()?;
    runner.log_startup("decode");

    let hash = args.geohash.trim().to_lowercase();
    let bounds = decode_bounds(&hash)?;
    let (lat, lon) = bounds.center();

    println!("Geohash:   {}", hash);
    println!("Precision: {}", hash.len());
    println!("Center:    {}, {}", lat, lon);
    println!(
        "Bounds:    lat [{}, {}], lon [{}, {}]",
        bounds.lat_min, bounds.lat_max, bounds.lon_min, bounds.lon_max
    );
    println!(
        "Cell size: {} x {} degrees",
        bounds.lat_span(),
        bounds.lon_span()
    );

    Ok(())
}
