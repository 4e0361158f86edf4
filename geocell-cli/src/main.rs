//! GeoCell CLI - Command-line interface
//!
//! This binary provides a command-line interface to the GeoCell library.

use clap::{Parser, Subcommand};

mod commands;
mod error;
mod runner;

use commands::{cells, config, coords, cover, decode, encode};

#[derive(Parser)]
#[command(name = "geocell")]
#[command(version = geocell::VERSION)]
#[command(about = "Cover geographic areas with geohash cells", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cover an area with geohash cells
    Cover(cover::CoverArgs),

    /// Map a geohash list to exportable cell geometry
    Cells(cells::CellsArgs),

    /// Encode a coordinate to a geohash
    Encode(encode::EncodeArgs),

    /// Decode a geohash to its bounds and center
    Decode(decode::DecodeArgs),

    /// Extract per-feature coordinates from GeoJSON as CSV
    Coords(coords::CoordsArgs),

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: config::ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Cover(args) => cover::run(args),
        Commands::Cells(args) => cells::run(args),
        Commands::Encode(args) => encode::run(args),
        Commands::Decode(args) => decode::run(args),
        Commands::Coords(args) => coords::run(args),
        Commands::Config { command } => config::run(command),
    };

    if let Err(e) = result {
        e.exit();
    }
}
