//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`cells`] - Map a geohash list to exportable cell geometry
//! - [`config`] - Configuration management (get, set, list, path)
//! - [`coords`] - Extract per-feature coordinates from GeoJSON as CSV
//! - [`cover`] - Cover an area with geohash cells
//! - [`decode`] - Decode a geohash to its bounds and center
//! - [`encode`] - Encode a coordinate to a geohash

pub mod cells;
pub mod common;
pub mod config;
pub mod coords;
pub mod cover;
pub mod decode;
pub mod encode;
