//! GeoCell - Geohash coverage for arbitrary geographic areas
//!
//! This library converts between coordinates, geohash cells and geometry:
//! encode and decode geohashes, cover a polygon with cells at a chosen
//! precision, and map cell sets back to exportable geometry.
//!
//! # High-Level API
//!
//! ```ignore
//! use geocell::coverage::{cover, CoverageOptions, CoveragePolicy};
//! use geocell::geometry::parse_coordinate_ring;
//!
//! let polygon = parse_coordinate_ring("-6.17, 106.82, -6.17, 106.84, -6.19, 106.84")?;
//! let cells = cover(&[polygon], 7, CoveragePolicy::Outer, &CoverageOptions::default())?;
//! ```

pub mod cells;
pub mod config;
pub mod coverage;
pub mod export;
pub mod geohash;
pub mod geometry;
pub mod logging;
pub mod normalize;

/// Version of the GeoCell library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_not_empty() {
        assert!(!VERSION.is_empty(), "Version should not be empty");
    }

    #[test]
    fn test_geohash_module_exists() {
        // Verify geohash module is accessible
        let result = geohash::encode(40.7128, -74.0060, 7);
        assert!(result.is_ok());
    }
}
