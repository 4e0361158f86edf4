//! Geohash type definitions

use thiserror::Error;

/// Valid latitude range
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Valid longitude range
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// Geohash precision (string length) range
pub const MIN_PRECISION: u8 = 1;
pub const MAX_PRECISION: u8 = 12;

/// The 32-symbol geohash alphabet.
///
/// Excludes `a`, `i`, `l` and `o` to avoid visual ambiguity with digits.
pub const ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Returns the 5-bit value of an alphabet character, or `None` if the
/// character is not part of the geohash alphabet.
#[inline]
pub fn alphabet_index(c: char) -> Option<u8> {
    ALPHABET.iter().position(|&b| b as char == c).map(|i| i as u8)
}

/// Cardinal direction of an adjacent cell, used when walking the cell grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

/// The axis-aligned bounding box a geohash decodes to.
///
/// Every valid geohash string decodes to exactly one such box; the box
/// shrinks by a factor of 32 in area for every added character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellBounds {
    /// Southern edge latitude
    pub lat_min: f64,
    /// Northern edge latitude
    pub lat_max: f64,
    /// Western edge longitude
    pub lon_min: f64,
    /// Eastern edge longitude
    pub lon_max: f64,
}

impl CellBounds {
    /// The full lat/lon domain, which a zero-character prefix would cover.
    pub(crate) fn world() -> Self {
        Self {
            lat_min: MIN_LAT,
            lat_max: MAX_LAT,
            lon_min: MIN_LON,
            lon_max: MAX_LON,
        }
    }

    /// Center point of the cell as `(lat, lon)`.
    #[inline]
    pub fn center(&self) -> (f64, f64) {
        (
            (self.lat_min + self.lat_max) / 2.0,
            (self.lon_min + self.lon_max) / 2.0,
        )
    }

    /// North-south extent in degrees.
    #[inline]
    pub fn lat_span(&self) -> f64 {
        self.lat_max - self.lat_min
    }

    /// East-west extent in degrees.
    #[inline]
    pub fn lon_span(&self) -> f64 {
        self.lon_max - self.lon_min
    }

    /// Whether the point lies inside the box (edges inclusive).
    #[inline]
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.lat_min && lat <= self.lat_max && lon >= self.lon_min && lon <= self.lon_max
    }
}

/// Errors that can occur during geohash encoding or decoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeohashError {
    /// Latitude or longitude outside the valid geographic range
    #[error("invalid coordinate ({lat}, {lon}): latitude must be within [{MIN_LAT}, {MAX_LAT}] and longitude within [{MIN_LON}, {MAX_LON}]")]
    InvalidCoordinate { lat: f64, lon: f64 },

    /// Precision outside the 1-12 range
    #[error("invalid precision {0}: must be between {MIN_PRECISION} and {MAX_PRECISION}")]
    InvalidPrecision(u8),

    /// Geohash string is empty, too long, or contains characters outside the alphabet
    #[error("invalid geohash '{hash}': {reason}")]
    InvalidGeohash { hash: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_excludes_ambiguous_letters() {
        for c in ['a', 'i', 'l', 'o'] {
            assert!(alphabet_index(c).is_none(), "'{}' must not be valid", c);
        }
    }

    #[test]
    fn test_alphabet_has_32_unique_symbols() {
        use std::collections::HashSet;
        let set: HashSet<u8> = ALPHABET.iter().copied().collect();
        assert_eq!(set.len(), 32);
    }

    #[test]
    fn test_alphabet_index_ordering() {
        assert_eq!(alphabet_index('0'), Some(0));
        assert_eq!(alphabet_index('9'), Some(9));
        assert_eq!(alphabet_index('b'), Some(10));
        assert_eq!(alphabet_index('z'), Some(31));
    }

    #[test]
    fn test_alphabet_index_rejects_uppercase() {
        assert_eq!(alphabet_index('B'), None);
        assert_eq!(alphabet_index('Z'), None);
    }

    #[test]
    fn test_bounds_center() {
        let bounds = CellBounds {
            lat_min: 10.0,
            lat_max: 20.0,
            lon_min: -40.0,
            lon_max: -30.0,
        };
        assert_eq!(bounds.center(), (15.0, -35.0));
    }

    #[test]
    fn test_bounds_spans() {
        let bounds = CellBounds {
            lat_min: -5.0,
            lat_max: 5.0,
            lon_min: 100.0,
            lon_max: 102.5,
        };
        assert_eq!(bounds.lat_span(), 10.0);
        assert_eq!(bounds.lon_span(), 2.5);
    }

    #[test]
    fn test_bounds_contains_edges() {
        let bounds = CellBounds {
            lat_min: 0.0,
            lat_max: 1.0,
            lon_min: 0.0,
            lon_max: 1.0,
        };
        assert!(bounds.contains(0.0, 0.0));
        assert!(bounds.contains(1.0, 1.0));
        assert!(bounds.contains(0.5, 0.5));
        assert!(!bounds.contains(1.1, 0.5));
        assert!(!bounds.contains(0.5, -0.1));
    }

    #[test]
    fn test_world_bounds() {
        let world = CellBounds::world();
        assert!(world.contains(89.9, 179.9));
        assert!(world.contains(-89.9, -179.9));
        assert_eq!(world.center(), (0.0, 0.0));
    }
}
