//! Geohash codec
//!
//! Encodes (latitude, longitude) pairs into base-32 geohash strings and
//! decodes geohash strings back into their bounding boxes. A geohash is a
//! recursively bisected lat/lon rectangle: each character carries 5 bits,
//! assigned alternately to the longitude and latitude axes (longitude first).

mod types;

pub use types::{
    alphabet_index, CellBounds, Direction, GeohashError, ALPHABET, MAX_LAT, MAX_LON,
    MAX_PRECISION, MIN_LAT, MIN_LON, MIN_PRECISION,
};

/// Validates a precision value against the 1-12 range.
#[inline]
pub fn validate_precision(precision: u8) -> Result<(), GeohashError> {
    if !(MIN_PRECISION..=MAX_PRECISION).contains(&precision) {
        return Err(GeohashError::InvalidPrecision(precision));
    }
    Ok(())
}

/// Validates a geohash string: non-empty, at most 12 characters, all of
/// them in the base-32 alphabet.
pub fn validate(hash: &str) -> Result<(), GeohashError> {
    if hash.is_empty() {
        return Err(GeohashError::InvalidGeohash {
            hash: hash.to_string(),
            reason: "geohash is empty".to_string(),
        });
    }
    if hash.len() > MAX_PRECISION as usize {
        return Err(GeohashError::InvalidGeohash {
            hash: hash.to_string(),
            reason: format!("length {} exceeds maximum of {}", hash.len(), MAX_PRECISION),
        });
    }
    if let Some(c) = hash.chars().find(|&c| alphabet_index(c).is_none()) {
        return Err(GeohashError::InvalidGeohash {
            hash: hash.to_string(),
            reason: format!("character '{}' is not in the geohash alphabet", c),
        });
    }
    Ok(())
}

/// Encodes a geographic point as a geohash string of the given precision.
///
/// # Arguments
///
/// * `lat` - Latitude in degrees (-90.0 to 90.0)
/// * `lon` - Longitude in degrees (-180.0 to 180.0)
/// * `precision` - Number of output characters (1 to 12)
///
/// # Errors
///
/// Returns [`GeohashError::InvalidCoordinate`] for out-of-range coordinates
/// and [`GeohashError::InvalidPrecision`] for precision outside 1-12.
pub fn encode(lat: f64, lon: f64, precision: u8) -> Result<String, GeohashError> {
    validate_precision(precision)?;
    if !(MIN_LAT..=MAX_LAT).contains(&lat) || !(MIN_LON..=MAX_LON).contains(&lon) {
        return Err(GeohashError::InvalidCoordinate { lat, lon });
    }

    let mut bounds = CellBounds::world();
    let mut hash = String::with_capacity(precision as usize);
    let mut symbol: u8 = 0;
    let mut bit = 0;
    // Longitude gets the first bit, then the axes alternate.
    let mut bisect_lon = true;

    while hash.len() < precision as usize {
        symbol <<= 1;
        if bisect_lon {
            let mid = (bounds.lon_min + bounds.lon_max) / 2.0;
            if lon >= mid {
                symbol |= 1;
                bounds.lon_min = mid;
            } else {
                bounds.lon_max = mid;
            }
        } else {
            let mid = (bounds.lat_min + bounds.lat_max) / 2.0;
            if lat >= mid {
                symbol |= 1;
                bounds.lat_min = mid;
            } else {
                bounds.lat_max = mid;
            }
        }
        bisect_lon = !bisect_lon;
        bit += 1;
        if bit == 5 {
            hash.push(ALPHABET[symbol as usize] as char);
            symbol = 0;
            bit = 0;
        }
    }

    Ok(hash)
}

/// Decodes a geohash string into the bounding box it represents.
///
/// Inverse of [`encode`]: each character's 5 bits progressively narrow the
/// longitude and latitude intervals.
///
/// # Errors
///
/// Returns [`GeohashError::InvalidGeohash`] when the string is empty,
/// longer than 12 characters, or contains a character outside the alphabet.
pub fn decode_bounds(hash: &str) -> Result<CellBounds, GeohashError> {
    validate(hash)?;

    let mut bounds = CellBounds::world();
    let mut bisect_lon = true;

    for c in hash.chars() {
        // validate() guarantees the lookup succeeds
        let index = alphabet_index(c).ok_or_else(|| GeohashError::InvalidGeohash {
            hash: hash.to_string(),
            reason: format!("character '{}' is not in the geohash alphabet", c),
        })?;
        for shift in (0..5).rev() {
            let upper_half = (index >> shift) & 1 == 1;
            if bisect_lon {
                let mid = (bounds.lon_min + bounds.lon_max) / 2.0;
                if upper_half {
                    bounds.lon_min = mid;
                } else {
                    bounds.lon_max = mid;
                }
            } else {
                let mid = (bounds.lat_min + bounds.lat_max) / 2.0;
                if upper_half {
                    bounds.lat_min = mid;
                } else {
                    bounds.lat_max = mid;
                }
            }
            bisect_lon = !bisect_lon;
        }
    }

    Ok(bounds)
}

/// Returns the adjacent cell sharing the given edge, at the same precision.
///
/// Longitude wraps at the antimeridian; there is no neighbor past the
/// poles, in which case `Ok(None)` is returned.
pub fn neighbor(hash: &str, direction: Direction) -> Result<Option<String>, GeohashError> {
    let bounds = decode_bounds(hash)?;
    let (lat, lon) = bounds.center();

    let (mut target_lat, mut target_lon) = match direction {
        Direction::North => (lat + bounds.lat_span(), lon),
        Direction::South => (lat - bounds.lat_span(), lon),
        Direction::East => (lat, lon + bounds.lon_span()),
        Direction::West => (lat, lon - bounds.lon_span()),
    };

    if target_lat > MAX_LAT || target_lat < MIN_LAT {
        return Ok(None);
    }
    if target_lon > MAX_LON {
        target_lon -= 360.0;
    } else if target_lon < MIN_LON {
        target_lon += 360.0;
    }
    // Guard against float drift pushing a center outside the valid range
    target_lat = target_lat.clamp(MIN_LAT, MAX_LAT);

    encode(target_lat, target_lon, hash.len() as u8).map(Some)
}
