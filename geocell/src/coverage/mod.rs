//! Coverage generator
//!
//! Computes the set of geohash cells at a requested precision that
//! represents a polygon's area. The candidate grid is enumerated by
//! walking cells across the geometry's bounding box with exact
//! [`neighbor`](crate::geohash::neighbor) steps (no floating-point
//! accumulation), then each candidate is kept or discarded by the
//! containment policy. Walking the full box makes the result complete for
//! concave polygons and for multipolygons with disconnected parts.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use geo::{Area, BoundingRect, Contains, Coord, Intersects, Polygon, Rect};
use tracing::debug;

use crate::geohash::{
    self, decode_bounds, encode, neighbor, validate_precision, Direction, GeohashError,
};
use crate::geometry::representative_point;

/// Containment rule deciding whether boundary-straddling cells belong to
/// the coverage.
///
/// Has no `Default`: every call site states its policy, so two equivalent
/// invocations can never silently disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoveragePolicy {
    /// Keep only cells whose box is entirely inside the polygon
    Inner,
    /// Keep every cell whose box touches the polygon at all
    Outer,
}

impl fmt::Display for CoveragePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoveragePolicy::Inner => write!(f, "inner"),
            CoveragePolicy::Outer => write!(f, "outer"),
        }
    }
}

impl FromStr for CoveragePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "inner" => Ok(CoveragePolicy::Inner),
            "outer" => Ok(CoveragePolicy::Outer),
            other => Err(format!(
                "unknown coverage policy '{}': expected 'inner' or 'outer'",
                other
            )),
        }
    }
}

/// Knobs for a coverage run.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoverageOptions {
    /// Ceiling on the candidate cell count. Exceeding it fails the run
    /// with [`CoverageError::CoverageTooLarge`] instead of grinding
    /// through an unbounded grid.
    pub max_cells: Option<usize>,
}

impl CoverageOptions {
    /// Options with a cell ceiling.
    pub fn with_max_cells(max_cells: usize) -> Self {
        Self {
            max_cells: Some(max_cells),
        }
    }
}

/// Errors produced by a coverage run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoverageError {
    /// Codec failure (out-of-range coordinate, bad precision)
    #[error(transparent)]
    Geohash(#[from] GeohashError),

    /// Candidate grid exceeds the configured ceiling
    #[error("coverage would span {cells} cells, exceeding the maximum of {max}; lower the precision or raise the ceiling")]
    CoverageTooLarge { cells: usize, max: usize },
}

/// Computes the geohash coverage of a single polygon.
///
/// The result is deduplicated and ordered west-to-east, south-to-north, so
/// identical inputs produce identical output. A zero-area polygon yields an
/// empty set under [`CoveragePolicy::Inner`] and the single cell containing
/// its representative point under [`CoveragePolicy::Outer`].
///
/// Candidates are the half-open cell grid over the polygon's bounding box:
/// a cell is a candidate only when its interior overlaps the box. Cells
/// outside the box that touch it along an edge or corner alone are never
/// candidates, so a polygon exactly tiling a set of cells yields those
/// cells and no surrounding ring of edge-contact neighbors.
pub fn cover_polygon(
    polygon: &Polygon<f64>,
    precision: u8,
    policy: CoveragePolicy,
    options: &CoverageOptions,
) -> Result<Vec<String>, CoverageError> {
    validate_precision(precision)?;

    if polygon.unsigned_area() == 0.0 {
        return match policy {
            CoveragePolicy::Inner => Ok(Vec::new()),
            CoveragePolicy::Outer => match representative_point(polygon) {
                Some((lat, lon)) => Ok(vec![encode(lat, lon, precision)?]),
                None => Ok(Vec::new()),
            },
        };
    }

    let rect = match polygon.bounding_rect() {
        Some(rect) => rect,
        None => return Ok(Vec::new()),
    };

    enforce_cell_ceiling(&rect, precision, options)?;

    let mut cells = Vec::new();
    let mut seen = HashSet::new();
    let mut row_start = encode(rect.min().y, rect.min().x, precision)?;

    loop {
        let mut cell = row_start.clone();
        loop {
            let bounds = decode_bounds(&cell)?;
            if cell_matches(&bounds_to_rect(&bounds), polygon, policy)
                && seen.insert(cell.clone())
            {
                cells.push(cell.clone());
            }
            if bounds.lon_max >= rect.max().x {
                break;
            }
            match neighbor(&cell, Direction::East)? {
                Some(next) => cell = next,
                None => break,
            }
        }

        let row_bounds = decode_bounds(&row_start)?;
        if row_bounds.lat_max >= rect.max().y {
            break;
        }
        match neighbor(&row_start, Direction::North)? {
            Some(next) => row_start = next,
            None => break,
        }
    }

    debug!(
        precision,
        policy = %policy,
        cells = cells.len(),
        "computed polygon coverage"
    );

    Ok(cells)
}

/// Computes the geohash coverage of a polygon collection.
///
/// Covers each polygon independently and unions the results, preserving
/// scan order of first appearance. This is how multipolygon input is
/// handled: per-part runs, then a deduplicated union.
pub fn cover(
    polygons: &[Polygon<f64>],
    precision: u8,
    policy: CoveragePolicy,
    options: &CoverageOptions,
) -> Result<Vec<String>, CoverageError> {
    let mut out = Vec::new();
    let mut seen = HashSet::new();

    for polygon in polygons {
        for cell in cover_polygon(polygon, precision, policy, options)? {
            if seen.insert(cell.clone()) {
                out.push(cell);
            }
        }
        if let Some(max) = options.max_cells {
            if out.len() > max {
                return Err(CoverageError::CoverageTooLarge {
                    cells: out.len(),
                    max,
                });
            }
        }
    }

    Ok(out)
}

/// Fails fast when the candidate grid over the bounding box would exceed
/// the configured ceiling, before any containment test runs.
fn enforce_cell_ceiling(
    rect: &Rect<f64>,
    precision: u8,
    options: &CoverageOptions,
) -> Result<(), CoverageError> {
    let max = match options.max_cells {
        Some(max) => max,
        None => return Ok(()),
    };

    let origin = encode(rect.min().y, rect.min().x, precision)?;
    let bounds = decode_bounds(&origin)?;
    let cols = ((rect.max().x - bounds.lon_min) / bounds.lon_span()).floor() as u128 + 1;
    let rows = ((rect.max().y - bounds.lat_min) / bounds.lat_span()).floor() as u128 + 1;
    let candidates = cols.saturating_mul(rows);

    if candidates > max as u128 {
        return Err(CoverageError::CoverageTooLarge {
            cells: candidates.min(usize::MAX as u128) as usize,
            max,
        });
    }
    Ok(())
}

fn bounds_to_rect(bounds: &geohash::CellBounds) -> Polygon<f64> {
    Rect::new(
        Coord {
            x: bounds.lon_min,
            y: bounds.lat_min,
        },
        Coord {
            x: bounds.lon_max,
            y: bounds.lat_max,
        },
    )
    .to_polygon()
}

fn cell_matches(cell: &Polygon<f64>, polygon: &Polygon<f64>, policy: CoveragePolicy) -> bool {
    match policy {
        CoveragePolicy::Outer => polygon.intersects(cell),
        CoveragePolicy::Inner => polygon.contains(cell),
    }
}
