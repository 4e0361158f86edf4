//! Cell-to-geometry mapper
//!
//! Reconstructs the rectangular polygon of each geohash cell for rendering
//! and export. Pure per-cell functions over [`decode_bounds`]; no shared
//! state.

use geo::{Coord, Polygon, Rect};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::json;

use crate::geohash::{decode_bounds, CellBounds, GeohashError};

/// The rectangle polygon of a single geohash cell.
pub fn cell_polygon(hash: &str) -> Result<Polygon<f64>, GeohashError> {
    let bounds = decode_bounds(hash)?;
    Ok(Rect::new(
        Coord {
            x: bounds.lon_min,
            y: bounds.lat_min,
        },
        Coord {
            x: bounds.lon_max,
            y: bounds.lat_max,
        },
    )
    .to_polygon())
}

/// Builds a GeoJSON FeatureCollection with one Feature per cell.
///
/// Each feature carries `geohash` (string) and `precision` (integer, the
/// string length) properties and a Polygon geometry whose exterior is a
/// closed 5-point ring in `[lon, lat]` order.
pub fn cells_to_feature_collection(
    cells: &[String],
) -> Result<FeatureCollection, GeohashError> {
    let mut features = Vec::with_capacity(cells.len());

    for cell in cells {
        let bounds = decode_bounds(cell)?;
        let ring = closed_ring(&bounds);

        let mut properties = JsonObject::new();
        properties.insert("geohash".to_string(), json!(cell));
        properties.insert("precision".to_string(), json!(cell.len()));

        features.push(Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::Polygon(vec![ring]))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        });
    }

    Ok(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}

/// Center of the union bounding box of a cell set, as `(lat, lon)`.
///
/// Used to center a map view on the set; `None` for an empty set.
pub fn cell_set_center(cells: &[String]) -> Result<Option<(f64, f64)>, GeohashError> {
    let mut union: Option<CellBounds> = None;

    for cell in cells {
        let bounds = decode_bounds(cell)?;
        union = Some(match union {
            None => bounds,
            Some(u) => CellBounds {
                lat_min: u.lat_min.min(bounds.lat_min),
                lat_max: u.lat_max.max(bounds.lat_max),
                lon_min: u.lon_min.min(bounds.lon_min),
                lon_max: u.lon_max.max(bounds.lon_max),
            },
        });
    }

    Ok(union.map(|u| u.center()))
}

/// SW → SE → NE → NW → SW exterior ring, `[lon, lat]` order.
fn closed_ring(bounds: &CellBounds) -> Vec<Vec<f64>> {
    vec![
        vec![bounds.lon_min, bounds.lat_min],
        vec![bounds.lon_max, bounds.lat_min],
        vec![bounds.lon_max, bounds.lat_max],
        vec![bounds.lon_min, bounds.lat_max],
        vec![bounds.lon_min, bounds.lat_min],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geohash::{encode, neighbor, Direction};
    use geo::{Area, Intersects};

    #[test]
    fn test_cell_polygon_is_closed_rectangle() {
        let polygon = cell_polygon("qqguyu7").unwrap();
        let exterior = &polygon.exterior().0;
        assert_eq!(exterior.first(), exterior.last());
        assert!(polygon.unsigned_area() > 0.0);
    }

    #[test]
    fn test_cell_polygon_rejects_invalid_hash() {
        assert!(cell_polygon("nope!").is_err());
        assert!(cell_polygon("").is_err());
    }

    #[test]
    fn test_feature_collection_shape() {
        let cells = vec!["qqguyu7".to_string(), "qqguyur".to_string()];
        let fc = cells_to_feature_collection(&cells).unwrap();
        assert_eq!(fc.features.len(), 2);

        let feature = &fc.features[0];
        let props = feature.properties.as_ref().unwrap();
        assert_eq!(props["geohash"], "qqguyu7");
        assert_eq!(props["precision"], 7);

        match &feature.geometry.as_ref().unwrap().value {
            Value::Polygon(rings) => {
                assert_eq!(rings.len(), 1);
                assert_eq!(rings[0].len(), 5);
                assert_eq!(rings[0].first(), rings[0].last());
            }
            other => panic!("expected Polygon, got {:?}", other),
        }
    }

    #[test]
    fn test_distinct_cells_have_disjoint_interiors() {
        // Same-precision cells tile the plane: shrinking each rectangle
        // slightly, no two may intersect.
        let base = encode(-6.2, 106.8, 6).unwrap();
        let east = neighbor(&base, Direction::East).unwrap().unwrap();
        let north = neighbor(&base, Direction::North).unwrap().unwrap();

        let shrink = |hash: &str| {
            let b = decode_bounds(hash).unwrap();
            let eps_x = b.lon_span() * 1e-6;
            let eps_y = b.lat_span() * 1e-6;
            geo::Rect::new(
                Coord {
                    x: b.lon_min + eps_x,
                    y: b.lat_min + eps_y,
                },
                Coord {
                    x: b.lon_max - eps_x,
                    y: b.lat_max - eps_y,
                },
            )
            .to_polygon()
        };

        assert!(!shrink(&base).intersects(&shrink(&east)));
        assert!(!shrink(&base).intersects(&shrink(&north)));
        assert!(!shrink(&east).intersects(&shrink(&north)));
    }

    #[test]
    fn test_adjacent_cells_share_an_edge() {
        let base = encode(-6.2, 106.8, 6).unwrap();
        let east = neighbor(&base, Direction::East).unwrap().unwrap();
        let a = cell_polygon(&base).unwrap();
        let b = cell_polygon(&east).unwrap();
        // Unshrunk rectangles touch along the shared edge
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_center_of_single_cell() {
        let cells = vec![encode(10.0, 20.0, 5).unwrap()];
        let (lat, lon) = cell_set_center(&cells).unwrap().unwrap();
        let bounds = decode_bounds(&cells[0]).unwrap();
        assert_eq!((lat, lon), bounds.center());
    }

    #[test]
    fn test_center_of_empty_set() {
        assert_eq!(cell_set_center(&[]).unwrap(), None);
    }

    #[test]
    fn test_center_spans_all_cells() {
        let a = encode(0.0, 0.0, 4).unwrap();
        let b = encode(10.0, 10.0, 4).unwrap();
        let (lat, lon) = cell_set_center(&[a, b]).unwrap().unwrap();
        assert!(lat > 0.0 && lat < 10.0);
        assert!(lon > 0.0 && lon < 10.0);
    }
}
