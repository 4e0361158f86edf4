//! Input geometry parsing and normalization.
//!
//! The coverage engine accepts geometry from two sources: a flat
//! `lat, lon, lat, lon, ...` coordinate string (a pasted ring) and GeoJSON
//! text (an uploaded or drawn shape collection). Both are normalized here
//! into closed `geo` polygons in EPSG:4326. Points and open lines are
//! buffered into small polygons so coverage always operates on areas with
//! a non-empty interior.

use std::collections::HashSet;

use geo::{Centroid, Coord, LineString, Polygon, Rect};
use geojson::GeoJson;
use thiserror::Error;

/// Per-side buffer applied to points and open lines, in degrees.
///
/// Small enough never to span an extra cell even at precision 12.
pub const BUFFER_EPSILON_DEG: f64 = 1e-9;

/// Errors produced while turning raw input into usable polygons.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// Input parsed but yielded no geometry with an interior
    #[error("empty or degenerate geometry: {0}")]
    EmptyOrDegenerateGeometry(String),

    /// Input was not valid GeoJSON
    #[error("failed to parse GeoJSON: {0}")]
    InvalidGeoJson(#[from] geojson::Error),
}

/// Parses a flat `lat, lon, lat, lon, ...` string into a closed polygon ring.
///
/// The ring is closed automatically when the last pair differs from the
/// first. Coordinates are interpreted as latitude first, matching the
/// paste format used by coordinate lists.
///
/// # Errors
///
/// Returns [`GeometryError::EmptyOrDegenerateGeometry`] when the list is
/// empty, has an odd number of values, contains a non-numeric token, or
/// describes fewer than 3 distinct vertices.
pub fn parse_coordinate_ring(text: &str) -> Result<Polygon<f64>, GeometryError> {
    if text.trim().is_empty() {
        return Err(GeometryError::EmptyOrDegenerateGeometry(
            "coordinate list is empty".to_string(),
        ));
    }

    let values = text
        .split(',')
        .map(|token| token.trim().parse::<f64>())
        .collect::<Result<Vec<f64>, _>>()
        .map_err(|_| {
            GeometryError::EmptyOrDegenerateGeometry(
                "coordinate list contains a value that is not a number".to_string(),
            )
        })?;

    if values.len() % 2 != 0 {
        return Err(GeometryError::EmptyOrDegenerateGeometry(format!(
            "coordinate list has {} values; expected an even number of lat,lon pairs",
            values.len()
        )));
    }

    let mut coords: Vec<Coord<f64>> = values
        .chunks(2)
        .map(|pair| Coord {
            x: pair[1],
            y: pair[0],
        })
        .collect();

    let distinct: HashSet<(u64, u64)> = coords
        .iter()
        .map(|c| (c.x.to_bits(), c.y.to_bits()))
        .collect();
    if distinct.len() < 3 {
        return Err(GeometryError::EmptyOrDegenerateGeometry(format!(
            "ring has only {} distinct vertices; at least 3 are required",
            distinct.len()
        )));
    }

    if coords.first() != coords.last() {
        let first = coords[0];
        coords.push(first);
    }

    Ok(Polygon::new(LineString::from(coords), vec![]))
}

/// Reads GeoJSON text and collects every polygon it describes.
///
/// Accepts a FeatureCollection, a single Feature, or a bare Geometry.
/// MultiPolygons are split into their parts; points and lines are buffered
/// via [`BUFFER_EPSILON_DEG`].
pub fn read_geojson(text: &str) -> Result<Vec<Polygon<f64>>, GeometryError> {
    let gj: GeoJson = text.parse()?;
    collect_polygons(&gj)
}

/// Collects every polygon from an already-parsed GeoJSON value.
///
/// # Errors
///
/// Returns [`GeometryError::EmptyOrDegenerateGeometry`] when no usable
/// geometry remains after collection.
pub fn collect_polygons(gj: &GeoJson) -> Result<Vec<Polygon<f64>>, GeometryError> {
    let mut polygons = Vec::new();

    match gj {
        GeoJson::FeatureCollection(fc) => {
            for feature in &fc.features {
                if let Some(geometry) = &feature.geometry {
                    collect_from_geometry(geometry, &mut polygons)?;
                }
            }
        }
        GeoJson::Feature(feature) => {
            if let Some(geometry) = &feature.geometry {
                collect_from_geometry(geometry, &mut polygons)?;
            }
        }
        GeoJson::Geometry(geometry) => collect_from_geometry(geometry, &mut polygons)?,
    }

    if polygons.is_empty() {
        return Err(GeometryError::EmptyOrDegenerateGeometry(
            "input contains no usable geometry".to_string(),
        ));
    }

    Ok(polygons)
}

fn collect_from_geometry(
    geometry: &geojson::Geometry,
    out: &mut Vec<Polygon<f64>>,
) -> Result<(), GeometryError> {
    if let geojson::Value::GeometryCollection(members) = &geometry.value {
        for member in members {
            collect_from_geometry(member, out)?;
        }
        return Ok(());
    }

    let geom = geo::Geometry::<f64>::try_from(geometry.value.clone())?;
    push_geometry(geom, out);
    Ok(())
}

fn push_geometry(geom: geo::Geometry<f64>, out: &mut Vec<Polygon<f64>>) {
    match geom {
        geo::Geometry::Polygon(polygon) => out.push(polygon),
        geo::Geometry::MultiPolygon(multi) => out.extend(multi.0),
        geo::Geometry::Rect(rect) => out.push(rect.to_polygon()),
        geo::Geometry::Triangle(triangle) => out.push(triangle.to_polygon()),
        geo::Geometry::Point(point) => out.push(point_envelope(point.0)),
        geo::Geometry::MultiPoint(points) => {
            out.extend(points.0.into_iter().map(|p| point_envelope(p.0)))
        }
        geo::Geometry::Line(line) => {
            out.extend(line_to_thin_polygon(&LineString::from(vec![
                line.start, line.end,
            ])))
        }
        geo::Geometry::LineString(line) => out.extend(line_to_thin_polygon(&line)),
        geo::Geometry::MultiLineString(lines) => {
            for line in &lines.0 {
                out.extend(line_to_thin_polygon(line));
            }
        }
        geo::Geometry::GeometryCollection(members) => {
            for member in members.0 {
                push_geometry(member, out);
            }
        }
    }
}

/// A tiny square envelope around a single point.
fn point_envelope(c: Coord<f64>) -> Polygon<f64> {
    Rect::new(
        Coord {
            x: c.x - BUFFER_EPSILON_DEG,
            y: c.y - BUFFER_EPSILON_DEG,
        },
        Coord {
            x: c.x + BUFFER_EPSILON_DEG,
            y: c.y + BUFFER_EPSILON_DEG,
        },
    )
    .to_polygon()
}

/// Buffers an open line into a thin polygon by offsetting the vertices
/// north on the way out and south on the way back.
fn line_to_thin_polygon(line: &LineString<f64>) -> Option<Polygon<f64>> {
    match line.0.len() {
        0 => None,
        1 => Some(point_envelope(line.0[0])),
        _ => {
            let mut ring: Vec<Coord<f64>> = line
                .0
                .iter()
                .map(|c| Coord {
                    x: c.x,
                    y: c.y + BUFFER_EPSILON_DEG,
                })
                .collect();
            ring.extend(line.0.iter().rev().map(|c| Coord {
                x: c.x,
                y: c.y - BUFFER_EPSILON_DEG,
            }));
            Some(Polygon::new(LineString::from(ring), vec![]))
        }
    }
}

/// A point guaranteed to describe the polygon's location: the centroid when
/// defined, otherwise the first exterior vertex. Returned as `(lat, lon)`.
pub fn representative_point(polygon: &Polygon<f64>) -> Option<(f64, f64)> {
    polygon
        .centroid()
        .map(|p| (p.y(), p.x()))
        .or_else(|| polygon.exterior().0.first().map(|c| (c.y, c.x)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Area, BoundingRect};

    // The default ring from the original coordinate-paste workflow (Jakarta)
    const JAKARTA_RING: &str = "-6.171046259577523, 106.82269788734317 ,\
        -6.180712281012674, 106.8225072511238 ,\
        -6.180295319024069, 106.83230595281657 ,\
        -6.170894634306194, 106.82952266400855 ,\
        -6.171046259577523, 106.82269788734317";

    #[test]
    fn test_parse_closed_ring() {
        let polygon = parse_coordinate_ring(JAKARTA_RING).unwrap();
        // 5 pairs, already closed
        assert_eq!(polygon.exterior().0.len(), 5);
        assert!(polygon.unsigned_area() > 0.0);
    }

    #[test]
    fn test_parse_auto_closes_open_ring() {
        let polygon = parse_coordinate_ring("0,0, 0,1, 1,1, 1,0").unwrap();
        let exterior = &polygon.exterior().0;
        assert_eq!(exterior.first(), exterior.last());
        assert_eq!(exterior.len(), 5);
    }

    #[test]
    fn test_parse_lat_lon_order() {
        let polygon = parse_coordinate_ring("-6.2,106.8, -6.3,106.8, -6.3,106.9").unwrap();
        let first = polygon.exterior().0[0];
        assert_eq!(first.x, 106.8); // lon
        assert_eq!(first.y, -6.2); // lat
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(matches!(
            parse_coordinate_ring("  ").unwrap_err(),
            GeometryError::EmptyOrDegenerateGeometry(_)
        ));
    }

    #[test]
    fn test_parse_rejects_odd_pair_count() {
        let err = parse_coordinate_ring("1.0, 2.0, 3.0").unwrap_err();
        assert!(err.to_string().contains("even number"));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(parse_coordinate_ring("1.0, abc, 2.0, 3.0").is_err());
    }

    #[test]
    fn test_parse_rejects_too_few_distinct_vertices() {
        let err = parse_coordinate_ring("1,1, 1,1, 2,2, 1,1").unwrap_err();
        assert!(err.to_string().contains("distinct vertices"));
    }

    #[test]
    fn test_read_geojson_polygon() {
        let text = r#"{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,1],[0,0]]]}"#;
        let polygons = read_geojson(text).unwrap();
        assert_eq!(polygons.len(), 1);
        assert!((polygons[0].unsigned_area() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_read_geojson_multipolygon_splits_parts() {
        let text = r#"{"type":"MultiPolygon","coordinates":[
            [[[0,0],[1,0],[1,1],[0,0]]],
            [[[10,10],[11,10],[11,11],[10,10]]]
        ]}"#;
        let polygons = read_geojson(text).unwrap();
        assert_eq!(polygons.len(), 2);
    }

    #[test]
    fn test_read_geojson_feature_collection() {
        let text = r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","properties":{},
             "geometry":{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,0]]]}}
        ]}"#;
        let polygons = read_geojson(text).unwrap();
        assert_eq!(polygons.len(), 1);
    }

    #[test]
    fn test_point_is_buffered() {
        let text = r#"{"type":"Point","coordinates":[106.8,-6.2]}"#;
        let polygons = read_geojson(text).unwrap();
        assert_eq!(polygons.len(), 1);
        let rect = polygons[0].bounding_rect().unwrap();
        assert!(rect.width() <= 2.0 * BUFFER_EPSILON_DEG + 1e-15);
        assert!(polygons[0].unsigned_area() > 0.0);
    }

    #[test]
    fn test_line_is_buffered() {
        let text = r#"{"type":"LineString","coordinates":[[0,0],[0.01,0.01]]}"#;
        let polygons = read_geojson(text).unwrap();
        assert_eq!(polygons.len(), 1);
        assert!(polygons[0].unsigned_area() > 0.0);
    }

    #[test]
    fn test_empty_feature_collection_is_an_error() {
        let text = r#"{"type":"FeatureCollection","features":[]}"#;
        assert!(matches!(
            read_geojson(text).unwrap_err(),
            GeometryError::EmptyOrDegenerateGeometry(_)
        ));
    }

    #[test]
    fn test_invalid_geojson_is_an_error() {
        assert!(matches!(
            read_geojson("{not json").unwrap_err(),
            GeometryError::InvalidGeoJson(_)
        ));
    }

    #[test]
    fn test_representative_point_of_square() {
        let polygon = parse_coordinate_ring("0,0, 0,2, 2,2, 2,0").unwrap();
        let (lat, lon) = representative_point(&polygon).unwrap();
        assert!((lat - 1.0).abs() < 1e-9);
        assert!((lon - 1.0).abs() < 1e-9);
    }
}
