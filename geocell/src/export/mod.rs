//! Export of coverage results and GeoJSON coordinate extraction.
//!
//! Produces the three download formats the tool offers: CSV rows of
//! `(geohash, WKT geometry)`, a GeoJSON FeatureCollection of cell
//! polygons, and a plain comma-joined geohash list. Also extracts
//! per-feature coordinate strings from arbitrary GeoJSON for the
//! coordinates-to-CSV workflow.

use std::fmt;
use std::str::FromStr;

use geojson::GeoJson;
use thiserror::Error;
use wkt::ToWkt;

use crate::cells::{cell_polygon, cells_to_feature_collection};
use crate::geohash::GeohashError;

/// Output format for a coverage result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// CSV rows of geohash and WKT geometry
    Csv,
    /// GeoJSON FeatureCollection of cell polygons
    GeoJson,
    /// Comma-joined geohash list
    List,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::GeoJson => write!(f, "geojson"),
            ExportFormat::List => write!(f, "list"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "geojson" => Ok(ExportFormat::GeoJson),
            "list" | "txt" => Ok(ExportFormat::List),
            other => Err(format!(
                "unknown export format '{}': expected 'csv', 'geojson' or 'list'",
                other
            )),
        }
    }
}

/// Errors produced while serializing output.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A geohash in the set failed to decode
    #[error(transparent)]
    Geohash(#[from] GeohashError),

    /// CSV serialization failed
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    /// CSV buffer flush failed
    #[error("failed to flush CSV output: {0}")]
    Io(#[from] std::io::Error),

    /// CSV output was not valid UTF-8
    #[error("CSV output was not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// A feature is missing the requested name property
    #[error("feature {feature} has no '{property}' property")]
    MissingProperty { property: String, feature: usize },
}

/// Serializes cells in the requested format.
pub fn export_cells(cells: &[String], format: ExportFormat) -> Result<String, ExportError> {
    match format {
        ExportFormat::Csv => cells_to_csv(cells),
        ExportFormat::GeoJson => cells_to_geojson(cells),
        ExportFormat::List => Ok(cells_to_list(cells)),
    }
}

/// CSV with a `geohash,geometry` header and one WKT polygon per cell.
pub fn cells_to_csv(cells: &[String]) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buf);
        writer.write_record(["geohash", "geometry"])?;
        for cell in cells {
            let polygon = cell_polygon(cell)?;
            writer.write_record([cell.as_str(), &polygon.wkt_string()])?;
        }
        writer.flush()?;
    }
    Ok(String::from_utf8(buf)?)
}

/// GeoJSON FeatureCollection string of cell polygons.
pub fn cells_to_geojson(cells: &[String]) -> Result<String, ExportError> {
    let fc = cells_to_feature_collection(cells)?;
    Ok(GeoJson::from(fc).to_string())
}

/// Comma-joined geohash list, no spaces.
pub fn cells_to_list(cells: &[String]) -> String {
    cells.join(",")
}

/// Extracts per-feature coordinate strings from GeoJSON.
///
/// Each row pairs a feature name (taken from `name_property` when given,
/// otherwise `feature_<index>`) with every coordinate of its geometry as a
/// flat `lat,lon,lat,lon,...` string. Features sharing a name are merged
/// into one row, preserving input order.
pub fn feature_coordinate_rows(
    gj: &GeoJson,
    name_property: Option<&str>,
) -> Result<Vec<(String, String)>, ExportError> {
    let features: Vec<&geojson::Feature> = match gj {
        GeoJson::FeatureCollection(fc) => fc.features.iter().collect(),
        GeoJson::Feature(feature) => vec![feature],
        GeoJson::Geometry(_) => Vec::new(),
    };

    let mut order: Vec<String> = Vec::new();
    let mut grouped: std::collections::HashMap<String, Vec<String>> =
        std::collections::HashMap::new();

    for (index, feature) in features.iter().enumerate() {
        let name = match name_property {
            Some(property) => feature
                .properties
                .as_ref()
                .and_then(|props| props.get(property))
                .map(|value| match value {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .ok_or_else(|| ExportError::MissingProperty {
                    property: property.to_string(),
                    feature: index,
                })?,
            None => format!("feature_{}", index),
        };

        let mut pairs = Vec::new();
        if let Some(geometry) = &feature.geometry {
            collect_positions(&geometry.value, &mut pairs);
        }
        if pairs.is_empty() {
            continue;
        }

        if !grouped.contains_key(&name) {
            order.push(name.clone());
        }
        grouped.entry(name).or_default().extend(pairs);
    }

    Ok(order
        .into_iter()
        .map(|name| {
            let pairs = grouped.remove(&name).unwrap_or_default();
            (name, pairs.join(","))
        })
        .collect())
}

/// CSV with a `name,coordinates` header from extracted rows.
pub fn coordinate_rows_to_csv(rows: &[(String, String)]) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buf);
        writer.write_record(["name", "coordinates"])?;
        for (name, coordinates) in rows {
            writer.write_record([name.as_str(), coordinates.as_str()])?;
        }
        writer.flush()?;
    }
    Ok(String::from_utf8(buf)?)
}

/// Walks a GeoJSON geometry and appends every position as `lat,lon`.
fn collect_positions(value: &geojson::Value, out: &mut Vec<String>) {
    use geojson::Value;

    fn push(position: &[f64], out: &mut Vec<String>) {
        if position.len() >= 2 {
            out.push(format!("{},{}", position[1], position[0]));
        }
    }

    match value {
        Value::Point(p) => push(p, out),
        Value::MultiPoint(points) | Value::LineString(points) => {
            for p in points {
                push(p, out);
            }
        }
        Value::MultiLineString(lines) | Value::Polygon(lines) => {
            for p in lines.iter().flatten() {
                push(p, out);
            }
        }
        Value::MultiPolygon(polygons) => {
            for p in polygons.iter().flatten().flatten() {
                push(p, out);
            }
        }
        Value::GeometryCollection(members) => {
            for member in members {
                collect_positions(&member.value, out);
            }
        }
    }
}
