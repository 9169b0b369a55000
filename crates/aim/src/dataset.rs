//! The static geographic point dataset behind the map page's markers.
//!
//! The dataset is a GeoJSON-shaped file: a `features` sequence where every
//! feature carries a coordinate pair and a `location` label property. It is
//! fetched once per map-page entry, from disk or over HTTP, on a background
//! thread so the UI never blocks on it.

use std::path::{Path, PathBuf};
use std::sync::mpsc;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::geo::Point;

/// One marker on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct PointOfInterest {
    pub name: String,
    pub point: Point,
}

/// Where the dataset lives. HTTP(S) strings become URL fetches, everything
/// else is treated as a file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    File(PathBuf),
    Url(String),
}

impl DatasetSource {
    pub fn from_config(value: &str) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            DatasetSource::Url(value.to_string())
        } else {
            DatasetSource::File(PathBuf::from(value))
        }
    }
}

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    geometry: Geometry,
    properties: Properties,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    /// `[lng, lat]`, GeoJSON axis order.
    coordinates: [f64; 2],
}

#[derive(Debug, Deserialize)]
struct Properties {
    location: String,
}

/// Decode a dataset document into points of interest.
pub fn parse(json: &str) -> Result<Vec<PointOfInterest>> {
    let collection: FeatureCollection =
        serde_json::from_str(json).context("geographic dataset is not valid GeoJSON")?;
    Ok(collection
        .features
        .into_iter()
        .map(|f| PointOfInterest {
            name: f.properties.location,
            point: Point {
                lng: f.geometry.coordinates[0],
                lat: f.geometry.coordinates[1],
            },
        })
        .collect())
}

fn load_file(path: &Path) -> Result<Vec<PointOfInterest>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset {}", path.display()))?;
    parse(&contents)
}

fn load_url(url: &str) -> Result<Vec<PointOfInterest>> {
    let mut response = ureq::get(url)
        .call()
        .with_context(|| format!("failed to fetch dataset {url}"))?;
    let body = response
        .body_mut()
        .read_to_string()
        .with_context(|| format!("failed to read dataset body from {url}"))?;
    parse(&body)
}

pub fn load(source: &DatasetSource) -> Result<Vec<PointOfInterest>> {
    match source {
        DatasetSource::File(path) => load_file(path),
        DatasetSource::Url(url) => load_url(url),
    }
}

/// Load the dataset off the UI thread. The receiver yields exactly one
/// message; dropping it simply discards the in-flight read.
pub fn spawn_load(source: DatasetSource) -> mpsc::Receiver<Result<Vec<PointOfInterest>, String>> {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let result = load(&source).map_err(|e| format!("{e:#}"));
        match &result {
            Ok(pois) => tracing::info!(count = pois.len(), "loaded geographic dataset"),
            Err(message) => tracing::warn!(%message, "geographic dataset unavailable"),
        }
        // The page may have been left already; a closed channel is fine.
        let _ = tx.send(result);
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [-75.1640, 40.1411] },
                "properties": { "location": "Woodland Building" }
            },
            {
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [-75.1664, 40.1399] },
                "properties": { "location": "Sutherland Building" }
            }
        ]
    }"#;

    #[test]
    fn parses_features_with_coordinates_and_location_labels() {
        let pois = parse(SAMPLE).expect("sample parses");
        assert_eq!(pois.len(), 2);
        assert_eq!(pois[0].name, "Woodland Building");
        assert_eq!(pois[0].point.lng, -75.1640);
        assert_eq!(pois[1].point.lat, 40.1399);
    }

    #[test]
    fn malformed_documents_error_instead_of_panicking() {
        assert!(parse("not json").is_err());
        assert!(parse("{}").is_err());
        assert!(parse(r#"{"features":[{"geometry":{"coordinates":[1.0]}}]}"#).is_err());
    }

    #[test]
    fn empty_feature_lists_are_valid() {
        let pois = parse(r#"{"features":[]}"#).expect("empty is fine");
        assert!(pois.is_empty());
    }

    #[test]
    fn source_classification_splits_urls_from_paths() {
        assert_eq!(
            DatasetSource::from_config("https://example.org/data.json"),
            DatasetSource::Url("https://example.org/data.json".to_string())
        );
        assert_eq!(
            DatasetSource::from_config("assets/campus_locations.json"),
            DatasetSource::File(PathBuf::from("assets/campus_locations.json"))
        );
    }
}
