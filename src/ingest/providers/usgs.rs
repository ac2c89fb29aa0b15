// src/ingest/providers/usgs.rs
use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;

use crate::ingest::fetch::fetch_text;
use crate::ingest::types::Earthquake;

/// USGS significant-activity summary, last 7 days, magnitude 2.5+.
pub const USGS_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/2.5_week.geojson";

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    id: String,
    properties: Properties,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Properties {
    mag: Option<f64>,
    place: Option<String>,
    time: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    // [lon, lat, depth_km]
    coordinates: Vec<f64>,
}

/// Parse the GeoJSON summary document, preserving feed order. Features
/// without a magnitude or a full coordinate triple are skipped.
pub fn parse_usgs(json: &str) -> Result<Vec<Earthquake>> {
    let fc: FeatureCollection = serde_json::from_str(json).context("parsing usgs geojson")?;
    let mut out = Vec::with_capacity(fc.features.len());
    for f in fc.features {
        let Some(mag) = f.properties.mag else { continue };
        let [lon, lat, depth] = f.geometry.coordinates[..] else {
            continue;
        };
        out.push(Earthquake {
            id: f.id,
            magnitude: mag,
            place: f.properties.place.unwrap_or_default(),
            time_ms: f.properties.time.unwrap_or_default(),
            lon,
            lat,
            depth_km: depth,
        });
    }
    Ok(out)
}

/// Fetch a GeoJSON quake feed; callers degrade to empty on error.
pub async fn fetch_earthquakes(client: &Client, url: &str) -> Result<Vec<Earthquake>> {
    let body = fetch_text(client, url).await?;
    parse_usgs(&body)
}
