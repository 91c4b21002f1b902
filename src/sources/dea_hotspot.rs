use geojson::{JsonObject, JsonValue};
use reqwest::blocking::Client;
use serde::Deserialize;

use super::{download::download_text, FetchError, FetchResult, SourceGeometry};
use crate::overlay::{
    feature::{features_to_collection, point_feature},
    layer::Layer,
};

#[derive(Deserialize, Debug)]
struct HotspotFeed {
    features: Vec<Hotspot>,
}

#[derive(Deserialize, Debug)]
struct Hotspot {
    geometry: SourceGeometry,
    properties: HotspotProperties,
}

#[derive(Deserialize, Debug)]
struct HotspotProperties {
    satellite_sensor: JsonValue,
    acquisition_time: JsonValue,
    fire_radiative_power: Option<JsonValue>,
    confidence: Option<JsonValue>,
}

/// Satellite hotspots from the Digital Earth Australia WFS endpoint.
pub fn fetch_dea_hotspots(client: &Client, url: &str) -> FetchResult {
    let body = download_text(client, url)?;
    parse_hotspots(&body)
}

fn parse_hotspots(body: &str) -> FetchResult {
    let feed: HotspotFeed = serde_json::from_str(body)?;
    let features = feed
        .features
        .into_iter()
        .map(|hotspot| {
            let location = hotspot.geometry.location()?;
            let props = hotspot.properties;
            let mut properties = JsonObject::new();
            properties.insert("sat_sensor".to_string(), props.satellite_sensor);
            properties.insert("acq_time".to_string(), props.acquisition_time);
            properties.insert(
                "f_radiative_power".to_string(),
                props.fire_radiative_power.unwrap_or(JsonValue::Null),
            );
            properties.insert(
                "confidence".to_string(),
                props.confidence.unwrap_or(JsonValue::Null),
            );
            Ok(point_feature(location, properties, Layer::SatelliteHotspot))
        })
        .collect::<Result<Vec<_>, FetchError>>()?;
    Ok(features_to_collection(features))
}
