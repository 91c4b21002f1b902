use geojson::{JsonObject, JsonValue};
use reqwest::blocking::Client;
use serde::Deserialize;

use super::{download::download_text, FetchResult, SourceGeometry};
use crate::overlay::{
    feature::{features_to_collection, point_feature},
    layer::Layer,
};

#[derive(Deserialize, Debug)]
struct IncidentFeed {
    features: Vec<Incident>,
}

#[derive(Deserialize, Debug)]
struct Incident {
    geometry: SourceGeometry,
    properties: IncidentProperties,
}

#[derive(Deserialize, Debug)]
struct IncidentProperties {
    incident_name: JsonValue,
    alert_level: Option<JsonValue>,
    status: Option<JsonValue>,
    incident_type: Option<JsonValue>,
    created_date: Option<JsonValue>,
    updated_date: Option<JsonValue>,
}

/// Missing and null values both read as "Unknown".
fn or_unknown(value: Option<JsonValue>) -> JsonValue {
    match value {
        Some(JsonValue::Null) | None => JsonValue::from("Unknown"),
        Some(value) => value,
    }
}

/// Current DFES incidents from the Emergency WA incident map feed.
pub fn fetch_bushfire_incidents(client: &Client, url: &str) -> FetchResult {
    let body = download_text(client, url)?;
    parse_incidents(&body)
}

fn parse_incidents(body: &str) -> FetchResult {
    let feed: IncidentFeed = serde_json::from_str(body)?;
    let mut features = Vec::with_capacity(feed.features.len());
    for incident in feed.features {
        let location = incident.geometry.location()?;
        let props = incident.properties;
        let mut properties = JsonObject::new();
        properties.insert("title".to_string(), props.incident_name);
        properties.insert("severity".to_string(), or_unknown(props.alert_level));
        properties.insert("status".to_string(), or_unknown(props.status));
        properties.insert("type".to_string(), or_unknown(props.incident_type));
        properties.insert(
            "created".to_string(),
            props.created_date.unwrap_or(JsonValue::Null),
        );
        properties.insert(
            "updated".to_string(),
            props.updated_date.unwrap_or(JsonValue::Null),
        );
        features.push(point_feature(location, properties, Layer::Bushfire));
    }
    Ok(features_to_collection(features))
}
