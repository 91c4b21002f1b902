//! One fetcher per emergency data source.
//!
//! Every fetcher returns a [`FetchResult`] so callers can tell a
//! failed fetch from a source with nothing to report. The aggregated feeds collapse
//! errors into empty collections with [`collapse`].

pub mod bushfire;
pub mod dea_hotspot;
pub mod download;
mod html;
pub mod myfirewatch;
pub mod nbn;
pub mod western_power;

use geojson::FeatureCollection;
use serde::Deserialize;

use crate::{
    config::Config,
    overlay::{
        feature::features_to_collection,
        layer::Layer,
        location::{Location, Locator},
    },
};

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Unexpected HTTP status {0}")]
    Status(reqwest::StatusCode),
    #[error("Malformed JSON response: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unexpected response format: {0}")]
    Format(String),
    #[error("Invalid CSS selector: {0}")]
    Selector(String),
}

pub type FetchResult = Result<FeatureCollection, FetchError>;

/// Point geometry of a record in a GeoJSON source feed.
#[derive(Deserialize, Debug)]
struct SourceGeometry {
    coordinates: Vec<f64>,
}

impl SourceGeometry {
    /// Longitude and latitude are the first two coordinates; any altitude is dropped.
    fn location(&self) -> Result<Location, FetchError> {
        match self.coordinates.as_slice() {
            [lon, lat, ..] => Ok(Location {
                lon: *lon,
                lat: *lat,
            }),
            _ => Err(FetchError::Format(format!(
                "Expected at least 2 coordinates, got {:?}",
                self.coordinates
            ))),
        }
    }
}

/// What a fetcher needs to reach its source and place its records.
pub struct SourceContext {
    pub client: reqwest::blocking::Client,
    pub locator: Locator,
}

impl SourceContext {
    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        Ok(Self {
            client: download::build_client(config.timeout())?,
            locator: Locator::new(config.placeholder),
        })
    }
}

/// Run the fetcher for `layer` against the sources named in `config`.
pub fn fetch_layer(layer: Layer, context: &SourceContext, config: &Config) -> FetchResult {
    let urls = &config.sources;
    match layer {
        Layer::Bushfire => bushfire::fetch_bushfire_incidents(&context.client, &urls.bushfire_url),
        Layer::SatelliteHotspot => {
            dea_hotspot::fetch_dea_hotspots(&context.client, &urls.dea_hotspot_url)
        }
        Layer::FireWatch => myfirewatch::fetch_myfirewatch_hotspots(),
        Layer::NetworkOutage => {
            nbn::scrape_nbn_outage(&context.client, &urls.nbn_url, &context.locator)
        }
        Layer::PowerOutage => western_power::scrape_western_power_outage(
            &context.client,
            &urls.power_url,
            &context.locator,
        ),
    }
}

/// Turn a failed fetch into an empty collection, logging the reason.
pub fn collapse(layer: Layer, result: FetchResult) -> FeatureCollection {
    match result {
        Ok(collection) => {
            log::info!("Fetched {} {} features", collection.features.len(), layer);
            collection
        }
        Err(err) => {
            log::warn!("Error fetching {}: {}", layer, err);
            features_to_collection(vec![])
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::overlay::{feature::point_feature, location::PERTH_CENTER};

    #[rstest]
    fn test_collapse_keeps_successful_collection() {
        let collection = features_to_collection(vec![point_feature(
            PERTH_CENTER,
            geojson::JsonObject::new(),
            Layer::PowerOutage,
        )]);
        assert_eq!(
            collapse(Layer::PowerOutage, Ok(collection.clone())),
            collection
        );
    }

    #[rstest]
    #[case(FetchError::Status(reqwest::StatusCode::BAD_GATEWAY))]
    #[case(FetchError::Format("no features".to_string()))]
    fn test_collapse_error_is_empty(#[case] err: FetchError) {
        assert!(collapse(Layer::Bushfire, Err(err)).features.is_empty());
    }
}
