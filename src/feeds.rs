use std::collections::BTreeMap;

use geojson::FeatureCollection;
use rayon::prelude::*;

use crate::{
    config::Config,
    overlay::{feature::features_to_collection, layer::Layer},
    sources::{collapse, fetch_layer, FetchResult, SourceContext},
};

/// Every layer mapped to its current collection, empty for layers that failed.
pub type Feeds = BTreeMap<Layer, FeatureCollection>;

/// Fetch all layers from the public sources with default settings.
pub fn fetch_all_feeds() -> Feeds {
    fetch_all_feeds_with(&Config::default())
}

/// Fetch all layers as configured. Never fails: a source that cannot be fetched or
/// parsed yields an empty collection.
pub fn fetch_all_feeds_with(config: &Config) -> Feeds {
    let context = match SourceContext::from_config(config) {
        Ok(context) => context,
        Err(err) => {
            log::error!("Could not set up HTTP client: {}", err);
            return empty_feeds();
        }
    };
    fetch_outcomes(&context, config)
        .into_iter()
        .map(|(layer, result)| (layer, collapse(layer, result)))
        .collect()
}

/// Fetch all layers, keeping the reason for each failure.
pub fn fetch_outcomes(
    context: &SourceContext,
    config: &Config,
) -> BTreeMap<Layer, FetchResult> {
    if config.parallel {
        Layer::ALL
            .par_iter()
            .map(|layer| (*layer, fetch_layer(*layer, context, config)))
            .collect()
    } else {
        Layer::ALL
            .iter()
            .map(|layer| (*layer, fetch_layer(*layer, context, config)))
            .collect()
    }
}

fn empty_feeds() -> Feeds {
    Layer::ALL
        .into_iter()
        .map(|layer| (layer, features_to_collection(vec![])))
        .collect()
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::{config::SourceUrls, sources::FetchError};

    fn unreachable_config(parallel: bool) -> Config {
        let dead = "http://127.0.0.1:9";
        Config {
            timeout_secs: 2,
            parallel,
            sources: SourceUrls {
                bushfire_url: format!("{dead}/incidents.json"),
                dea_hotspot_url: format!("{dead}/wfs"),
                nbn_url: format!("{dead}/network-status"),
                power_url: format!("{dead}/outages/"),
            },
            ..Config::default()
        }
    }

    #[rstest]
    #[case(false)]
    #[case(true)]
    fn test_all_sources_failing_gives_five_empty_layers(#[case] parallel: bool) {
        let feeds = fetch_all_feeds_with(&unreachable_config(parallel));
        assert_eq!(feeds.keys().copied().collect::<Vec<_>>(), Layer::ALL.to_vec());
        assert!(feeds.values().all(|collection| collection.features.is_empty()));
    }

    #[rstest]
    fn test_outcomes_keep_failure_reasons() {
        let config = unreachable_config(false);
        let context = SourceContext::from_config(&config).unwrap();
        let outcomes = fetch_outcomes(&context, &config);
        assert_eq!(outcomes.len(), 5);
        assert!(matches!(outcomes[&Layer::Bushfire], Err(FetchError::Network(_))));
        assert!(matches!(outcomes[&Layer::PowerOutage], Err(FetchError::Network(_))));
        assert!(outcomes[&Layer::FireWatch].is_ok());
    }

    #[rstest]
    #[case(false)]
    #[case(true)]
    fn test_one_source_failing_leaves_others(#[case] parallel: bool) {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/incidents.json");
            then.status(200).body(
                json!({"features": [{
                    "geometry": {"coordinates": [115.9, -31.9]},
                    "properties": {"incident_name": "Bushfire - Bullsbrook"}
                }]})
                .to_string(),
            );
        });
        server.mock(|when, then| {
            when.method(GET).path("/wfs");
            then.status(200).body("not json");
        });
        server.mock(|when, then| {
            when.method(GET).path("/outages/");
            then.status(200).body(
                r#"<div class="outage-item"><span class="suburb">Mundaring</span></div>"#,
            );
        });
        server.mock(|when, then| {
            when.method(GET).path("/network-status");
            then.status(404);
        });

        let config = Config {
            timeout_secs: 5,
            parallel,
            sources: SourceUrls {
                bushfire_url: server.url("/incidents.json"),
                dea_hotspot_url: server.url("/wfs"),
                nbn_url: server.url("/network-status"),
                power_url: server.url("/outages/"),
            },
            ..Config::default()
        };
        let feeds = fetch_all_feeds_with(&config);

        assert_eq!(feeds.len(), 5);
        assert_eq!(feeds[&Layer::Bushfire].features.len(), 1);
        assert_eq!(feeds[&Layer::PowerOutage].features.len(), 1);
        assert!(feeds[&Layer::SatelliteHotspot].features.is_empty());
        assert!(feeds[&Layer::NetworkOutage].features.is_empty());
        assert!(feeds[&Layer::FireWatch].features.is_empty());
    }
}
