use std::{collections::BTreeMap, fs, path::Path, path::PathBuf};

use anyhow::Context;
use geojson::FeatureCollection;

use super::layer::Layer;

pub fn collection_to_pretty_string(collection: &FeatureCollection) -> anyhow::Result<String> {
    serde_json::to_string_pretty(collection).context("Serializing FeatureCollection")
}

/// Write each layer's collection to `<output_dir>/<layer key>.geojson`.
pub fn write_feeds_to_geojson(
    feeds: &BTreeMap<Layer, FeatureCollection>,
    output_dir: &Path,
) -> anyhow::Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Creating output directory {:?}", output_dir))?;
    let mut written = Vec::with_capacity(feeds.len());
    for (layer, collection) in feeds {
        let output_filepath = output_dir.join(format!("{}.geojson", layer.key()));
        let geojson_contents = geojson::GeoJson::from(collection.clone());
        fs::write(&output_filepath, geojson_contents.to_string())
            .with_context(|| format!("Writing {:?}", output_filepath))?;
        log::info!(
            "Wrote {} {} features to {:?}",
            collection.features.len(),
            layer,
            output_filepath
        );
        written.push(output_filepath);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use testdir::testdir;

    use super::*;
    use crate::overlay::{
        feature::{features_to_collection, point_feature},
        location::PERTH_CENTER,
    };

    #[rstest]
    fn test_write_feeds_to_geojson() {
        let mut feeds = BTreeMap::new();
        feeds.insert(
            Layer::NetworkOutage,
            features_to_collection(vec![point_feature(
                PERTH_CENTER,
                geojson::JsonObject::new(),
                Layer::NetworkOutage,
            )]),
        );
        feeds.insert(Layer::FireWatch, features_to_collection(vec![]));

        let test_dir = testdir!();
        let written = write_feeds_to_geojson(&feeds, &test_dir.join("out")).unwrap();
        assert_eq!(written.len(), 2);
        assert!(written[0].ends_with("myfirewatch.geojson"));

        let contents = fs::read_to_string(test_dir.join("out").join("nbn.geojson")).unwrap();
        match contents.parse::<geojson::GeoJson>().unwrap() {
            geojson::GeoJson::FeatureCollection(collection) => {
                assert_eq!(collection.features.len(), 1)
            }
            other => panic!("Expected a FeatureCollection, got {:?}", other),
        }
    }

    #[rstest]
    fn test_pretty_string_is_multiline() {
        let text = collection_to_pretty_string(&features_to_collection(vec![])).unwrap();
        assert!(text.contains("\"FeatureCollection\""));
        assert!(text.contains('\n'));
    }
}
