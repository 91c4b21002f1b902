use geojson::{Feature, FeatureCollection, JsonObject, JsonValue};

use super::{layer::Layer, location::Location};

/// Build a GeoJSON point feature for `layer`.
///
/// `layer` and `marker-color` are written after the given properties, so they always
/// reflect the layer even if the source used the same keys.
pub fn point_feature(location: Location, mut properties: JsonObject, layer: Layer) -> Feature {
    properties.insert("layer".to_string(), JsonValue::from(layer.key()));
    properties.insert("marker-color".to_string(), JsonValue::from(layer.color()));
    let point = geo::Point::from(location);
    Feature {
        bbox: None,
        geometry: Some(geojson::Geometry::new(geojson::Value::from(&point))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

pub fn features_to_collection(features: Vec<Feature>) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}
