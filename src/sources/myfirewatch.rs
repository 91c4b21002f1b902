use super::FetchResult;
use crate::overlay::feature::features_to_collection;

/// Landgate MyFireWatch hotspots.
///
/// MyFireWatch has no GeoJSON feed. Until a scraper exists the layer is served as a WMS
/// tile overlay by the map front-end, so this always returns an empty collection without
/// touching the network.
pub fn fetch_myfirewatch_hotspots() -> FetchResult {
    Ok(features_to_collection(vec![]))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_myfirewatch_is_always_empty() {
        assert!(fetch_myfirewatch_hotspots().unwrap().features.is_empty());
    }
}
