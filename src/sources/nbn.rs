use geojson::{JsonObject, JsonValue};
use reqwest::blocking::Client;
use scraper::Html;

use super::{
    download::download_text,
    html::{selector, trimmed_text},
    FetchResult,
};
use crate::overlay::{
    feature::{features_to_collection, point_feature},
    layer::Layer,
    location::Locator,
};

/// Scrape the NBN network status page for current outages.
///
/// The page lists suburbs only, so every outage is placed with `locator`.
pub fn scrape_nbn_outage(
    client: &Client,
    url: &str,
    locator: &Locator,
) -> FetchResult {
    let html = download_text(client, url)?;
    parse_outage_table(&html, locator)
}

fn parse_outage_table(html: &str, locator: &Locator) -> FetchResult {
    let row_selector = selector("#outage-table tr")?;
    let cell_selector = selector("td")?;
    let doc = Html::parse_document(html);

    let mut features = Vec::new();
    // First row is the table header.
    for row in doc.select(&row_selector).skip(1) {
        let cells: Vec<String> = row.select(&cell_selector).map(trimmed_text).collect();
        let [suburb, status, eta, ..] = cells.as_slice() else {
            log::debug!("Skipping outage row with {} cells", cells.len());
            continue;
        };
        let location = locator.locate_area(suburb);
        let mut properties = JsonObject::new();
        properties.insert("suburb".to_string(), JsonValue::from(suburb.as_str()));
        properties.insert("status".to_string(), JsonValue::from(status.as_str()));
        properties.insert("eta".to_string(), JsonValue::from(eta.as_str()));
        features.push(point_feature(location, properties, Layer::NetworkOutage));
    }
    Ok(features_to_collection(features))
}
