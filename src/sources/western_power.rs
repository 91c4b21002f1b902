use geojson::{JsonObject, JsonValue};
use reqwest::blocking::Client;
use scraper::{ElementRef, Html, Selector};

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

/// Scrape current outages from the Western Power outages page.
///
/// Like the NBN page, outages are listed per suburb and placed with `locator`.
pub fn scrape_western_power_outage(
    client: &Client,
    url: &str,
    locator: &Locator,
) -> FetchResult {
    let html = download_text(client, url)?;
    parse_outage_items(&html, locator)
}

fn parse_outage_items(html: &str, locator: &Locator) -> FetchResult {
    let item_selector = selector(".outage-item")?;
    let area_selector = selector(".suburb")?;
    let customers_selector = selector(".customers-affected")?;
    let restoration_selector = selector(".estimated-restoration")?;
    let doc = Html::parse_document(html);

    let features = doc
        .select(&item_selector)
        .map(|item| {
            let area = first_text(item, &area_selector);
            let location = locator.locate_area(&area);
            let mut properties = JsonObject::new();
            properties.insert("area".to_string(), JsonValue::from(area));
            properties.insert(
                "customers".to_string(),
                JsonValue::from(first_text(item, &customers_selector)),
            );
            properties.insert(
                "restore_time".to_string(),
                JsonValue::from(first_text(item, &restoration_selector)),
            );
            point_feature(location, properties, Layer::PowerOutage)
        })
        .collect();
    Ok(features_to_collection(features))
}

/// Trimmed text of the first match inside `item`, empty when there is none.
fn first_text(item: ElementRef, field_selector: &Selector) -> String {
    item.select(field_selector)
        .next()
        .map(trimmed_text)
        .unwrap_or_default()
}
