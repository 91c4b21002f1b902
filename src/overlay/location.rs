use serde::Deserialize;

/// A WGS84 longitude/latitude pair.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub lon: f64,
    pub lat: f64,
}

/// Perth CBD, used when a source reports a suburb but no coordinates.
pub const PERTH_CENTER: Location = Location {
    lon: 115.8575,
    lat: -31.9536,
};

impl Location {
    /// Finite and within WGS84 longitude [-180, 180] and latitude [-90, 90].
    pub fn is_valid(&self) -> bool {
        self.lon.is_finite()
            && self.lat.is_finite()
            && (-180.0..=180.0).contains(&self.lon)
            && (-90.0..=90.0).contains(&self.lat)
    }
}

impl Default for Location {
    fn default() -> Self {
        PERTH_CENTER
    }
}

impl From<Location> for geo::Point {
    fn from(value: Location) -> Self {
        geo::Point::new(value.lon, value.lat)
    }
}

/// Resolves the map position of records that only name an area.
///
/// There is no geocoding: every area resolves to the configured placeholder point. A
/// suburb or postcode centroid lookup would slot in here without touching the feature
/// builder.
#[derive(Debug, Clone, Copy)]
pub struct Locator {
    placeholder: Location,
}

impl Locator {
    pub fn new(placeholder: Location) -> Self {
        Self { placeholder }
    }

    pub fn locate_area(&self, area: &str) -> Location {
        log::debug!(
            "No coordinates for '{}', using placeholder {:?}",
            area,
            self.placeholder
        );
        self.placeholder
    }
}

impl Default for Locator {
    fn default() -> Self {
        Self::new(PERTH_CENTER)
    }
}
