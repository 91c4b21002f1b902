use serde::Serialize;
use std::{collections::BTreeMap, fmt, str::FromStr};

/// The emergency overlay layers shown on the dashboard map.
///
/// The set is closed. Variants are declared in the order the layers are listed in the
/// filter menu, which is also the iteration order of any `BTreeMap<Layer, _>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    Bushfire,
    SatelliteHotspot,
    FireWatch,
    NetworkOutage,
    PowerOutage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayerMeta {
    pub label: &'static str,
    pub color: &'static str,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown layer '{0}'")]
pub struct UnknownLayer(pub String);

impl Layer {
    pub const ALL: [Layer; 5] = [
        Layer::Bushfire,
        Layer::SatelliteHotspot,
        Layer::FireWatch,
        Layer::NetworkOutage,
        Layer::PowerOutage,
    ];

    /// Key used for the layer in GeoJSON properties and in the aggregated output.
    pub fn key(&self) -> &'static str {
        match self {
            Layer::Bushfire => "bushfire",
            Layer::SatelliteHotspot => "dea_hotspot",
            Layer::FireWatch => "myfirewatch",
            Layer::NetworkOutage => "nbn",
            Layer::PowerOutage => "power",
        }
    }

    /// Marker color attached to every feature of the layer.
    pub fn color(&self) -> &'static str {
        match self {
            Layer::Bushfire => "#FF3232",
            Layer::SatelliteHotspot => "#FF8800",
            Layer::FireWatch => "#FFD700",
            Layer::NetworkOutage => "#3388ff",
            Layer::PowerOutage => "#6BC143",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Layer::Bushfire => "Bushfires (DFES)",
            Layer::SatelliteHotspot => "Satellite Hotspots (DEA)",
            Layer::FireWatch => "WA MyFireWatch",
            Layer::NetworkOutage => "NBN Outages",
            Layer::PowerOutage => "Western Power Outages",
        }
    }

    pub fn meta(&self) -> LayerMeta {
        LayerMeta {
            label: self.label(),
            color: self.color(),
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Layer {
    type Err = UnknownLayer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layer::ALL
            .into_iter()
            .find(|layer| layer.key() == s)
            .ok_or_else(|| UnknownLayer(s.to_string()))
    }
}

impl Serialize for Layer {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

/// Label and color per layer, as consumed by the dashboard filter menu.
pub fn layer_meta_table() -> BTreeMap<Layer, LayerMeta> {
    Layer::ALL
        .into_iter()
        .map(|layer| (layer, layer.meta()))
        .collect()
}
