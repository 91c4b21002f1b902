use std::{fs::read_to_string, path::Path, time::Duration};

use anyhow::anyhow;
use serde::Deserialize;

use crate::overlay::location::{Location, PERTH_CENTER};

pub const BUSHFIRE_URL: &str = "https://emergency.wa.gov.au/data/map.incidents.json";
pub const DEA_HOTSPOT_URL: &str = "https://hotspots.dea.ga.gov.au/geoserver/wfs?\
    service=WFS&version=1.1.0&request=GetFeature&typeName=hotspot:hotspots\
    &outputFormat=json";
pub const NBN_URL: &str = "https://www.nbnco.com.au/support/network-status";
pub const WESTERN_POWER_URL: &str = "https://www.westernpower.com.au/outages/";

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SourceUrls {
    pub bushfire_url: String,
    pub dea_hotspot_url: String,
    pub nbn_url: String,
    pub power_url: String,
}

impl Default for SourceUrls {
    fn default() -> Self {
        Self {
            bushfire_url: BUSHFIRE_URL.to_string(),
            dea_hotspot_url: DEA_HOTSPOT_URL.to_string(),
            nbn_url: NBN_URL.to_string(),
            power_url: WESTERN_POWER_URL.to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Fetch the sources concurrently instead of one after another.
    pub parallel: bool,
    /// Position given to records that only name a suburb or area.
    pub placeholder: Location,
    pub sources: SourceUrls,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            parallel: false,
            placeholder: PERTH_CENTER,
            sources: SourceUrls::default(),
        }
    }
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn from_yaml_file(filepath: &Path) -> anyhow::Result<Self> {
        if !filepath.exists() {
            return Err(anyhow!("Config file {:?} not found", filepath));
        }
        let config_contents = read_to_string(filepath)?;
        Self::from_yaml_str(&config_contents)
    }

    pub fn from_yaml_str(contents: &str) -> anyhow::Result<Self> {
        let config: Config = serde_yaml::from_str(contents)?;
        if config.timeout_secs == 0 {
            return Err(anyhow!("timeout_secs must be at least 1"));
        }
        if !config.placeholder.is_valid() {
            return Err(anyhow!(
                "placeholder {:?} is not a valid longitude/latitude",
                config.placeholder
            ));
        }
        Ok(config)
    }
}
