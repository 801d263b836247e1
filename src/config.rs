use serde::Deserialize;

fn default_pvgis_base_url() -> String {
    "https://re.jrc.ec.europa.eu/api/v5_2/PVcalc".to_string()
}

fn default_pvgis_timeout_s() -> u64 { 30 }

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub pvgis: PvgisConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PvgisConfig {
    #[serde(default = "default_pvgis_base_url")]
    pub base_url: String,
    /// Request timeout for the PVGIS call, in seconds.
    #[serde(default = "default_pvgis_timeout_s")]
    pub timeout_s: u64,
}

impl Default for PvgisConfig {
    fn default() -> Self {
        Self {
            base_url: default_pvgis_base_url(),
            timeout_s: default_pvgis_timeout_s(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }
}
