#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_endpoint, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_IP_ENDPOINT: &str = "https://api.ipify.org";
pub const DEFAULT_GEO_ENDPOINT: &str = "https://freegeoip.app";
pub const DEFAULT_PASS_ENDPOINT: &str = "http://api.open-notify.org";

/// Where the three upstream services live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub ip_endpoint: String,
    pub geo_endpoint: String,
    pub pass_endpoint: String,
    /// Reject coordinates that are not numbers in range.
    pub strict_coordinates: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            ip_endpoint: DEFAULT_IP_ENDPOINT.to_string(),
            geo_endpoint: DEFAULT_GEO_ENDPOINT.to_string(),
            pass_endpoint: DEFAULT_PASS_ENDPOINT.to_string(),
            strict_coordinates: false,
        }
    }
}

impl ServiceConfig {
    /// Points all three services at one host, e.g. a local mock server.
    pub fn all_at(base_url: &str) -> Self {
        Self {
            ip_endpoint: base_url.to_string(),
            geo_endpoint: base_url.to_string(),
            pass_endpoint: base_url.to_string(),
            strict_coordinates: false,
        }
    }
}

impl ConfigProvider for ServiceConfig {
    fn ip_endpoint(&self) -> &str {
        &self.ip_endpoint
    }

    fn geo_endpoint(&self) -> &str {
        &self.geo_endpoint
    }

    fn pass_endpoint(&self) -> &str {
        &self.pass_endpoint
    }

    fn strict_coordinates(&self) -> bool {
        self.strict_coordinates
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        validate_endpoint("ip_endpoint", &self.ip_endpoint)?;
        validate_endpoint("geo_endpoint", &self.geo_endpoint)?;
        validate_endpoint("pass_endpoint", &self.pass_endpoint)?;
        Ok(())
    }
}
