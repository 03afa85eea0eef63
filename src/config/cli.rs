use crate::config::{ServiceConfig, TomlConfig};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "iss-passes")]
#[command(about = "Upcoming ISS passes over your current location")]
pub struct CliConfig {
    #[arg(long, help = "TOML file with a [services] table")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Base URL of the IP-echo service")]
    pub ip_endpoint: Option<String>,

    #[arg(long, help = "Base URL of the geolocation service")]
    pub geo_endpoint: Option<String>,

    #[arg(long, help = "Base URL of the pass-prediction service")]
    pub pass_endpoint: Option<String>,

    #[arg(long, help = "Reject non-numeric or out-of-range coordinates")]
    pub strict_coordinates: bool,

    #[arg(long, help = "Print the pass list as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl CliConfig {
    /// Defaults, then the config file, then flags.
    pub fn service_config(&self) -> Result<ServiceConfig> {
        let mut services = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.services,
            None => ServiceConfig::default(),
        };

        if let Some(endpoint) = &self.ip_endpoint {
            services.ip_endpoint = endpoint.clone();
        }
        if let Some(endpoint) = &self.geo_endpoint {
            services.geo_endpoint = endpoint.clone();
        }
        if let Some(endpoint) = &self.pass_endpoint {
            services.pass_endpoint = endpoint.clone();
        }
        if self.strict_coordinates {
            services.strict_coordinates = true;
        }

        services.validate()?;
        Ok(services)
    }
}
