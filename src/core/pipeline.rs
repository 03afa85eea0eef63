use crate::core::http::{get_json, string_field, textual_field, SUCCESS_STATUS};
use crate::core::{ConfigProvider, Coordinates, IpAddress, PassList, PassPipeline, PassWindow};
use crate::utils::error::{IssError, Result};
use crate::utils::validation::validate_coordinate;
use reqwest::Client;
use serde_json::Value;

pub struct IssPipeline<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> IssPipeline<C> {
    pub fn new(config: C) -> Self {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: C, client: Client) -> Self {
        Self { config, client }
    }

    pub fn ip_url(&self) -> String {
        format!("{}/?format=json", base(self.config.ip_endpoint()))
    }

    /// The address goes into the path as-is; a malformed one is the
    /// geolocation service's problem.
    pub fn geo_url(&self, ip: &IpAddress) -> String {
        format!("{}/json/{}", base(self.config.geo_endpoint()), ip)
    }

    pub fn pass_url(&self, coords: &Coordinates) -> String {
        format!(
            "{}/iss-pass.json?lat={}&lon={}",
            base(self.config.pass_endpoint()),
            coords.latitude,
            coords.longitude
        )
    }
}

fn base(endpoint: &str) -> &str {
    endpoint.trim_end_matches('/')
}

fn extract_ip(json: Value) -> std::result::Result<IpAddress, String> {
    let ip = string_field(&json, "ip")?;
    if ip.is_empty() {
        return Err("field `ip` is empty".to_string());
    }
    Ok(IpAddress::new(ip))
}

fn extract_coordinates(json: Value) -> std::result::Result<Coordinates, String> {
    Ok(Coordinates::new(
        textual_field(&json, "latitude")?,
        textual_field(&json, "longitude")?,
    ))
}

fn extract_passes(json: Value) -> std::result::Result<PassList, String> {
    match json {
        Value::Object(mut obj) => match obj.remove("response") {
            Some(Value::Array(items)) => Ok(items.into_iter().map(PassWindow::new).collect()),
            Some(other) => Err(format!("field `response` is not an array: {}", other)),
            None => Err("missing field `response`".to_string()),
        },
        other => Err(format!("expected a JSON object, got: {}", other)),
    }
}

/// Rejects coordinates that are not numbers within the valid lat/lon range.
fn check_numeric(coords: &Coordinates) -> std::result::Result<(), String> {
    for (field, text, limit) in [
        ("latitude", &coords.latitude, 90.0),
        ("longitude", &coords.longitude, 180.0),
    ] {
        let value: f64 = text
            .trim()
            .parse()
            .map_err(|_| format!("{} '{}' is not numeric", field, text))?;
        validate_coordinate(field, value, limit).map_err(|e| e.to_string())?;
    }
    Ok(())
}

#[async_trait::async_trait]
impl<C: ConfigProvider> PassPipeline for IssPipeline<C> {
    async fn resolve_my_ip(&self) -> Result<IpAddress> {
        let ip = get_json(&self.client, &self.ip_url(), SUCCESS_STATUS, extract_ip).await?;
        tracing::debug!("Resolved public IP {}", ip);
        Ok(ip)
    }

    async fn resolve_coordinates(&self, ip: &IpAddress) -> Result<Coordinates> {
        let url = self.geo_url(ip);
        let coords = get_json(&self.client, &url, SUCCESS_STATUS, extract_coordinates).await?;

        if self.config.strict_coordinates() {
            check_numeric(&coords).map_err(|reason| IssError::ParseError {
                url: url.clone(),
                reason,
            })?;
        }

        tracing::debug!(
            "Resolved {} to lat={} lon={}",
            ip,
            coords.latitude,
            coords.longitude
        );
        Ok(coords)
    }

    async fn predict_passes(&self, coords: &Coordinates) -> Result<PassList> {
        let passes =
            get_json(&self.client, &self.pass_url(coords), SUCCESS_STATUS, extract_passes).await?;
        tracing::debug!("Received {} pass windows", passes.len());
        Ok(passes)
    }
}
