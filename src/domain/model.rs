use serde::{Deserialize, Serialize};
use std::fmt;

/// Public IPv4 or IPv6 address as reported by the IP-echo service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IpAddress(String);

impl IpAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Latitude and longitude carried as the text the geolocation service sent.
/// They are never converted to numbers on the way to the pass service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: String,
    pub longitude: String,
}

impl Coordinates {
    pub fn new(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }
}

/// One predicted pass, kept exactly as the upstream service returned it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PassWindow(serde_json::Value);

impl PassWindow {
    pub fn new(raw: serde_json::Value) -> Self {
        Self(raw)
    }

    /// Visible duration in whole seconds. `600.0` counts as `600`.
    pub fn duration(&self) -> Option<i64> {
        let value = self.0.get("duration")?;
        value.as_i64().or_else(|| {
            value
                .as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() <= i64::MAX as f64)
                .map(|f| f as i64)
        })
    }

    /// Start of the pass, epoch seconds.
    pub fn risetime(&self) -> Option<i64> {
        self.0.get("risetime").and_then(|v| v.as_i64())
    }

    pub fn raw(&self) -> &serde_json::Value {
        &self.0
    }
}

/// Pass windows in the order the upstream service listed them.
pub type PassList = Vec<PassWindow>;
