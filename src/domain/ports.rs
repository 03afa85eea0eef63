use crate::domain::model::{Coordinates, IpAddress, PassList};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    /// Base URL of the IP-echo service.
    fn ip_endpoint(&self) -> &str;
    /// Base URL of the geolocation service.
    fn geo_endpoint(&self) -> &str;
    /// Base URL of the pass-prediction service.
    fn pass_endpoint(&self) -> &str;
    fn strict_coordinates(&self) -> bool;
}

/// The three lookups chained by the orchestrator. Each call issues at most
/// one request and never retries.
#[async_trait]
pub trait PassPipeline: Send + Sync {
    async fn resolve_my_ip(&self) -> Result<IpAddress>;
    async fn resolve_coordinates(&self, ip: &IpAddress) -> Result<Coordinates>;
    async fn predict_passes(&self, coords: &Coordinates) -> Result<PassList>;
}
