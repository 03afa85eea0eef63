use crate::core::{PassList, PassPipeline};
use crate::utils::error::Result;

/// Runs the lookup chain IP -> coordinates -> passes, stopping at the first
/// failing stage and returning that stage's error untouched.
pub struct PassEngine<P: PassPipeline> {
    pipeline: P,
}

impl<P: PassPipeline> PassEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn next_passes_for_current_location(&self) -> Result<PassList> {
        tracing::info!("Resolving public IP address...");
        let ip = self.pipeline.resolve_my_ip().await?;

        tracing::info!("Looking up coordinates for {}...", ip);
        let coords = self.pipeline.resolve_coordinates(&ip).await?;

        tracing::info!(
            "Fetching ISS passes for lat={} lon={}...",
            coords.latitude,
            coords.longitude
        );
        let passes = self.pipeline.predict_passes(&coords).await?;
        tracing::info!("Found {} upcoming passes", passes.len());

        Ok(passes)
    }
}
