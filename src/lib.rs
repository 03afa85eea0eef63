pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{ServiceConfig, TomlConfig};
pub use core::{engine::PassEngine, pipeline::IssPipeline};
pub use domain::model::{Coordinates, IpAddress, PassList, PassWindow};
pub use domain::ports::{ConfigProvider, PassPipeline};
pub use utils::error::{IssError, Result};
