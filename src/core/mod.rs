pub mod engine;
pub mod http;
pub mod pipeline;

pub use crate::domain::model::{Coordinates, IpAddress, PassList, PassWindow};
pub use crate::domain::ports::{ConfigProvider, PassPipeline};
pub use crate::utils::error::Result;
