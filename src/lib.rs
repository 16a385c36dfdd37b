pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::memory::MemoryDataStore;
pub use crate::core::{job_service::JobService, loi_converter::LoiConverter};
pub use crate::domain::document::{Document, FieldValue, GeoPoint};
pub use crate::domain::job::{Job, Step, Survey, Task};
pub use crate::domain::loi::{Coordinate, Geometry, LocationOfInterest};
pub use crate::domain::ports::DataStore;
pub use crate::utils::error::{GroundError, Result};
