pub mod geometry;
pub mod job_service;
pub mod loi_converter;

pub use crate::domain::document::{Document, FieldValue, GeoPoint};
pub use crate::domain::loi::{Geometry, LocationOfInterest};
pub use crate::domain::ports::DataStore;
pub use crate::utils::error::Result;
