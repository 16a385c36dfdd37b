// Domain layer: models and ports. No I/O; the store stays behind `DataStore`.

pub mod document;
pub mod job;
pub mod loi;
pub mod ports;
