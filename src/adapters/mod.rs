// Adapters layer: concrete implementations for external systems. The real
// document store lives behind the `DataStore` port; only the in-memory
// implementation ships with this crate.

pub mod memory;
