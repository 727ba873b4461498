//! Persisted inventory adapters.

mod json_source;

pub use json_source::JsonFileInventorySource;
