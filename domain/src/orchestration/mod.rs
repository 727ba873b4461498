//! Specialist orchestration domain
//!
//! - [`QueryContext`] - a request as seen by the routing layer
//! - [`SpecialistResult`] - one specialist's output (or failure) from a fan-out

pub mod value_objects;

pub use value_objects::{QueryContext, SpecialistResult};
