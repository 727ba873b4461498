//! Tool adapters for the agent system
//!
//! - [`VehicleToolbox`]: executes the vehicle capability table
//! - [`JsonSchemaToolConverter`]: serializes tool definitions for the LLM API

mod schema;
mod toolbox;

pub use schema::JsonSchemaToolConverter;
pub use toolbox::{NO_SPECIALIST_MATCH, VehicleToolbox};
