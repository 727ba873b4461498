//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod clock;
pub mod conversation_logger;
pub mod inventory_source;
pub mod llm_gateway;
pub mod progress;
pub mod tool_executor;
pub mod tool_schema;
