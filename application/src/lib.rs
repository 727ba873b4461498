//! Application layer for vehicle-advisor
//!
//! This crate contains use cases, port definitions, the inventory cache and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod inventory;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ExecutionParams;
pub use inventory::{FilterEngine, InventoryStore};
pub use ports::{
    clock::{Clock, SystemClock},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    inventory_source::{InventorySource, SourceError},
    llm_gateway::{AgentOutput, AgentRequest, GatewayError, LlmGateway},
    progress::{DispatchProgress, NoProgress},
    tool_executor::ToolExecutorPort,
    tool_schema::ToolSchemaPort,
};
pub use use_cases::dispatch_specialists::SpecialistOrchestrator;
pub use use_cases::recommend::RecommendVehicles;
pub use use_cases::resilient_execution::ResilientExecutor;
