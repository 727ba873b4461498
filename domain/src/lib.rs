//! Domain layer for vehicle-advisor
//!
//! This crate contains the business rules of the advisor: the vehicle
//! inventory, the filter language over it, intent classification, and the
//! pure parts of resilient agent execution. It has no dependencies on
//! infrastructure or presentation concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Inventory
//!
//! - **VehicleRecord**: one vehicle, immutable once loaded
//! - **InventorySnapshot**: the whole fleet plus load time and origin,
//!   replaced wholesale on refresh
//!
//! ## Routing
//!
//! - **IntentClassifier**: keyword membership test from free text to
//!   [`SpecialistCategory`] values
//! - **AgentProfile**: instructions and tool access for the manager and the
//!   four specialists

pub mod agent;
pub mod config;
pub mod core;
pub mod filter;
pub mod intent;
pub mod inventory;
pub mod orchestration;
pub mod resilience;
pub mod session;
pub mod tool;

// Re-export commonly used types
pub use agent::{AgentProfile, AgentRole};
pub use config::{ConfigIssue, ConfigIssueCode, Severity};
pub use core::{error::DomainError, query::Query};
pub use filter::{GeneralQuery, VehicleFilter, VehiclePredicate};
pub use intent::{IntentClassifier, SpecialistCategory};
pub use inventory::{
    InventorySnapshot, InventorySummary, SnapshotOrigin, VehicleRecord, canonical_fleet,
};
pub use orchestration::{QueryContext, SpecialistResult};
pub use resilience::{FailureReason, QualityVerdict, RetryPolicy, fallback_response, is_quality};
pub use session::{Message, Role};
pub use tool::{ToolCall, ToolDefinition, ToolError, ToolParameter, ToolResult, ToolSpec};
