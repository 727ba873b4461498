//! Tool domain module
//!
//! Typed capability table for the agents. Every tool is described by a
//! [`ToolDefinition`], invoked through a [`ToolCall`], and answered with a
//! [`ToolResult`]. The [`capabilities`] module holds the fixed set of vehicle
//! tools and decides which of them each agent role may see.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ ToolSpec     │───▶│ ToolCall     │───▶│ ToolResult   │
//! │ (table)      │    │ (invocation) │    │ (output)     │
//! └──────────────┘    └──────────────┘    └──────────────┘
//! ```

pub mod capabilities;
pub mod entities;
pub mod value_objects;

pub use entities::{ParamType, ToolCall, ToolDefinition, ToolParameter, ToolSpec};
pub use value_objects::{ToolError, ToolResult};
