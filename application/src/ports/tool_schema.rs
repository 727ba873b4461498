//! Tool schema conversion port.
//!
//! Separates "which tools an agent gets" (domain capability table) from "how
//! they are serialized for an LLM API" (infrastructure).

use advisor_domain::tool::{ToolDefinition, ToolSpec};

/// Port for converting tool definitions to an LLM API format (JSON Schema).
pub trait ToolSchemaPort: Send + Sync {
    /// Convert a single tool definition to the provider's tool schema.
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value;

    /// Convert every tool of a spec, in registration order.
    fn all_tools_schema(&self, spec: &ToolSpec) -> Vec<serde_json::Value> {
        spec.all().map(|t| self.tool_to_schema(t)).collect()
    }
}
