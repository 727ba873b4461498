//! Tool Executor port
//!
//! Defines the interface for executing agent tool calls.

use async_trait::async_trait;
use advisor_domain::tool::{ToolCall, ToolDefinition, ToolResult, ToolSpec};

/// Port for tool execution
///
/// Tool failures are reported inside the [`ToolResult`], never as `Err`, so
/// the model sees them as tool output.
#[async_trait]
pub trait ToolExecutorPort: Send + Sync {
    /// Get the specification of all available tools
    fn tool_spec(&self) -> &ToolSpec;

    /// Check if a tool is available
    fn has_tool(&self, name: &str) -> bool {
        self.tool_spec().contains(name)
    }

    /// Get the definition of a specific tool
    fn get_tool(&self, name: &str) -> Option<&ToolDefinition> {
        self.tool_spec().get(name)
    }

    /// Get names of all available tools
    fn available_tools(&self) -> Vec<&str> {
        self.tool_spec().names().collect()
    }

    /// Execute a tool call asynchronously
    async fn execute(&self, call: &ToolCall) -> ToolResult;
}
