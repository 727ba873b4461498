//! Tool domain value objects - immutable result and error types
//!
//! Tool failures are not Rust errors from the agent's point of view: they are
//! rendered back to the model as tool output so it can correct its call.

use serde::{Deserialize, Serialize};

/// Error that occurred during tool execution.
///
/// | Code | Description |
/// |------|-------------|
/// | `INVALID_ARGUMENT` | Missing or malformed parameters |
/// | `NOT_FOUND` | Unknown tool |
/// | `EXECUTION_FAILED` | The tool ran but could not complete |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolError {
    pub code: String,
    pub message: String,
}

impl ToolError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn not_found(tool: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", format!("Unknown tool: {}", tool.into()))
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new("INVALID_ARGUMENT", message)
    }

    pub fn execution_failed(message: impl Into<String>) -> Self {
        Self::new("EXECUTION_FAILED", message)
    }
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ToolError {}

/// Result of a tool execution, carrying output or error information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    pub tool_name: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ToolError>,
    /// Number of vehicles returned, for inventory searches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl ToolResult {
    pub fn success(tool_name: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: true,
            output: Some(output.into()),
            error: None,
            match_count: None,
            duration_ms: None,
        }
    }

    pub fn failure(tool_name: impl Into<String>, error: ToolError) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: false,
            output: None,
            error: Some(error),
            match_count: None,
            duration_ms: None,
        }
    }

    pub fn with_match_count(mut self, count: usize) -> Self {
        self.match_count = Some(count);
        self
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn error(&self) -> Option<&ToolError> {
        self.error.as_ref()
    }

    /// Text handed back to the model as the tool message content
    pub fn to_model_content(&self) -> String {
        match (&self.output, &self.error) {
            (Some(output), _) if self.success => output.clone(),
            (_, Some(error)) => format!("Error: {}", error),
            _ => "Error: tool produced no output".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_error_codes() {
        assert_eq!(ToolError::not_found("fly").code, "NOT_FOUND");
        assert_eq!(ToolError::invalid_argument("x").code, "INVALID_ARGUMENT");
        assert_eq!(ToolError::execution_failed("x").code, "EXECUTION_FAILED");
        assert_eq!(
            ToolError::not_found("fly").to_string(),
            "[NOT_FOUND] Unknown tool: fly"
        );
    }

    #[test]
    fn test_tool_result_success() {
        let result = ToolResult::success("search_vehicles", "[]").with_match_count(0);

        assert!(result.is_success());
        assert_eq!(result.output(), Some("[]"));
        assert_eq!(result.match_count, Some(0));
        assert_eq!(result.to_model_content(), "[]");
    }

    #[test]
    fn test_tool_result_failure() {
        let result = ToolResult::failure(
            "search_vehicles_by_budget",
            ToolError::invalid_argument("max_budget must be a number"),
        );

        assert!(!result.is_success());
        assert!(result.output().is_none());
        assert_eq!(
            result.to_model_content(),
            "Error: [INVALID_ARGUMENT] max_budget must be a number"
        );
    }
}
