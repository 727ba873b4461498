//! Tool domain entities

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// JSON type of a tool parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamType {
    String,
    Number,
    StringArray,
}

/// Definition of a tool that an agent can call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique name of the tool (e.g., "search_vehicles")
    pub name: String,
    /// Human-readable description shown to the model
    pub description: String,
    pub parameters: Vec<ToolParameter>,
}

/// Parameter specification for a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolParameter {
    pub name: String,
    pub description: String,
    pub required: bool,
    pub param_type: ParamType,
}

impl ToolDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, param: ToolParameter) -> Self {
        self.parameters.push(param);
        self
    }
}

impl ToolParameter {
    pub fn new(name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required,
            param_type: ParamType::String,
        }
    }

    pub fn with_type(mut self, param_type: ParamType) -> Self {
        self.param_type = param_type;
        self
    }
}

/// Ordered set of tools offered to one agent
#[derive(Debug, Clone, Default)]
pub struct ToolSpec {
    tools: Vec<ToolDefinition>,
}

impl ToolSpec {
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Adds a tool, replacing any existing definition with the same name.
    pub fn register(mut self, tool: ToolDefinition) -> Self {
        self.tools.retain(|t| t.name != tool.name);
        self.tools.push(tool);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.iter().find(|t| t.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn all(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.iter().map(|t| t.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// A call to a tool with arguments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Provider-assigned id used to pair the result with the request
    #[serde(default)]
    pub id: String,
    /// Name of the tool to call
    pub tool_name: String,
    /// Arguments passed to the tool
    pub arguments: HashMap<String, serde_json::Value>,
}

impl ToolCall {
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            tool_name: tool_name.into(),
            arguments: HashMap::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    /// Get a string argument
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(|v| v.as_str())
    }

    /// Get a required string argument or return an error message
    pub fn require_string(&self, key: &str) -> Result<&str, String> {
        self.get_string(key)
            .ok_or_else(|| format!("Missing required argument: {}", key))
    }

    /// Get a numeric argument, accepting numeric strings such as "30000"
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        match self.arguments.get(key)? {
            serde_json::Value::Number(n) => n.as_f64(),
            serde_json::Value::String(s) => s.trim().replace(',', "").parse().ok(),
            _ => None,
        }
    }

    pub fn require_f64(&self, key: &str) -> Result<f64, String> {
        self.get_f64(key)
            .ok_or_else(|| format!("Missing or non-numeric argument: {}", key))
    }

    /// Get a list of strings. A bare string is treated as a one-element list.
    pub fn get_string_list(&self, key: &str) -> Option<Vec<String>> {
        match self.arguments.get(key)? {
            serde_json::Value::Array(items) => Some(
                items
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect(),
            ),
            serde_json::Value::String(s) => Some(vec![s.clone()]),
            _ => None,
        }
    }

    pub fn require_string_list(&self, key: &str) -> Result<Vec<String>, String> {
        match self.get_string_list(key) {
            Some(list) if !list.is_empty() => Ok(list),
            _ => Err(format!("Missing or empty list argument: {}", key)),
        }
    }
}
