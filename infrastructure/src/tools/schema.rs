//! JSON Schema tool converter.
//!
//! Default implementation of [`ToolSchemaPort`] producing the OpenAI
//! function-calling format:
//!
//! ```json
//! {"type": "function", "function": {"name": "...", "description": "...", "parameters": {...}}}
//! ```

use advisor_application::ports::tool_schema::ToolSchemaPort;
use advisor_domain::tool::{ParamType, ToolDefinition};
use serde_json::{Map, Value, json};

pub struct JsonSchemaToolConverter;

fn param_schema(param_type: ParamType, description: &str) -> Value {
    match param_type {
        ParamType::String => json!({"type": "string", "description": description}),
        ParamType::Number => json!({"type": "number", "description": description}),
        ParamType::StringArray => json!({
            "type": "array",
            "items": {"type": "string"},
            "description": description,
        }),
    }
}

impl ToolSchemaPort for JsonSchemaToolConverter {
    fn tool_to_schema(&self, tool: &ToolDefinition) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for param in &tool.parameters {
            properties.insert(
                param.name.clone(),
                param_schema(param.param_type, &param.description),
            );
            if param.required {
                required.push(json!(param.name));
            }
        }

        json!({
            "type": "function",
            "function": {
                "name": tool.name,
                "description": tool.description,
                "parameters": {
                    "type": "object",
                    "properties": properties,
                    "required": required,
                }
            }
        })
    }
}
