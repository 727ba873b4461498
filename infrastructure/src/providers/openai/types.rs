//! Chat Completions wire types and conversions to/from domain types.

use advisor_domain::tool::{ToolCall, ToolError, ToolResult};
use advisor_domain::{Message, Role};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ─── Request ─────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<WireToolCall>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl ChatMessage {
    pub fn text(role: &str, content: impl Into<String>) -> Self {
        Self {
            role: role.to_string(),
            content: Some(content.into()),
            tool_calls: Vec::new(),
            tool_call_id: None,
        }
    }

    /// Tool reply message paired with the call id the model issued.
    pub fn tool_reply(call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: "tool".to_string(),
            content: Some(content.into()),
            tool_calls: Vec::new(),
            tool_call_id: Some(call_id.into()),
        }
    }
}

impl From<&Message> for ChatMessage {
    fn from(message: &Message) -> Self {
        ChatMessage::text(message.role.as_str(), message.content.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireToolCall {
    pub id: String,
    #[serde(rename = "type", default = "function_type")]
    pub call_type: String,
    pub function: WireFunctionCall,
}

fn function_type() -> String {
    "function".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireFunctionCall {
    pub name: String,
    /// JSON-encoded argument object, as sent by the API
    #[serde(default)]
    pub arguments: String,
}

// ─── Response ────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
}

/// Build the opening message list: instructions, prior turns, then the query.
pub fn opening_messages(instructions: &str, history: &[Message], query: &str) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(ChatMessage::text(Role::System.as_str(), instructions));
    messages.extend(
        history
            .iter()
            .filter(|m| m.role != Role::System)
            .map(ChatMessage::from),
    );
    messages.push(ChatMessage::text(Role::User.as_str(), query));
    messages
}

/// Decode a wire tool call into a domain [`ToolCall`].
///
/// Malformed argument JSON yields a ready-made failure result for the model.
pub fn decode_tool_call(call: &WireToolCall) -> Result<ToolCall, ToolResult> {
    let raw = call.function.arguments.trim();
    let arguments: HashMap<String, serde_json::Value> = if raw.is_empty() {
        HashMap::new()
    } else {
        serde_json::from_str(raw).map_err(|e| {
            ToolResult::failure(
                call.function.name.clone(),
                ToolError::invalid_argument(format!("arguments are not a JSON object: {}", e)),
            )
        })?
    };

    Ok(ToolCall {
        id: call.id.clone(),
        tool_name: call.function.name.clone(),
        arguments,
    })
}

/// Human-readable message from an error response body.
pub fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => match parsed.error.error_type {
            Some(kind) => format!("HTTP {} ({}): {}", status, kind, parsed.error.message),
            None => format!("HTTP {}: {}", status, parsed.error.message),
        },
        Err(_) => format!("HTTP {}: {}", status, body.trim()),
    }
}
