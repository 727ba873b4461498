//! LLM Gateway port
//!
//! Defines the interface for running one agent turn against an LLM provider.
//! The gateway owns the tool-calling loop: it offers the tools of the given
//! executor to the model, runs the calls the model requests, and returns the
//! final assistant text.

use async_trait::async_trait;
use advisor_domain::{AgentProfile, Message};
use thiserror::Error;

use super::tool_executor::ToolExecutorPort;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout")]
    Timeout,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Missing API key: set {0}")]
    MissingApiKey(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// One agent invocation
#[derive(Debug, Clone)]
pub struct AgentRequest {
    pub profile: AgentProfile,
    pub query: String,
    pub history: Vec<Message>,
}

impl AgentRequest {
    pub fn new(profile: AgentProfile, query: impl Into<String>) -> Self {
        Self {
            profile,
            query: query.into(),
            history: Vec::new(),
        }
    }

    pub fn with_history(mut self, history: Vec<Message>) -> Self {
        self.history = history;
        self
    }
}

/// Result of a completed agent run
#[derive(Debug, Clone)]
pub struct AgentOutput {
    /// Final assistant text after all tool rounds
    pub final_output: String,
    /// Number of tool calls executed during the run
    pub tool_calls: usize,
}

impl AgentOutput {
    pub fn new(final_output: impl Into<String>) -> Self {
        Self {
            final_output: final_output.into(),
            tool_calls: 0,
        }
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer runs agents.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    async fn invoke(
        &self,
        request: &AgentRequest,
        tools: &dyn ToolExecutorPort,
    ) -> Result<AgentOutput, GatewayError>;
}
