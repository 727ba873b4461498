//! OpenAI-compatible Chat Completions provider.

mod gateway;
pub mod types;

pub use gateway::OpenAiGateway;
