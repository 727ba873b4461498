//! Provider configuration from TOML (`[providers]` section)

use serde::{Deserialize, Serialize};

/// OpenAI-compatible API provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    /// Base URL for the API (can point at any OpenAI-compatible server).
    pub base_url: String,
    /// Max tokens per response.
    pub max_tokens: u32,
    /// Maximum model/tool round trips in one agent run.
    pub max_tool_rounds: usize,
    /// HTTP timeout for a single request.
    pub request_timeout_secs: u64,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.openai.com".to_string(),
            max_tokens: 2048,
            max_tool_rounds: 8,
            request_timeout_secs: 60,
        }
    }
}

impl FileOpenAiConfig {
    /// API key from the configured env var, falling back to `api_key`.
    pub fn resolve_api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| self.api_key.clone().filter(|k| !k.trim().is_empty()))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// OpenAI-compatible API settings.
    pub openai: FileOpenAiConfig,
}
