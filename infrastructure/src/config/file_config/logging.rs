//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL transcript of agent attempts, tool calls and specialist results
    pub conversation_log: Option<String>,
    /// Directory for daily rolling diagnostic logs
    pub log_dir: Option<String>,
}
