//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every section is `#[serde(default)]`, so a partial file only overrides
//! what it mentions.

mod executor;
mod inventory;
mod logging;
mod models;
mod output;
mod providers;

pub use executor::FileExecutorConfig;
pub use inventory::FileInventoryConfig;
pub use logging::FileLoggingConfig;
pub use models::FileModelsConfig;
pub use output::FileOutputConfig;
pub use providers::{FileOpenAiConfig, FileProvidersConfig};

use advisor_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Inventory file and cache lifetime
    pub inventory: FileInventoryConfig,
    /// Retry, timeout and quality gate settings
    pub executor: FileExecutorConfig,
    /// Model selection per agent role
    pub models: FileModelsConfig,
    /// LLM provider settings
    pub providers: FileProvidersConfig,
    /// Log file locations
    pub logging: FileLoggingConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.executor.max_retries == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ZeroRetries,
                "executor.max_retries is 0, agents get a single attempt",
            ));
        }
        if self.executor.attempt_timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroTimeout,
                "executor.attempt_timeout_secs must be greater than 0",
            ));
        }
        if self.inventory.cache_ttl_secs == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ZeroCacheTtl,
                "inventory.cache_ttl_secs is 0, the inventory is reloaded on every search",
            ));
        }
        for (field, value) in [
            ("models.manager", &self.models.manager),
            ("models.specialist", &self.models.specialist),
        ] {
            if value.trim().is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyModel,
                    format!("{} must not be empty", field),
                ));
            }
        }
        if self.providers.openai.max_tool_rounds == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::NoToolRounds,
                "providers.openai.max_tool_rounds is 0, agents cannot search the inventory",
            ));
        }

        issues
    }
}
