//! Model configuration from TOML (`[models]` section)

use advisor_domain::agent::profile::DEFAULT_MODEL;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    /// Model for the routing/synthesis manager agent
    pub manager: String,
    /// Model shared by the four specialists
    pub specialist: String,
}

impl Default for FileModelsConfig {
    fn default() -> Self {
        Self {
            manager: DEFAULT_MODEL.to_string(),
            specialist: DEFAULT_MODEL.to_string(),
        }
    }
}
