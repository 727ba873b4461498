//! Inventory configuration from TOML (`[inventory]` section)

use advisor_application::inventory::DEFAULT_CACHE_TTL_SECS;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileInventoryConfig {
    /// JSON file holding the vehicle records
    pub path: String,
    /// Seconds a loaded inventory stays fresh
    pub cache_ttl_secs: u64,
}

impl Default for FileInventoryConfig {
    fn default() -> Self {
        Self {
            path: "data/synthetic_inventory.json".to_string(),
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
        }
    }
}
