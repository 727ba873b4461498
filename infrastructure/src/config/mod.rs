//! Configuration file loading for vehicle-advisor
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `VEHICLE_ADVISOR_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./advisor.toml` or `./.advisor.toml`
//! 4. Global: `$XDG_CONFIG_HOME/vehicle-advisor/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileExecutorConfig, FileInventoryConfig, FileLoggingConfig, FileModelsConfig,
    FileOpenAiConfig, FileOutputConfig, FileProvidersConfig,
};
pub use loader::ConfigLoader;
