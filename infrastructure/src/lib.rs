//! Infrastructure layer for vehicle-advisor
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod inventory;
pub mod logging;
pub mod providers;
pub mod tools;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileExecutorConfig, FileInventoryConfig, FileLoggingConfig,
    FileModelsConfig, FileOpenAiConfig, FileOutputConfig, FileProvidersConfig,
};
pub use inventory::JsonFileInventorySource;
pub use logging::JsonlConversationLogger;
pub use providers::OpenAiGateway;
pub use tools::{JsonSchemaToolConverter, VehicleToolbox};
