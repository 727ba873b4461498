//! Inventory source port
//!
//! Where the persisted vehicle dataset comes from.

use async_trait::async_trait;
use advisor_domain::{DomainError, VehicleRecord};
use thiserror::Error;

/// Errors that can occur while reading the persisted inventory
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Inventory not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Failed to parse inventory: {0}")]
    Parse(String),

    #[error(transparent)]
    InvalidRecord(#[from] DomainError),
}

#[async_trait]
pub trait InventorySource: Send + Sync {
    /// Read the whole dataset. A read either yields every record or fails.
    async fn load(&self) -> Result<Vec<VehicleRecord>, SourceError>;

    /// Human-readable location, for logs
    fn describe(&self) -> String;
}
