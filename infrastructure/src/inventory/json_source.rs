//! JSON file inventory source
//!
//! Reads the dataset as a single JSON array of vehicle records and can write
//! the canonical fleet back out as a seed file.

use advisor_application::ports::inventory_source::{InventorySource, SourceError};
use advisor_domain::VehicleRecord;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct JsonFileInventorySource {
    path: PathBuf,
}

impl JsonFileInventorySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `vehicles` as a pretty-printed JSON array, creating parent
    /// directories. Overwrites an existing file.
    pub async fn write_seed(&self, vehicles: &[VehicleRecord]) -> Result<(), SourceError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| SourceError::Io(format!("{}: {}", parent.display(), e)))?;
        }

        let json = serde_json::to_string_pretty(vehicles)
            .map_err(|e| SourceError::Parse(e.to_string()))?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| SourceError::Io(format!("{}: {}", self.path.display(), e)))?;

        info!(path = %self.path.display(), vehicles = vehicles.len(), "Wrote inventory seed");
        Ok(())
    }
}

#[async_trait]
impl InventorySource for JsonFileInventorySource {
    async fn load(&self) -> Result<Vec<VehicleRecord>, SourceError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => SourceError::NotFound(self.path.display().to_string()),
                _ => SourceError::Io(format!("{}: {}", self.path.display(), e)),
            })?;

        let vehicles: Vec<VehicleRecord> = serde_json::from_str(&raw)
            .map_err(|e| SourceError::Parse(format!("{}: {}", self.path.display(), e)))?;

        for vehicle in &vehicles {
            vehicle.validate()?;
        }

        debug!(path = %self.path.display(), vehicles = vehicles.len(), "Loaded inventory file");
        Ok(vehicles)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
