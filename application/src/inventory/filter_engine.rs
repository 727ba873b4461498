//! Filter engine
//!
//! The inventory searches available to agents. Every search reads the current
//! snapshot from the [`InventoryStore`], keeps only in-stock records and
//! preserves snapshot order. No match is an empty vector, never an error.

use std::sync::Arc;

use advisor_domain::{GeneralQuery, VehicleFilter, VehicleRecord};
use tracing::debug;

use super::store::InventoryStore;

pub struct FilterEngine {
    store: Arc<InventoryStore>,
}

impl FilterEngine {
    pub fn new(store: Arc<InventoryStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<InventoryStore> {
        &self.store
    }

    /// Price within `[min, max]`
    pub async fn by_budget(&self, min: f64, max: f64) -> Vec<VehicleRecord> {
        self.run(VehicleFilter::budget(min, max)).await
    }

    /// `type` or `category` equal to any of `types`, ignoring case
    pub async fn by_type(&self, types: &[String]) -> Vec<VehicleRecord> {
        self.run(VehicleFilter::types(types)).await
    }

    /// At least one of `required` appears in the feature list
    pub async fn by_features(&self, required: &[String]) -> Vec<VehicleRecord> {
        self.run(VehicleFilter::features(required)).await
    }

    pub async fn by_fuel_type(&self, fuel_types: &[String]) -> Vec<VehicleRecord> {
        self.run(VehicleFilter::fuel_types(fuel_types)).await
    }

    /// Free-text search: every signal found in `text` must hold.
    pub async fn general(&self, text: &str) -> Vec<VehicleRecord> {
        let snapshot = self.store.get_inventory().await;
        let parsed = GeneralQuery::parse(text, snapshot.vehicles());
        let result = parsed.filter().apply(snapshot.vehicles());
        debug!(
            query = %text,
            filter = %parsed.filter().describe(),
            matches = result.len(),
            "General vehicle search"
        );
        result
    }

    /// What `general` would understand from `text`, without running it
    pub async fn explain(&self, text: &str) -> GeneralQuery {
        let snapshot = self.store.get_inventory().await;
        GeneralQuery::parse(text, snapshot.vehicles())
    }

    async fn run(&self, filter: VehicleFilter) -> Vec<VehicleRecord> {
        let snapshot = self.store.get_inventory().await;
        let result = filter.apply(snapshot.vehicles());
        debug!(
            filter = %filter.describe(),
            matches = result.len(),
            "Vehicle search"
        );
        result
    }
}
