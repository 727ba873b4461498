//! Inventory store
//!
//! Owns the current [`InventorySnapshot`] and reloads it from the
//! [`InventorySource`] once it is older than the TTL. When the source cannot
//! be read the store keeps serving what it has, or installs the canonical
//! fleet if it has nothing yet. The source is never retried within a refresh.

use std::sync::{Arc, RwLock};

use advisor_domain::{
    InventorySnapshot, InventorySummary, SnapshotOrigin, VehicleRecord, canonical_fleet,
};
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, warn};

use crate::ports::clock::Clock;
use crate::ports::inventory_source::{InventorySource, SourceError};

pub const DEFAULT_CACHE_TTL_SECS: u64 = 86_400;

pub struct InventoryStore {
    source: Arc<dyn InventorySource>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
    current: RwLock<Option<Arc<InventorySnapshot>>>,
}

impl InventoryStore {
    pub fn new(source: Arc<dyn InventorySource>, clock: Arc<dyn Clock>) -> Self {
        Self {
            source,
            clock,
            ttl: Duration::seconds(DEFAULT_CACHE_TTL_SECS as i64),
            current: RwLock::new(None),
        }
    }

    pub fn with_ttl_secs(mut self, secs: u64) -> Self {
        self.ttl = Duration::seconds(secs.min(i64::MAX as u64 / 1_000) as i64);
        self
    }

    /// Current snapshot, reloading first if it is missing or expired.
    pub async fn get_inventory(&self) -> Arc<InventorySnapshot> {
        let now = self.clock.now();
        if let Some(snapshot) = self.current()
            && !snapshot.is_expired(now, self.ttl)
        {
            return snapshot;
        }
        debug!(source = %self.source.describe(), "Inventory cache miss");
        self.reload(now).await
    }

    /// Forces a reload regardless of age.
    pub async fn refresh(&self) -> Arc<InventorySnapshot> {
        self.reload(self.clock.now()).await
    }

    /// Snapshot currently installed, without triggering a load
    pub fn current(&self) -> Option<Arc<InventorySnapshot>> {
        match self.current.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub async fn summary(&self) -> InventorySummary {
        self.get_inventory().await.summary()
    }

    async fn reload(&self, now: DateTime<Utc>) -> Arc<InventorySnapshot> {
        match self.source.load().await {
            Ok(vehicles) => {
                let snapshot = self.install(vehicles, now, SnapshotOrigin::Source);
                info!(
                    vehicles = snapshot.len(),
                    source = %self.source.describe(),
                    "Inventory refreshed"
                );
                snapshot
            }
            Err(e) => self.recover(e, now),
        }
    }

    fn recover(&self, error: SourceError, now: DateTime<Utc>) -> Arc<InventorySnapshot> {
        if let Some(stale) = self.current() {
            warn!(error = %error, "Inventory refresh failed, keeping previous snapshot");
            return stale;
        }
        warn!(error = %error, "Inventory source unavailable, using built-in fleet");
        self.install(canonical_fleet(), now, SnapshotOrigin::Fallback)
    }

    fn install(
        &self,
        vehicles: Vec<VehicleRecord>,
        now: DateTime<Utc>,
        origin: SnapshotOrigin,
    ) -> Arc<InventorySnapshot> {
        let snapshot = Arc::new(InventorySnapshot::new(vehicles, now, origin));
        let mut guard = match self.current.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Some(Arc::clone(&snapshot));
        snapshot
    }
}
