//! Inventory snapshot value object

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::vehicle::VehicleRecord;

/// Where the records of a snapshot came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotOrigin {
    /// Read from the persisted inventory source
    Source,
    /// Generated from the canonical fleet after a failed read
    Fallback,
}

impl SnapshotOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            SnapshotOrigin::Source => "source",
            SnapshotOrigin::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for SnapshotOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered vehicle records plus the time they were loaded.
///
/// Never mutated after construction: a refresh builds a new snapshot and
/// swaps it in, so readers holding an `Arc` keep a consistent view.
#[derive(Debug, Clone)]
pub struct InventorySnapshot {
    vehicles: Vec<VehicleRecord>,
    loaded_at: DateTime<Utc>,
    origin: SnapshotOrigin,
}

impl InventorySnapshot {
    pub fn new(
        vehicles: Vec<VehicleRecord>,
        loaded_at: DateTime<Utc>,
        origin: SnapshotOrigin,
    ) -> Self {
        Self {
            vehicles,
            loaded_at,
            origin,
        }
    }

    pub fn vehicles(&self) -> &[VehicleRecord] {
        &self.vehicles
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn origin(&self) -> SnapshotOrigin {
        self.origin
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// In-stock vehicles, in snapshot order.
    pub fn in_stock(&self) -> impl Iterator<Item = &VehicleRecord> {
        self.vehicles.iter().filter(|v| v.is_in_stock())
    }

    /// Age of the snapshot at `now`.
    pub fn age_at(&self, now: DateTime<Utc>) -> Duration {
        now - self.loaded_at
    }

    /// A snapshot expires once its age strictly exceeds `ttl`.
    pub fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        self.age_at(now) > ttl
    }

    pub fn summary(&self) -> InventorySummary {
        InventorySummary {
            total: self.len(),
            in_stock: self.in_stock().count(),
            units_in_stock: self.in_stock().map(|v| v.stock_count as u64).sum(),
            origin: self.origin,
            loaded_at: self.loaded_at,
        }
    }
}

/// Headline numbers about the current snapshot, for status lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventorySummary {
    pub total: usize,
    pub in_stock: usize,
    pub units_in_stock: u64,
    pub origin: SnapshotOrigin,
    pub loaded_at: DateTime<Utc>,
}

impl std::fmt::Display for InventorySummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Inventory loaded: {} vehicles available ({} models in stock, {} units, {} data)",
            self.total, self.in_stock, self.units_in_stock, self.origin
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::canonical_fleet;

    fn snapshot_at(loaded_at: DateTime<Utc>) -> InventorySnapshot {
        InventorySnapshot::new(canonical_fleet(), loaded_at, SnapshotOrigin::Fallback)
    }

    #[test]
    fn test_expiry_is_strictly_after_ttl() {
        let t0 = Utc::now();
        let snapshot = snapshot_at(t0);
        let ttl = Duration::seconds(86_400);

        assert!(!snapshot.is_expired(t0, ttl));
        assert!(!snapshot.is_expired(t0 + ttl, ttl));
        assert!(snapshot.is_expired(t0 + ttl + Duration::seconds(1), ttl));
    }

    #[test]
    fn test_summary_counts_in_stock_only() {
        let mut fleet = canonical_fleet();
        fleet[0].availability = "on_order".to_string();
        let snapshot = InventorySnapshot::new(fleet, Utc::now(), SnapshotOrigin::Source);

        let summary = snapshot.summary();
        assert_eq!(summary.total, 6);
        assert_eq!(summary.in_stock, 5);
        // Camry's 12 units are excluded
        assert_eq!(summary.units_in_stock, 8 + 7 + 9 + 5 + 15);
        assert!(summary.to_string().starts_with("Inventory loaded: 6 vehicles available"));
    }

    #[test]
    fn test_origin_display() {
        assert_eq!(SnapshotOrigin::Source.to_string(), "source");
        assert_eq!(SnapshotOrigin::Fallback.to_string(), "fallback");
    }
}
