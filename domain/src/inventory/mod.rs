//! Inventory domain
//!
//! - [`vehicle::VehicleRecord`]: one vehicle as stocked by the dealership
//! - [`snapshot::InventorySnapshot`]: immutable, wholesale-replaced view of the fleet
//! - [`fleet::canonical_fleet`]: the hand-curated fleet used when no source is readable

pub mod fleet;
pub mod snapshot;
pub mod vehicle;

pub use fleet::canonical_fleet;
pub use snapshot::{InventorySnapshot, InventorySummary, SnapshotOrigin};
pub use vehicle::{IN_STOCK, VehicleRecord};
