//! Inventory access
//!
//! - [`store::InventoryStore`] - TTL cache over the persisted dataset
//! - [`filter_engine::FilterEngine`] - the searches exposed to agents

pub mod filter_engine;
pub mod store;

pub use filter_engine::FilterEngine;
pub use store::{DEFAULT_CACHE_TTL_SECS, InventoryStore};
