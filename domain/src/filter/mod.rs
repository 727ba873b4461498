//! Attribute filters over inventory records
//!
//! Filters are a conjunction of [`VehiclePredicate`]s. Every filter built
//! here includes the in-stock predicate, so out-of-stock records are never
//! returned.
//!
//! - [`predicate::VehiclePredicate`]: one structured condition on a record
//! - [`vehicle_filter::VehicleFilter`]: conjunction applied in snapshot order
//! - [`general::GeneralQuery`]: free text → predicates via pattern extraction

pub mod general;
pub mod predicate;
pub mod vehicle_filter;

pub use general::GeneralQuery;
pub use predicate::VehiclePredicate;
pub use vehicle_filter::VehicleFilter;
