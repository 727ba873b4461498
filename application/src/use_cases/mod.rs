//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod dispatch_specialists;
pub mod recommend;
pub mod resilient_execution;

#[cfg(test)]
pub(crate) mod test_support;
