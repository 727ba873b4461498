//! Application-level configuration.
//!
//! - [`ExecutionParams`] - retry loop and fan-out timing

pub mod execution_params;

pub use execution_params::ExecutionParams;
