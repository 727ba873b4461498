//! Configuration value objects for the domain layer
//!
//! Issue types reported by configuration validation, shared by the
//! infrastructure loader and the CLI that prints them.

mod validation;

pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
