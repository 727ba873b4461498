//! Core domain concepts shared across all subdomains.
//!
//! - [`query::Query`]: a validated shopper query
//! - [`error::DomainError`]: domain-level errors
//! - [`string`]: text helpers used for previews and fallback messages

pub mod error;
pub mod query;
pub mod string;
