//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Invalid vehicle record {id}: {reason}")]
    InvalidRecord { id: String, reason: String },

    #[error("Unknown specialist category: {0}")]
    UnknownCategory(String),
}

impl DomainError {
    /// Shorthand for an invariant violation on a vehicle record.
    pub fn invalid_record(id: impl Into<String>, reason: impl Into<String>) -> Self {
        DomainError::InvalidRecord {
            id: id.into(),
            reason: reason.into(),
        }
    }
}
