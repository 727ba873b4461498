//! Query value object

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// A shopper's free-text request (Value Object)
///
/// Represents the input that is classified, filtered against the
/// inventory and handed to the recommendation agents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    content: String,
}

impl Query {
    /// Create a new query, rejecting empty or whitespace-only text
    pub fn try_new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            Err(DomainError::InvalidQuery(
                "query cannot be empty".to_string(),
            ))
        } else {
            Ok(Self { content })
        }
    }

    /// Get the query content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Lowercased copy used by keyword and pattern matching
    pub fn lowercase(&self) -> String {
        self.content.to_lowercase()
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<&str> for Query {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Query::try_new(s)
    }
}
