//! Orchestration value objects - per-request inputs and transient results.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::core::query::Query;
use crate::intent::{IntentClassifier, SpecialistCategory};
use crate::session::Message;

/// Output of a single specialist invocation within a fan-out
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialistResult {
    /// Which specialist produced this result
    pub category: SpecialistCategory,
    /// The specialist's raw output text
    pub content: String,
    /// Whether the invocation succeeded
    pub success: bool,
    /// Error message if failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SpecialistResult {
    /// Creates a successful result carrying the specialist's output.
    pub fn success(category: SpecialistCategory, content: impl Into<String>) -> Self {
        Self {
            category,
            content: content.into(),
            success: true,
            error: None,
        }
    }

    /// Creates a failed result. The content is left empty.
    pub fn failure(category: SpecialistCategory, error: impl Into<String>) -> Self {
        Self {
            category,
            content: String::new(),
            success: false,
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Text block handed back to the manager agent for synthesis
    pub fn render(&self) -> String {
        if self.success {
            format!("[{} specialist]\n{}", self.category, self.content)
        } else {
            format!(
                "[{} specialist] unavailable: {}",
                self.category,
                self.error.as_deref().unwrap_or("unknown error")
            )
        }
    }
}

/// A user request together with everything derived from it up front
#[derive(Debug, Clone)]
pub struct QueryContext {
    query: Query,
    history: Vec<Message>,
    categories: BTreeSet<SpecialistCategory>,
}

impl QueryContext {
    /// Builds the context, classifying the query once.
    pub fn new(query: Query, history: Vec<Message>) -> Self {
        let categories = IntentClassifier::classify(query.content());
        Self {
            query,
            history,
            categories,
        }
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    pub fn categories(&self) -> &BTreeSet<SpecialistCategory> {
        &self.categories
    }

    pub fn is_multi_intent(&self) -> bool {
        self.categories.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specialist_result_success() {
        let result = SpecialistResult::success(SpecialistCategory::Eco, "Tesla Model 3");
        assert!(result.is_success());
        assert!(result.error.is_none());
        assert_eq!(result.render(), "[eco specialist]\nTesla Model 3");
    }

    #[test]
    fn test_specialist_result_failure() {
        let result = SpecialistResult::failure(SpecialistCategory::Luxury, "timed out");
        assert!(!result.is_success());
        assert!(result.content.is_empty());
        assert_eq!(result.render(), "[luxury specialist] unavailable: timed out");
    }

    #[test]
    fn test_query_context_classifies_once() {
        let query = Query::try_new("Affordable hybrid for the kids").unwrap();
        let ctx = QueryContext::new(query, vec![Message::user("hi")]);

        assert_eq!(ctx.history().len(), 1);
        assert!(ctx.is_multi_intent());
        assert_eq!(
            ctx.categories().iter().copied().collect::<Vec<_>>(),
            vec![
                SpecialistCategory::Budget,
                SpecialistCategory::Family,
                SpecialistCategory::Eco
            ]
        );
    }
}
