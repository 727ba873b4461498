//! Recommend vehicles use case
//!
//! Top-level entry for a shopper's question: builds the [`QueryContext`],
//! then runs the manager agent through the [`ResilientExecutor`] with the
//! full tool set (inventory searches, single specialists, multi-agent query).

use std::sync::Arc;

use advisor_domain::{AgentProfile, DomainError, Message, Query, QueryContext};
use tracing::info;

use super::resilient_execution::ResilientExecutor;
use crate::ports::llm_gateway::AgentRequest;
use crate::ports::tool_executor::ToolExecutorPort;

pub struct RecommendVehicles {
    executor: ResilientExecutor,
    /// Manager tool set
    tools: Arc<dyn ToolExecutorPort>,
    profile: AgentProfile,
}

impl RecommendVehicles {
    pub fn new(
        executor: ResilientExecutor,
        tools: Arc<dyn ToolExecutorPort>,
        manager_model: impl Into<String>,
    ) -> Self {
        Self {
            executor,
            tools,
            profile: AgentProfile::manager(manager_model),
        }
    }

    /// Answer `query` in the light of `history`.
    ///
    /// Only an empty query is rejected; agent failures surface as fallback
    /// text.
    pub async fn answer(&self, query: &str, history: &[Message]) -> Result<String, DomainError> {
        let context = QueryContext::new(Query::try_new(query)?, history.to_vec());
        info!(
            categories = ?context.categories().iter().map(|c| c.as_str()).collect::<Vec<_>>(),
            history = context.history().len(),
            "Answering vehicle query"
        );

        let request = AgentRequest::new(self.profile.clone(), context.query().content())
            .with_history(context.history().to_vec());
        Ok(self.executor.execute(&request, self.tools.as_ref()).await)
    }
}
