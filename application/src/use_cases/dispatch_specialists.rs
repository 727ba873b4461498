//! Specialist dispatch use case
//!
//! Classifies a query and runs every matching specialist concurrently on a
//! `JoinSet`, waiting for all of them. Each specialist is bounded by its own
//! timeout; a failure, timeout or panic in one specialist becomes a failed
//! [`SpecialistResult`] and never affects its siblings. Results come back in
//! category order. Synthesis is left to the caller.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use advisor_domain::{
    AgentProfile, FailureReason, IntentClassifier, SpecialistCategory, SpecialistResult,
};
use serde_json::json;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{AgentRequest, GatewayError, LlmGateway};
use crate::ports::progress::{DispatchProgress, NoProgress};
use crate::ports::tool_executor::ToolExecutorPort;

pub struct SpecialistOrchestrator {
    gateway: Arc<dyn LlmGateway>,
    /// Tools handed to specialists; inventory searches only
    tools: Arc<dyn ToolExecutorPort>,
    model: String,
    timeout: Duration,
    logger: Arc<dyn ConversationLogger>,
    progress: Arc<dyn DispatchProgress>,
}

impl SpecialistOrchestrator {
    pub fn new(
        gateway: Arc<dyn LlmGateway>,
        tools: Arc<dyn ToolExecutorPort>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            gateway,
            tools,
            model: model.into(),
            timeout,
            logger: Arc::new(NoConversationLogger),
            progress: Arc::new(NoProgress),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_progress(mut self, progress: Arc<dyn DispatchProgress>) -> Self {
        self.progress = progress;
        self
    }

    /// Run every specialist the query's keywords point to.
    pub async fn dispatch(&self, query: &str) -> Vec<SpecialistResult> {
        let categories = IntentClassifier::classify(query);
        self.dispatch_to(&categories, query).await
    }

    /// Run a single specialist.
    pub async fn consult(&self, category: SpecialistCategory, input: &str) -> SpecialistResult {
        self.dispatch_to(&BTreeSet::from([category]), input)
            .await
            .pop()
            .unwrap_or_else(|| SpecialistResult::failure(category, "specialist produced no result"))
    }

    /// Run the given specialists concurrently and wait for all of them.
    pub async fn dispatch_to(
        &self,
        categories: &BTreeSet<SpecialistCategory>,
        query: &str,
    ) -> Vec<SpecialistResult> {
        if categories.is_empty() {
            debug!("No specialist categories matched, skipping dispatch");
            return Vec::new();
        }

        let ordered: Vec<SpecialistCategory> = categories.iter().copied().collect();
        info!(
            specialists = ?ordered.iter().map(|c| c.as_str()).collect::<Vec<_>>(),
            "Dispatching specialists"
        );
        self.progress.on_dispatch_start(&ordered);

        let mut join_set = JoinSet::new();
        for &category in &ordered {
            let gateway = Arc::clone(&self.gateway);
            let tools = Arc::clone(&self.tools);
            let request = AgentRequest::new(AgentProfile::specialist(category, &self.model), query);
            let timeout = self.timeout;

            join_set.spawn(async move {
                let result =
                    Self::run_specialist(gateway.as_ref(), tools.as_ref(), &request, timeout).await;
                (category, result)
            });
        }

        let mut pending: BTreeSet<SpecialistCategory> = categories.clone();
        let mut results = Vec::with_capacity(ordered.len());

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((category, Ok(content))) => {
                    info!(category = %category, "Specialist responded");
                    pending.remove(&category);
                    results.push(self.record(SpecialistResult::success(category, content)));
                }
                Ok((category, Err(reason))) => {
                    warn!(category = %category, error = %reason, "Specialist failed");
                    pending.remove(&category);
                    let failure = SpecialistResult::failure(category, reason.to_string());
                    results.push(self.record(failure));
                }
                Err(e) => {
                    warn!("Specialist task join error: {}", e);
                }
            }
        }

        // Tasks that panicked never reported their category
        for category in pending {
            results.push(self.record(SpecialistResult::failure(
                category,
                "specialist task aborted unexpectedly",
            )));
        }

        results.sort_by_key(|r| r.category);
        let succeeded = results.iter().filter(|r| r.is_success()).count();
        self.progress.on_dispatch_complete(succeeded, results.len());
        results
    }

    async fn run_specialist(
        gateway: &dyn LlmGateway,
        tools: &dyn ToolExecutorPort,
        request: &AgentRequest,
        timeout: Duration,
    ) -> Result<String, FailureReason> {
        match tokio::time::timeout(timeout, gateway.invoke(request, tools)).await {
            Err(_) | Ok(Err(GatewayError::Timeout)) => Err(FailureReason::Timeout),
            Ok(Err(e)) => Err(FailureReason::Error(e.to_string())),
            Ok(Ok(output)) if output.final_output.trim().is_empty() => {
                Err(FailureReason::Error("empty response".to_string()))
            }
            Ok(Ok(output)) => Ok(output.final_output),
        }
    }

    fn record(&self, result: SpecialistResult) -> SpecialistResult {
        self.progress
            .on_specialist_complete(result.category, result.is_success());
        self.logger.log(ConversationEvent::new(
            "specialist_result",
            json!({
                "category": result.category.as_str(),
                "success": result.success,
                "content": result.content,
                "error": result.error,
            }),
        ));
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::*;
    use SpecialistCategory::*;

    fn orchestrator(gateway: &Arc<ScriptedGateway>) -> SpecialistOrchestrator {
        SpecialistOrchestrator::new(
            gateway.clone(),
            Arc::new(NoTools::new()),
            "test-model",
            Duration::from_secs(30),
        )
    }

    fn answer_for(request: &AgentRequest) -> Step {
        let category = request.profile.category().unwrap();
        reply(&format!("{} pick: Toyota Camry", category))
    }

    #[tokio::test]
    async fn test_zero_categories_skips_gateway() {
        let gateway = Arc::new(ScriptedGateway::per_request(answer_for));
        let results = orchestrator(&gateway).dispatch("show me a pickup truck").await;

        assert!(results.is_empty());
        assert_eq!(gateway.calls(), 0);
    }

    #[tokio::test]
    async fn test_results_sorted_by_category() {
        let gateway = Arc::new(ScriptedGateway::per_request(answer_for));
        let results = orchestrator(&gateway)
            .dispatch("I need a cheap electric car for my family")
            .await;

        assert_eq!(
            results.iter().map(|r| r.category).collect::<Vec<_>>(),
            vec![Budget, Family, Eco]
        );
        assert!(results.iter().all(|r| r.is_success()));
        assert_eq!(results[2].content, "eco pick: Toyota Camry");
        assert_eq!(gateway.calls(), 3);
    }

    #[tokio::test]
    async fn test_specialists_receive_their_own_profile() {
        let gateway = Arc::new(ScriptedGateway::per_request(answer_for));
        orchestrator(&gateway).dispatch("premium hybrid").await;

        let mut categories: Vec<_> = gateway
            .requests()
            .iter()
            .map(|r| r.profile.category().unwrap())
            .collect();
        categories.sort();
        assert_eq!(categories, vec![Luxury, Eco]);
        assert!(gateway.requests().iter().all(|r| r.query == "premium hybrid"));
    }

    #[tokio::test]
    async fn test_one_failure_does_not_block_others() {
        let gateway = Arc::new(ScriptedGateway::per_request(|request| {
            match request.profile.category() {
                Some(Family) => Step::Fail(GatewayError::RequestFailed("HTTP 503".into())),
                _ => answer_for(request),
            }
        }));
        let progress = Arc::new(RecordingProgress::default());
        let results = orchestrator(&gateway)
            .with_progress(progress.clone())
            .dispatch("affordable and safe")
            .await;

        assert_eq!(results.len(), 2);
        assert!(results[0].is_success());
        assert!(!results[1].is_success());
        assert!(results[1].error.as_deref().unwrap().contains("HTTP 503"));

        let events = progress.events.lock().unwrap().clone();
        assert_eq!(events.first().map(String::as_str), Some("start 2"));
        assert_eq!(events.last().map(String::as_str), Some("done 1/2"));
    }

    #[tokio::test]
    async fn test_panicking_specialist_is_isolated() {
        let gateway = Arc::new(ScriptedGateway::per_request(|request| {
            match request.profile.category() {
                Some(Luxury) => Step::Panic,
                _ => answer_for(request),
            }
        }));
        let results = orchestrator(&gateway).dispatch("luxury eco car").await;

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].category, Luxury);
        assert!(!results[0].is_success());
        assert_eq!(results[1].category, Eco);
        assert!(results[1].is_success());
    }

    #[tokio::test(start_paused = true)]
    async fn test_hanging_specialist_times_out() {
        let gateway = Arc::new(ScriptedGateway::per_request(|request| {
            match request.profile.category() {
                Some(Budget) => Step::Hang,
                _ => answer_for(request),
            }
        }));
        let logger = Arc::new(RecordingLogger::default());
        let results = orchestrator(&gateway)
            .with_logger(logger.clone())
            .dispatch("budget family car")
            .await;

        assert!(!results[0].is_success());
        assert_eq!(results[0].error.as_deref(), Some("request timed out"));
        assert!(results[1].is_success());
        assert_eq!(logger.types(), vec!["specialist_result", "specialist_result"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_specialists_run_concurrently() {
        let gateway = Arc::new(ScriptedGateway::per_request(|_| Step::Hang));

        let started = tokio::time::Instant::now();
        let results = orchestrator(&gateway)
            .dispatch("cheap premium electric car for my family")
            .await;
        let elapsed = started.elapsed();

        assert_eq!(results.len(), 4);
        assert_eq!(gateway.calls(), 4);
        assert!(results.iter().all(|r| !r.is_success()));
        // One shared 30 s timeout, not one per specialist
        assert!(elapsed >= Duration::from_secs(30));
        assert!(elapsed < Duration::from_secs(31));
    }

    #[tokio::test]
    async fn test_consult_single_specialist() {
        let gateway = Arc::new(ScriptedGateway::per_request(answer_for));
        let result = orchestrator(&gateway).consult(Luxury, "anything").await;

        assert_eq!(result.category, Luxury);
        assert_eq!(result.content, "luxury pick: Toyota Camry");
        assert_eq!(gateway.calls(), 1);
    }
}
