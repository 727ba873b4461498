//! Resilient agent execution
//!
//! Runs one agent under a [`RetryPolicy`]: every attempt is bounded by a
//! timeout, its output must pass the quality gate, failures back off
//! exponentially, and once the attempts are exhausted a deterministic
//! apology is returned instead of an error.
//!
//! ```text
//! ATTEMPT(n) ──ok──────────────────────────────▶ output
//!     │
//!     └─ timeout | error | quality fail
//!           ├─ n + 1 < max_retries: sleep unit·2ⁿ ─▶ ATTEMPT(n + 1)
//!           └─ otherwise ───────────────────────▶ fallback text
//! ```

use std::sync::Arc;

use advisor_domain::resilience::{QualityVerdict, assess_quality};
use advisor_domain::{FailureReason, RetryPolicy, fallback_response};
use serde_json::json;
use tracing::{info, warn};

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{AgentRequest, GatewayError, LlmGateway};
use crate::ports::progress::{DispatchProgress, NoProgress};
use crate::ports::tool_executor::ToolExecutorPort;

pub struct ResilientExecutor {
    gateway: Arc<dyn LlmGateway>,
    policy: RetryPolicy,
    logger: Arc<dyn ConversationLogger>,
    progress: Arc<dyn DispatchProgress>,
}

impl ResilientExecutor {
    pub fn new(gateway: Arc<dyn LlmGateway>, policy: RetryPolicy) -> Self {
        Self {
            gateway,
            policy,
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

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Run the agent until it produces an acceptable answer or the attempts
    /// run out. Never fails: the worst case is the fallback text.
    pub async fn execute(&self, request: &AgentRequest, tools: &dyn ToolExecutorPort) -> String {
        let agent = request.profile.name.as_str();
        let max_attempts = self.policy.max_retries.max(1);
        let mut attempt = 0;

        loop {
            self.progress.on_attempt_start(agent, attempt, max_attempts);
            self.logger.log(ConversationEvent::new(
                "agent_attempt",
                json!({
                    "agent": agent,
                    "attempt": attempt + 1,
                    "max_attempts": max_attempts,
                    "query": request.query,
                }),
            ));

            let reason = match self.attempt(request, tools).await {
                Ok(output) => {
                    info!(agent, attempt = attempt + 1, "Agent produced an answer");
                    self.logger.log(ConversationEvent::new(
                        "agent_success",
                        json!({
                            "agent": agent,
                            "attempt": attempt + 1,
                            "bytes": output.len(),
                        }),
                    ));
                    return output;
                }
                Err(reason) => reason,
            };

            if !self.policy.has_next(attempt) {
                warn!(agent, attempts = max_attempts, error = %reason, "Agent failed, returning fallback");
                self.logger.log(ConversationEvent::new(
                    "agent_fallback",
                    json!({
                        "agent": agent,
                        "attempts": max_attempts,
                        "reason": reason.kind(),
                        "error": reason.to_string(),
                    }),
                ));
                return fallback_response(&request.query, &reason.to_string());
            }

            let delay = self.policy.backoff_for(attempt);
            warn!(
                agent,
                attempt = attempt + 1,
                error = %reason,
                delay_ms = delay.as_millis() as u64,
                "Agent attempt failed, retrying"
            );
            self.logger.log(ConversationEvent::new(
                "agent_retry",
                json!({
                    "agent": agent,
                    "attempt": attempt + 1,
                    "reason": reason.kind(),
                    "error": reason.to_string(),
                    "delay_ms": delay.as_millis() as u64,
                }),
            ));
            self.progress.on_retry(agent, &reason, delay);
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }

    async fn attempt(
        &self,
        request: &AgentRequest,
        tools: &dyn ToolExecutorPort,
    ) -> Result<String, FailureReason> {
        let invocation = self.gateway.invoke(request, tools);
        let output = match tokio::time::timeout(self.policy.attempt_timeout, invocation).await {
            Err(_) | Ok(Err(GatewayError::Timeout)) => return Err(FailureReason::Timeout),
            Ok(Err(e)) => return Err(FailureReason::Error(e.to_string())),
            Ok(Ok(output)) => output.final_output,
        };

        match assess_quality(&output, self.policy.min_response_chars) {
            QualityVerdict::Acceptable => Ok(output),
            verdict => Err(FailureReason::QualityFail(verdict.to_string())),
        }
    }
}
