//! Execution parameters - use case loop control.
//!
//! [`ExecutionParams`] groups the static parameters that control the
//! [`ResilientExecutor`](crate::use_cases::resilient_execution::ResilientExecutor)
//! loop and the specialist fan-out. These are application-layer concerns, not
//! domain policy.

use advisor_domain::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionParams {
    /// Attempts, per-attempt timeout and backoff for the top-level agent.
    pub retry: RetryPolicy,
    /// Upper bound for one specialist invocation inside a fan-out.
    pub specialist_timeout: Duration,
}

impl Default for ExecutionParams {
    fn default() -> Self {
        Self {
            retry: RetryPolicy::default(),
            specialist_timeout: Duration::from_secs(30),
        }
    }
}

impl ExecutionParams {
    // ==================== Builder Methods ====================

    pub fn with_max_retries(mut self, max: u32) -> Self {
        self.retry.max_retries = max;
        self
    }

    pub fn with_attempt_timeout(mut self, timeout: Duration) -> Self {
        self.retry.attempt_timeout = timeout;
        self
    }

    pub fn with_backoff_unit(mut self, unit: Duration) -> Self {
        self.retry.backoff_unit = unit;
        self
    }

    pub fn with_min_response_chars(mut self, chars: usize) -> Self {
        self.retry.min_response_chars = chars;
        self
    }

    pub fn with_specialist_timeout(mut self, timeout: Duration) -> Self {
        self.specialist_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = ExecutionParams::default();
        assert_eq!(params.retry.max_retries, 3);
        assert_eq!(params.retry.attempt_timeout, Duration::from_secs(30));
        assert_eq!(params.specialist_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_builders() {
        let params = ExecutionParams::default()
            .with_max_retries(5)
            .with_backoff_unit(Duration::from_millis(10))
            .with_min_response_chars(20)
            .with_specialist_timeout(Duration::from_secs(5));
        assert_eq!(params.retry.max_retries, 5);
        assert_eq!(params.retry.backoff_unit, Duration::from_millis(10));
        assert_eq!(params.retry.min_response_chars, 20);
        assert_eq!(params.specialist_timeout, Duration::from_secs(5));
    }
}
