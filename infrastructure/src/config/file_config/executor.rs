//! Executor configuration from TOML (`[executor]` section)

use std::time::Duration;

use advisor_application::ExecutionParams;
use advisor_domain::RetryPolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileExecutorConfig {
    /// Total attempts for the top-level agent
    pub max_retries: u32,
    /// Limit for one agent attempt, and for one specialist in a fan-out
    pub attempt_timeout_secs: u64,
    /// Base backoff between attempts, doubled after each failure
    pub backoff_unit_ms: u64,
    /// Minimum length of an acceptable answer
    pub min_response_chars: usize,
}

impl Default for FileExecutorConfig {
    fn default() -> Self {
        let policy = RetryPolicy::default();
        Self {
            max_retries: policy.max_retries,
            attempt_timeout_secs: policy.attempt_timeout.as_secs(),
            backoff_unit_ms: policy.backoff_unit.as_millis() as u64,
            min_response_chars: policy.min_response_chars,
        }
    }
}

impl FileExecutorConfig {
    pub fn to_execution_params(&self) -> ExecutionParams {
        let timeout = Duration::from_secs(self.attempt_timeout_secs);
        ExecutionParams::default()
            .with_max_retries(self.max_retries)
            .with_attempt_timeout(timeout)
            .with_backoff_unit(Duration::from_millis(self.backoff_unit_ms))
            .with_min_response_chars(self.min_response_chars)
            .with_specialist_timeout(timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_retry_policy() {
        let params = FileExecutorConfig::default().to_execution_params();
        assert_eq!(params.retry, RetryPolicy::default());
        assert_eq!(params.specialist_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_conversion() {
        let config = FileExecutorConfig {
            max_retries: 4,
            attempt_timeout_secs: 12,
            backoff_unit_ms: 500,
            min_response_chars: 20,
        };
        let params = config.to_execution_params();
        assert_eq!(params.retry.max_retries, 4);
        assert_eq!(params.retry.attempt_timeout, Duration::from_secs(12));
        assert_eq!(params.retry.backoff_unit, Duration::from_millis(500));
        assert_eq!(params.specialist_timeout, Duration::from_secs(12));
    }
}
