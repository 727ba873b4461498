//! Retry policy and attempt outcomes

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Bounds for one resilient execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first one
    pub max_retries: u32,
    /// Hard limit on a single attempt
    pub attempt_timeout: Duration,
    /// Base delay; attempt `n` waits `backoff_unit * 2^n` before retrying
    pub backoff_unit: Duration,
    /// Minimum trimmed length of an acceptable answer
    pub min_response_chars: usize,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            attempt_timeout: Duration::from_secs(30),
            backoff_unit: Duration::from_secs(1),
            min_response_chars: 50,
        }
    }
}

impl RetryPolicy {
    /// Delay after the failed attempt `attempt` (0-based).
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        self.backoff_unit.saturating_mul(2u32.saturating_pow(attempt))
    }

    /// Whether another attempt follows a failure of attempt `attempt` (0-based).
    pub fn has_next(&self, attempt: u32) -> bool {
        attempt + 1 < self.max_retries.max(1)
    }
}

/// Why an attempt did not produce a usable answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum FailureReason {
    Timeout,
    Error(String),
    QualityFail(String),
}

impl FailureReason {
    pub fn kind(&self) -> &'static str {
        match self {
            FailureReason::Timeout => "timeout",
            FailureReason::Error(_) => "error",
            FailureReason::QualityFail(_) => "quality_fail",
        }
    }
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureReason::Timeout => write!(f, "request timed out"),
            FailureReason::Error(e) => write!(f, "{}", e),
            FailureReason::QualityFail(reason) => write!(f, "response quality check failed: {}", reason),
        }
    }
}
