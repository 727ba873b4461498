//! Resilience rules for agent execution
//!
//! Pure pieces of the retry state machine: the [`RetryPolicy`] knobs, the
//! [`FailureReason`] an attempt can end with, the output quality gate and the
//! deterministic fallback text. The async loop that drives them lives in the
//! application layer.

pub mod fallback;
pub mod policy;
pub mod quality;

pub use fallback::fallback_response;
pub use policy::{FailureReason, RetryPolicy};
pub use quality::{QualityVerdict, assess_quality, is_quality};
