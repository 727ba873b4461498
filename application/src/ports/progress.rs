//! Progress notification port
//!
//! Defines the interface for reporting progress while agents run.

use std::time::Duration;

use advisor_domain::{FailureReason, SpecialistCategory};

/// Callback for progress updates during a request
///
/// Implementations live in the presentation layer. Every method has a no-op
/// default so reporters only implement what they display.
pub trait DispatchProgress: Send + Sync {
    /// Called when the specialists for a query are about to start
    fn on_dispatch_start(&self, _categories: &[SpecialistCategory]) {}

    /// Called when one specialist finishes, successfully or not
    fn on_specialist_complete(&self, _category: SpecialistCategory, _success: bool) {}

    /// Called once every specialist of a dispatch has finished
    fn on_dispatch_complete(&self, _succeeded: usize, _total: usize) {}

    /// Called before each attempt of the resilient executor (0-based)
    fn on_attempt_start(&self, _agent: &str, _attempt: u32, _max_attempts: u32) {}

    /// Called when an attempt failed and another one is scheduled
    fn on_retry(&self, _agent: &str, _reason: &FailureReason, _delay: Duration) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl DispatchProgress for NoProgress {}
