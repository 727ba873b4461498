//! Progress reporting for advisor requests

use advisor_application::DispatchProgress;
use advisor_domain::{FailureReason, SpecialistCategory};
use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Reports progress with an agent spinner and a specialist bar
///
/// One reporter serves many requests; call [`finish`](Self::finish) after
/// each answer to clear the bars.
pub struct ProgressReporter {
    multi: MultiProgress,
    agent_bar: Mutex<Option<ProgressBar>>,
    dispatch_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            agent_bar: Mutex::new(None),
            dispatch_bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn dispatch_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("  {spinner:.yellow} {prefix:.bold.yellow} [{bar:20.yellow/dim}] {pos}/{len} {msg}")
            .map(|style| style.progress_chars("=>-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar())
    }

    /// Clear every bar left from the last request
    pub fn finish(&self) {
        if let Some(pb) = lock(&self.dispatch_bar).take() {
            pb.finish_and_clear();
        }
        if let Some(pb) = lock(&self.agent_bar).take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn lock(slot: &Mutex<Option<ProgressBar>>) -> MutexGuard<'_, Option<ProgressBar>> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

fn category_list(categories: &[SpecialistCategory]) -> String {
    categories
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl DispatchProgress for ProgressReporter {
    fn on_attempt_start(&self, agent: &str, attempt: u32, max_attempts: u32) {
        let mut slot = lock(&self.agent_bar);
        let pb = slot.get_or_insert_with(|| {
            let pb = self.multi.add(ProgressBar::new_spinner());
            pb.set_style(Self::spinner_style());
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        });
        pb.set_prefix(agent.to_string());
        if attempt == 0 {
            pb.set_message("thinking...");
        } else {
            pb.set_message(format!("attempt {}/{}", attempt + 1, max_attempts));
        }
    }

    fn on_retry(&self, _agent: &str, reason: &FailureReason, delay: Duration) {
        if let Some(pb) = lock(&self.agent_bar).as_ref() {
            pb.set_message(format!(
                "{} {} - retrying in {:.1}s",
                "!".yellow(),
                reason,
                delay.as_secs_f64()
            ));
        }
    }

    fn on_dispatch_start(&self, categories: &[SpecialistCategory]) {
        let pb = self.multi.add(ProgressBar::new(categories.len() as u64));
        pb.set_style(Self::dispatch_style());
        pb.set_prefix("Specialists");
        pb.set_message(category_list(categories));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Some(old) = lock(&self.dispatch_bar).replace(pb) {
            old.finish_and_clear();
        }
    }

    fn on_specialist_complete(&self, category: SpecialistCategory, success: bool) {
        if let Some(pb) = lock(&self.dispatch_bar).as_ref() {
            let status = if success {
                format!("{} {}", "v".green(), category)
            } else {
                format!("{} {}", "x".red(), category)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_dispatch_complete(&self, succeeded: usize, total: usize) {
        if let Some(pb) = lock(&self.dispatch_bar).take() {
            pb.finish_with_message(format!("{}/{} answered", succeeded, total));
        }
    }
}

/// Simple text-based progress (no fancy UI), written to stderr
pub struct SimpleProgress;

impl DispatchProgress for SimpleProgress {
    fn on_attempt_start(&self, agent: &str, attempt: u32, max_attempts: u32) {
        if attempt > 0 {
            eprintln!(
                "{} {} attempt {}/{}",
                "->".cyan(),
                agent.bold(),
                attempt + 1,
                max_attempts
            );
        }
    }

    fn on_retry(&self, agent: &str, reason: &FailureReason, delay: Duration) {
        eprintln!(
            "  {} {} failed: {} (retrying in {:.1}s)",
            "!".yellow(),
            agent,
            reason,
            delay.as_secs_f64()
        );
    }

    fn on_dispatch_start(&self, categories: &[SpecialistCategory]) {
        eprintln!(
            "{} {} ({})",
            "->".cyan(),
            "Consulting specialists".bold(),
            category_list(categories)
        );
    }

    fn on_specialist_complete(&self, category: SpecialistCategory, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), category);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), category);
        }
    }
}
