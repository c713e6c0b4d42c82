//! Progress reporting for store operations

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use photofeed_application::{Operation, ProgressNotifier};
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Shows a spinner while an operation waits out its round-trip
pub struct ProgressReporter {
    spinners: Mutex<HashMap<Operation, ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinners: Mutex::new(HashMap::new()),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_operation_start(&self, operation: Operation) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(Self::spinner_style());
        spinner.set_message(format!("{}...", operation.label()));
        spinner.enable_steady_tick(Duration::from_millis(80));

        let mut spinners = self.spinners.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = spinners.insert(operation, spinner) {
            previous.finish_and_clear();
        }
    }

    fn on_operation_complete(&self, operation: Operation, success: bool) {
        let spinner = self
            .spinners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&operation);
        if let Some(spinner) = spinner {
            if success {
                spinner.finish_and_clear();
            } else {
                spinner.finish_with_message(format!("{} {}", "x".red(), operation.label()));
            }
        }
    }
}

/// Plain-text progress for non-interactive output (pipes, CI logs)
pub struct SimpleProgress;

impl SimpleProgress {
    fn start_line(operation: Operation) -> String {
        format!("{} {}...", "->".cyan(), operation.label())
    }

    fn complete_line(operation: Operation, success: bool) -> String {
        if success {
            format!("  {} {}", "v".green(), operation)
        } else {
            format!("  {} {} (failed)", "x".red(), operation)
        }
    }
}

impl ProgressNotifier for SimpleProgress {
    fn on_operation_start(&self, operation: Operation) {
        eprintln!("{}", Self::start_line(operation));
    }

    fn on_operation_complete(&self, operation: Operation, success: bool) {
        eprintln!("{}", Self::complete_line(operation, success));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_lifecycle() {
        let reporter = ProgressReporter::new();
        reporter.on_operation_start(Operation::LoadFeed);
        reporter.on_operation_start(Operation::Like);
        assert_eq!(reporter.spinners.lock().unwrap().len(), 2);

        reporter.on_operation_complete(Operation::LoadFeed, true);
        reporter.on_operation_complete(Operation::Like, false);
        assert!(reporter.spinners.lock().unwrap().is_empty());
    }

    #[test]
    fn test_complete_without_start_is_ignored() {
        let reporter = ProgressReporter::new();
        reporter.on_operation_complete(Operation::Comment, true);
        assert!(reporter.spinners.lock().unwrap().is_empty());
    }

    #[test]
    fn test_simple_progress_lines() {
        assert!(SimpleProgress::start_line(Operation::SignIn).contains("Signing in..."));
        assert!(SimpleProgress::complete_line(Operation::Like, true).ends_with("like"));
        assert!(
            SimpleProgress::complete_line(Operation::CreatePost, false)
                .ends_with("create_post (failed)")
        );
    }
}
