use crate::app::error::RunError;
use crate::app::outcome::Outcome;
use crate::app::summary::{RunSummary, SuiteSummary};
use crate::reporter::{Reporter, TestReport};
use std::time::Duration;

/// Mirrors every event into the `log` facade.
#[derive(Debug, Default)]
pub struct LogReporter {
    slow_threshold: Option<Duration>,
}

impl LogReporter {
    pub fn new(slow_threshold: Option<Duration>) -> Self {
        Self { slow_threshold }
    }
}

impl Reporter for LogReporter {
    fn on_suite_start(&mut self, suite: &'static str, tests: usize) {
        info!("Starting suite '{}' with {} tests", suite, tests);
    }

    fn on_description(&mut self, suite: &'static str, test: &'static str, text: &str) {
        debug!("'{}::{}': {}", suite, test, text);
    }

    fn on_outcome(&mut self, report: &TestReport) {
        let elapsed = report.elapsed.as_millis();
        match &report.outcome {
            Outcome::Passed => info!("'{}' passed in {} ms", report.full_name(), elapsed),
            Outcome::AssertionFailed { expected, actual } => error!(
                "'{}' failed in {} ms: expected [{}], actual [{}]",
                report.full_name(),
                elapsed,
                expected,
                actual
            ),
            Outcome::TimedOut { message } => {
                error!("'{}' timed out: {}", report.full_name(), message)
            }
            Outcome::Errored { cause } => {
                error!("'{}' broken in {} ms: {}", report.full_name(), elapsed, cause)
            }
        }
        if let Some(threshold) = self.slow_threshold {
            if report.elapsed > threshold {
                warn!(
                    "'{}' is slow: {} ms over a {} ms threshold",
                    report.full_name(),
                    elapsed,
                    threshold.as_millis()
                );
            }
        }
    }

    fn on_suite_complete(&mut self, summary: &SuiteSummary) {
        info!(
            "Finished suite '{}': {}/{} passed",
            summary.suite,
            summary.tally.passed,
            summary.tally.total()
        );
    }

    fn on_suite_aborted(&mut self, error: &RunError) {
        error!("{}", error);
    }

    fn on_run_complete(&mut self, summary: &RunSummary) {
        info!(
            "Run '{}' finished in {} ms, success: {}",
            summary.name,
            summary.duration.as_millis(),
            summary.success()
        );
    }
}
