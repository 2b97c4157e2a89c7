//! Reporting sinks.
//!
//! The executor emits semantic events through [`Reporter`]; presentation is
//! entirely up to the sink. Sinks never influence control flow.

pub mod allure;
pub mod console;
pub mod logging;
pub(crate) mod serialize;

use crate::app::error::RunError;
use crate::app::outcome::Outcome;
use crate::app::summary::{RunSummary, SuiteSummary};
use chrono::{DateTime, Utc};
use std::time::Duration;

pub use self::allure::AllureReporter;
pub use self::console::ConsoleReporter;
pub use self::logging::LogReporter;

/// One finished test.
#[derive(Debug, Clone, PartialEq)]
pub struct TestReport {
    pub suite: &'static str,
    pub name: &'static str,
    pub description: Option<String>,
    pub outcome: Outcome,
    pub started: DateTime<Utc>,
    pub elapsed: Duration,
}

impl TestReport {
    pub fn full_name(&self) -> String {
        format!("{}::{}", self.suite, self.name)
    }
}

pub trait Reporter {
    fn on_suite_start(&mut self, _suite: &'static str, _tests: usize) {}

    /// Emitted before the described test runs.
    fn on_description(&mut self, _suite: &'static str, _test: &'static str, _text: &str) {}

    fn on_outcome(&mut self, report: &TestReport);

    fn on_suite_complete(&mut self, _summary: &SuiteSummary) {}

    fn on_suite_aborted(&mut self, _error: &RunError) {}

    fn on_run_complete(&mut self, _summary: &RunSummary) {}
}

/// Fans every event out to each sink in order.
#[derive(Default)]
pub struct Reporters {
    sinks: Vec<Box<dyn Reporter>>,
}

impl Reporters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, sink: impl Reporter + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    pub fn push(&mut self, sink: Box<dyn Reporter>) {
        self.sinks.push(sink);
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl Reporter for Reporters {
    fn on_suite_start(&mut self, suite: &'static str, tests: usize) {
        self.sinks.iter_mut().for_each(|s| s.on_suite_start(suite, tests));
    }

    fn on_description(&mut self, suite: &'static str, test: &'static str, text: &str) {
        self.sinks.iter_mut().for_each(|s| s.on_description(suite, test, text));
    }

    fn on_outcome(&mut self, report: &TestReport) {
        self.sinks.iter_mut().for_each(|s| s.on_outcome(report));
    }

    fn on_suite_complete(&mut self, summary: &SuiteSummary) {
        self.sinks.iter_mut().for_each(|s| s.on_suite_complete(summary));
    }

    fn on_suite_aborted(&mut self, error: &RunError) {
        self.sinks.iter_mut().for_each(|s| s.on_suite_aborted(error));
    }

    fn on_run_complete(&mut self, summary: &RunSummary) {
        self.sinks.iter_mut().for_each(|s| s.on_run_complete(summary));
    }
}
