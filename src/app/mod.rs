pub mod assert;
pub(crate) mod classify;
pub mod context;
pub mod error;
pub mod executor;
pub mod hooks;
pub mod outcome;
pub mod registry;
pub mod suite;
pub mod summary;
pub(crate) mod timeout;

use crate::app::error::RunError;
use crate::app::registry::Registry;
use crate::app::summary::RunSummary;
use crate::configuration::settings::Settings;
use crate::reporter::Reporter;
use std::time::Instant;

/// Runs every selected suite of a registry, one after another.
pub struct App {
    settings: Settings,
    registry: Registry,
}

impl App {
    pub fn new(settings: Settings, registry: Registry) -> Self {
        App { settings, registry }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Stops at the first fatal error: the aborted suite is reported, the
    /// summary so far is delivered, and the error is returned.
    pub fn run(&self, reporter: &mut dyn Reporter) -> Result<RunSummary, RunError> {
        info!("Starting run '{}'", self.settings.name);
        info!("Registered {} suites", self.registry.amount());
        let started = Instant::now();
        let mut summary = RunSummary {
            name: self.settings.name.clone(),
            ..RunSummary::default()
        };
        let mut failure = None;
        for descriptor in self.registry.iter() {
            if !self.settings.selects(descriptor.name()) {
                debug!("Suite '{}' filtered out", descriptor.name());
                summary.skipped_suites += 1;
                continue;
            }
            summary.suites += 1;
            match descriptor.execute(reporter) {
                Ok(suite) => summary.tally.merge(&suite.tally),
                Err(e) => {
                    reporter.on_suite_aborted(&e);
                    summary.aborted = true;
                    failure = Some(e);
                    break;
                }
            }
        }
        summary.duration = started.elapsed();
        reporter.on_run_complete(&summary);
        match failure {
            Some(e) => Err(e),
            None => Ok(summary),
        }
    }
}
