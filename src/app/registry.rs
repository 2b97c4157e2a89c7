use crate::app::classify::classify;
use crate::app::error::RunError;
use crate::app::executor::LifecycleExecutor;
use crate::app::suite::{instantiate, Suite};
use crate::app::summary::SuiteSummary;
use crate::reporter::Reporter;
use core::slice::Iter;
use derivative::*;

type SuiteRun = fn(&mut dyn Reporter) -> Result<SuiteSummary, RunError>;

/// Type-erased handle on a registered suite.
#[derive(Derivative, Clone, Copy)]
#[derivative(Debug)]
pub struct SuiteDescriptor {
    name: &'static str,
    #[derivative(Debug = "ignore")]
    run: SuiteRun,
}

impl SuiteDescriptor {
    pub fn of<S: Suite>() -> Self {
        Self {
            name: S::name(),
            run: run_suite::<S>,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Runs a fresh instance of the suite through its whole lifecycle.
    pub fn execute(&self, reporter: &mut dyn Reporter) -> Result<SuiteSummary, RunError> {
        (self.run)(reporter)
    }
}

fn run_suite<S: Suite>(reporter: &mut dyn Reporter) -> Result<SuiteSummary, RunError> {
    let suite = S::name();
    let instance = instantiate::<S>()?;
    let methods = classify(suite, S::methods())?;
    reporter.on_suite_start(suite, methods.tests.len());
    let summary = LifecycleExecutor::new(suite, instance, methods, reporter).run()?;
    reporter.on_suite_complete(&summary);
    Ok(summary)
}

/// Registered suites in registration order. Duplicates are kept and run
/// independently.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    suites: Vec<SuiteDescriptor>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<S: Suite>(&mut self) -> &mut Self {
        self.suites.push(SuiteDescriptor::of::<S>());
        self
    }

    pub fn register_all<I>(&mut self, suites: I) -> &mut Self
    where
        I: IntoIterator<Item = SuiteDescriptor>,
    {
        self.suites.extend(suites);
        self
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, SuiteDescriptor> {
        self.suites.iter()
    }

    #[inline]
    pub fn amount(&self) -> usize {
        self.suites.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.suites.is_empty()
    }
}

/// Builds a list of [`SuiteDescriptor`]s for [`Registry::register_all`].
#[macro_export]
macro_rules! suites {
    ($($suite: ty),* $(,)?) => {
        vec![$($crate::app::registry::SuiteDescriptor::of::<$suite>()),*]
    };
}
