use crate::app::classify::{Classified, TestCase};
use crate::app::context::TestContext;
use crate::app::error::RunError;
use crate::app::hooks::{Method, MethodRole};
use crate::app::suite::{panic_message, Suite};
use crate::app::summary::SuiteSummary;
use crate::app::timeout;
use crate::reporter::{Reporter, TestReport};
use chrono::Utc;
use std::mem;
use std::sync::Arc;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Init,
    RunningOneTimeSetup,
    RunningTests,
    RunningOneTimeTeardown,
    Done,
    Aborted,
}

/// Drives one suite instance through its lifecycle.
pub(crate) struct LifecycleExecutor<'r, S> {
    suite: &'static str,
    instance: Arc<S>,
    methods: Classified<S>,
    state: LifecycleState,
    reporter: &'r mut dyn Reporter,
}

impl<'r, S: Suite> LifecycleExecutor<'r, S> {
    pub fn new(
        suite: &'static str,
        instance: Arc<S>,
        methods: Classified<S>,
        reporter: &'r mut dyn Reporter,
    ) -> Self {
        Self {
            suite,
            instance,
            methods,
            state: LifecycleState::Init,
            reporter,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn run(&mut self) -> Result<SuiteSummary, RunError> {
        self.transition(LifecycleState::RunningOneTimeSetup);
        invoke_hooks(
            self.suite,
            &*self.instance,
            &self.methods.one_time_setup,
            MethodRole::OneTimeSetup,
        )
        .map_err(|e| self.abort(e))?;

        self.transition(LifecycleState::RunningTests);
        let mut summary = SuiteSummary::new(self.suite);
        let tests = mem::take(&mut self.methods.tests);
        for case in &tests {
            let report = self.run_test(case)?;
            summary.tally.record(&report.outcome);
            self.reporter.on_outcome(&report);
        }

        self.transition(LifecycleState::RunningOneTimeTeardown);
        invoke_hooks(
            self.suite,
            &*self.instance,
            &self.methods.one_time_teardown,
            MethodRole::OneTimeTeardown,
        )
        .map_err(|e| self.abort(e))?;

        self.transition(LifecycleState::Done);
        Ok(summary)
    }

    fn run_test(&mut self, case: &TestCase<S>) -> Result<TestReport, RunError> {
        let name = case.method.name();
        invoke_hooks(
            self.suite,
            &*self.instance,
            &self.methods.per_test_setup,
            MethodRole::PerTestSetup,
        )
        .map_err(|e| self.abort(e))?;

        if let Some(text) = &case.description {
            self.reporter.on_description(self.suite, name, text);
        }

        debug!("Running test '{}::{}'", self.suite, name);
        let started = Utc::now();
        let clock = Instant::now();
        let outcome = timeout::guard(
            &self.instance,
            case.method.body(),
            TestContext::new(self.suite, name),
            case.timeout,
        );
        let elapsed = clock.elapsed();

        invoke_hooks(
            self.suite,
            &*self.instance,
            &self.methods.per_test_teardown,
            MethodRole::PerTestTeardown,
        )
        .map_err(|e| self.abort(e))?;

        Ok(TestReport {
            suite: self.suite,
            name,
            description: case.description.clone(),
            outcome,
            started,
            elapsed,
        })
    }

    fn transition(&mut self, next: LifecycleState) {
        debug!("Suite '{}': {:?} -> {:?}", self.suite, self.state, next);
        self.state = next;
    }

    fn abort(&mut self, error: RunError) -> RunError {
        error!("Suite '{}' aborted: {}", self.suite, error);
        self.transition(LifecycleState::Aborted);
        error
    }
}

// Hooks always run inline; any failure, assertion included, is fatal.
fn invoke_hooks<S>(
    suite: &'static str,
    instance: &S,
    hooks: &[Method<S>],
    role: MethodRole,
) -> Result<(), RunError> {
    for hook in hooks {
        trace!("Invoking {} '{}::{}'", role, suite, hook.name());
        let context = TestContext::new(suite, hook.name());
        let cause = match timeout::catch(instance, hook.body(), &context) {
            Ok(Ok(())) => continue,
            Ok(Err(failure)) => failure.to_string(),
            Err(payload) => panic_message(payload.as_ref()),
        };
        return Err(RunError::Hook {
            suite,
            method: hook.name(),
            role,
            cause,
        });
    }
    Ok(())
}
