//! Timeout guard for a single test invocation.
//!
//! Tests without a budget run inline on the executor's thread. A budgeted
//! test runs on its own short-lived worker thread while the executor waits on
//! a channel for at most the budget.
//!
//! Cancellation is best-effort. On timeout the guard flips the invocation's
//! cancellation token and moves on; a body that never checks
//! [`TestContext::is_cancelled`] keeps running on its detached worker after
//! the timeout has been reported. Arbitrary code cannot be safely killed, so
//! the worker is abandoned rather than terminated.

use crate::app::assert::TestResult;
use crate::app::context::{CancellationToken, TestContext};
use crate::app::hooks::Body;
use crate::app::outcome::Outcome;
use crate::time::DurationUnit;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;

pub(crate) fn guard<S>(
    instance: &Arc<S>,
    body: Body<S>,
    context: TestContext,
    budget: Option<DurationUnit>,
) -> Outcome
where
    S: Send + Sync + 'static,
{
    match budget {
        None => invoke_inline(&**instance, body, &context),
        Some(budget) => invoke_bounded(instance, body, context, budget),
    }
}

pub(crate) fn invoke_inline<S>(instance: &S, body: Body<S>, context: &TestContext) -> Outcome {
    Outcome::classify(catch(instance, body, context))
}

pub(crate) fn catch<S>(
    instance: &S,
    body: Body<S>,
    context: &TestContext,
) -> thread::Result<TestResult> {
    panic::catch_unwind(AssertUnwindSafe(|| body(instance, context)))
}

fn invoke_bounded<S>(
    instance: &Arc<S>,
    body: Body<S>,
    context: TestContext,
    budget: DurationUnit,
) -> Outcome
where
    S: Send + Sync + 'static,
{
    let token = CancellationToken::new();
    let context = context.with_token(token.clone());
    let label = format!("{}::{}", context.suite(), context.method());
    let worker_instance = Arc::clone(instance);
    let (sender, receiver) = mpsc::channel();

    let spawned = thread::Builder::new()
        .name(format!("tagrun-{}", context.method()))
        .spawn(move || {
            let result = catch(&*worker_instance, body, &context);
            // The receiver is gone once the guard has reported a timeout.
            let _ = sender.send(result);
        });
    if let Err(e) = spawned {
        return Outcome::Errored {
            cause: format!("cannot start worker: {}", e),
        };
    }

    trace!("Waiting up to {} for '{}'", budget, label);
    match receiver.recv_timeout(budget.as_duration()) {
        Ok(result) => Outcome::classify(result),
        Err(RecvTimeoutError::Timeout) => {
            token.cancel();
            warn!(
                "'{}' exceeded {}; cancellation requested, worker may still be running",
                label, budget
            );
            Outcome::TimedOut {
                message: format!("Expected running time is {}", budget),
            }
        }
        Err(RecvTimeoutError::Disconnected) => Outcome::Errored {
            cause: "worker stopped without reporting a result".to_owned(),
        },
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::app::assert::Failure;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::{Duration, Instant};

    #[derive(Default)]
    struct Probe {
        calls: AtomicUsize,
    }

    fn quick(probe: &Probe, _: &TestContext) -> TestResult {
        probe.calls.fetch_add(1, Ordering::SeqCst);
        thread::sleep(Duration::from_millis(10));
        Ok(())
    }

    fn mismatching(_: &Probe, _: &TestContext) -> TestResult {
        Err(Failure::mismatch("5", "3"))
    }

    fn failing(_: &Probe, _: &TestContext) -> TestResult {
        Err(Failure::error("io"))
    }

    fn panicking(_: &Probe, _: &TestContext) -> TestResult {
        panic!("worker boom")
    }

    fn cooperative_hang(_: &Probe, context: &TestContext) -> TestResult {
        while !context.is_cancelled() {
            thread::sleep(Duration::from_millis(5));
        }
        Ok(())
    }

    fn stubborn_hang(_: &Probe, _: &TestContext) -> TestResult {
        thread::sleep(Duration::from_secs(2));
        Ok(())
    }

    fn context() -> TestContext {
        TestContext::new("Probe", "case")
    }

    #[test]
    fn test_inline_mismatch_is_assertion_failure() {
        let probe = Arc::new(Probe::default());
        let outcome = guard(&probe, mismatching, context(), None);

        assert_eq!(
            outcome,
            Outcome::AssertionFailed {
                expected: "5".to_owned(),
                actual: "3".to_owned(),
            }
        );
    }

    #[test]
    fn test_completes_within_budget() {
        let probe = Arc::new(Probe::default());
        let outcome = guard(&probe, quick, context(), Some(DurationUnit::millis(500)));

        assert_eq!(outcome, Outcome::Passed);
        assert_eq!(probe.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_mismatch_on_worker_is_assertion_failure() {
        let probe = Arc::new(Probe::default());
        let outcome = guard(&probe, mismatching, context(), Some(DurationUnit::millis(500)));

        assert!(matches!(outcome, Outcome::AssertionFailed { .. }));
    }

    #[test]
    fn test_error_on_worker_is_errored() {
        let probe = Arc::new(Probe::default());
        let outcome = guard(&probe, failing, context(), Some(DurationUnit::millis(500)));

        assert_eq!(
            outcome,
            Outcome::Errored {
                cause: "io".to_owned()
            }
        );
    }

    #[test]
    fn test_panic_on_worker_is_errored() {
        let probe = Arc::new(Probe::default());
        let outcome = guard(&probe, panicking, context(), Some(DurationUnit::millis(500)));

        assert_eq!(
            outcome,
            Outcome::Errored {
                cause: "panicked: worker boom".to_owned()
            }
        );
    }

    #[test]
    fn test_hung_body_times_out() {
        let probe = Arc::new(Probe::default());
        let started = Instant::now();
        let outcome = guard(&probe, cooperative_hang, context(), Some(DurationUnit::millis(50)));

        assert_eq!(
            outcome,
            Outcome::TimedOut {
                message: "Expected running time is 50 MILLISECOND".to_owned()
            }
        );
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_uncooperative_body_is_abandoned() {
        let probe = Arc::new(Probe::default());
        let started = Instant::now();
        let outcome = guard(&probe, stubborn_hang, context(), Some(DurationUnit::millis(50)));

        assert!(matches!(outcome, Outcome::TimedOut { .. }));
        assert!(started.elapsed() < Duration::from_secs(1));
        // The abandoned worker still holds its handle on the instance.
        assert_eq!(Arc::strong_count(&probe), 2);
    }
}
