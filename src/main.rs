//! Showcase harness: runs a couple of sample suites that exercise every
//! outcome kind.

#[macro_use]
extern crate log;

use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::thread::sleep;
use std::time::Duration;

use tagrun::{
    assert_equals, ensure_eq, suites, DurationUnit, Failure, Method, Registry, Suite, TestContext,
    TestResult,
};

#[derive(Default)]
struct CalculatorSuite {
    accumulator: AtomicI64,
}

impl CalculatorSuite {
    fn connect(&self, _: &TestContext) -> TestResult {
        info!("Calculator ready");
        Ok(())
    }

    fn reset(&self, _: &TestContext) -> TestResult {
        self.accumulator.store(0, Ordering::SeqCst);
        Ok(())
    }

    fn adds(&self, _: &TestContext) -> TestResult {
        self.accumulator.fetch_add(2, Ordering::SeqCst);
        self.accumulator.fetch_add(3, Ordering::SeqCst);
        assert_equals(5, self.accumulator.load(Ordering::SeqCst))
    }

    fn subtracts(&self, _: &TestContext) -> TestResult {
        self.accumulator.fetch_add(5, Ordering::SeqCst);
        self.accumulator.fetch_sub(3, Ordering::SeqCst);
        ensure_eq!(2, self.accumulator.load(Ordering::SeqCst));
        Ok(())
    }

    fn multiplies(&self, _: &TestContext) -> TestResult {
        self.accumulator.store(2 * 3, Ordering::SeqCst);
        assert_equals(7, self.accumulator.load(Ordering::SeqCst))
    }

    fn answers_quickly(&self, _: &TestContext) -> TestResult {
        sleep(Duration::from_millis(10));
        Ok(())
    }

    fn waits_forever(&self, context: &TestContext) -> TestResult {
        while !context.is_cancelled() {
            sleep(Duration::from_millis(5));
        }
        Ok(())
    }

    fn divides_by_zero(&self, _: &TestContext) -> TestResult {
        let divisor = self.accumulator.load(Ordering::SeqCst);
        if divisor == 0 {
            return Err(Failure::error("division by zero"));
        }
        Ok(())
    }

    fn disconnect(&self, _: &TestContext) -> TestResult {
        info!("Calculator closed");
        Ok(())
    }
}

impl Suite for CalculatorSuite {
    fn create() -> Result<Self, Failure> {
        Ok(Self::default())
    }

    fn methods() -> Vec<Method<Self>> {
        vec![
            Method::before_all("connect", Self::connect),
            Method::before_each("reset", Self::reset),
            Method::test("adds", Self::adds).description("2 + 3 should be 5"),
            Method::test("subtracts", Self::subtracts),
            Method::test("multiplies", Self::multiplies)
                .description("deliberately wrong expectation"),
            Method::test("answers_quickly", Self::answers_quickly)
                .timeout(DurationUnit::millis(500)),
            Method::test("waits_forever", Self::waits_forever)
                .description("never finishes on its own")
                .timeout(DurationUnit::millis(50)),
            Method::test("divides_by_zero", Self::divides_by_zero),
            Method::after_all("disconnect", Self::disconnect),
        ]
    }
}

#[derive(Default)]
struct CounterSuite {
    runs: AtomicUsize,
}

impl CounterSuite {
    fn counts_from_fresh_instance(&self, _: &TestContext) -> TestResult {
        assert_equals(1, self.runs.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

impl Suite for CounterSuite {
    fn create() -> Result<Self, Failure> {
        Ok(Self::default())
    }

    fn methods() -> Vec<Method<Self>> {
        vec![Method::test(
            "counts_from_fresh_instance",
            Self::counts_from_fresh_instance,
        )]
    }
}

fn main() {
    let mut registry = Registry::new();
    registry
        .register::<CalculatorSuite>()
        .register_all(suites![CounterSuite, CounterSuite]);
    std::process::exit(tagrun::launcher::launch(registry));
}
