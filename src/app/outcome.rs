use crate::app::assert::{Failure, TestResult};
use crate::app::suite::panic_message;
use std::thread;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    AssertionFailed { expected: String, actual: String },
    TimedOut { message: String },
    Errored { cause: String },
}

impl Outcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }

    /// Classifies what a finished invocation produced, panics included.
    pub(crate) fn classify(result: thread::Result<TestResult>) -> Self {
        match result {
            Ok(Ok(())) => Outcome::Passed,
            Ok(Err(Failure::Mismatch { expected, actual })) => {
                Outcome::AssertionFailed { expected, actual }
            }
            Ok(Err(Failure::Error(cause))) => Outcome::Errored { cause },
            Err(payload) => Outcome::Errored {
                cause: panic_message(payload.as_ref()),
            },
        }
    }
}
