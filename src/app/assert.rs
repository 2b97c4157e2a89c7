//! Assertion helpers and the failure signal returned by suite methods.
//!
//! A test body reports a failed expectation by returning
//! [`Failure::Mismatch`]; that variant, and only that variant, is classified
//! as an assertion failure. Everything else a body returns or panics with is
//! treated as an error.

use std::fmt::{Debug, Display};
use thiserror::Error;

pub type TestResult = Result<(), Failure>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Failure {
    #[error("expected [{expected}] but was [{actual}]")]
    Mismatch { expected: String, actual: String },
    #[error("{0}")]
    Error(String),
}

impl Failure {
    pub fn mismatch(expected: impl Display, actual: impl Display) -> Self {
        Failure::Mismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    pub fn error(cause: impl Display) -> Self {
        Failure::Error(cause.to_string())
    }
}

impl From<String> for Failure {
    fn from(cause: String) -> Self {
        Failure::Error(cause)
    }
}

impl From<&str> for Failure {
    fn from(cause: &str) -> Self {
        Failure::Error(cause.to_owned())
    }
}

pub fn assert_equals<T>(expected: T, actual: T) -> TestResult
where
    T: PartialEq + Debug,
{
    trace!("Check equals of {:?} to {:?}", expected, actual);
    if expected == actual {
        Ok(())
    } else {
        Err(Failure::Mismatch {
            expected: format!("{:?}", expected),
            actual: format!("{:?}", actual),
        })
    }
}

pub fn assert_not_equals<T>(unexpected: T, actual: T) -> TestResult
where
    T: PartialEq + Debug,
{
    if unexpected != actual {
        Ok(())
    } else {
        Err(Failure::Mismatch {
            expected: format!("not {:?}", unexpected),
            actual: format!("{:?}", actual),
        })
    }
}

pub fn assert_true(condition: bool) -> TestResult {
    if condition {
        Ok(())
    } else {
        Err(Failure::mismatch(true, false))
    }
}

/// Returns early from the enclosing suite method with a mismatch when both
/// sides differ. Values are rendered with `Display`.
#[macro_export]
macro_rules! ensure_eq {
    ($expected: expr, $actual: expr) => {
        match (&$expected, &$actual) {
            (expected, actual) => {
                if expected != actual {
                    return Err($crate::app::assert::Failure::mismatch(expected, actual));
                }
            }
        }
    };
}
