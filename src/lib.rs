//! A small test harness driven by tagged suite methods.
//!
//! A suite is a type implementing [`Suite`]: a zero-argument constructor and
//! an ordered list of [`Method`]s, each tagged with a lifecycle role. Suites
//! are collected in a [`Registry`] and run sequentially by [`App`], which
//! streams every outcome to a [`Reporter`](crate::reporter::Reporter).
//!
//! ```no_run
//! use tagrun::{assert_equals, DurationUnit, Failure, Method, Registry, Suite, TestContext, TestResult};
//!
//! #[derive(Default)]
//! struct Arithmetic;
//!
//! impl Arithmetic {
//!     fn adds(&self, _: &TestContext) -> TestResult {
//!         assert_equals(4, 2 + 2)
//!     }
//! }
//!
//! impl Suite for Arithmetic {
//!     fn create() -> Result<Self, Failure> {
//!         Ok(Arithmetic)
//!     }
//!
//!     fn methods() -> Vec<Method<Self>> {
//!         vec![Method::test("adds", Self::adds).timeout(DurationUnit::millis(100))]
//!     }
//! }
//!
//! let mut registry = Registry::new();
//! registry.register::<Arithmetic>();
//! std::process::exit(tagrun::launcher::launch(registry));
//! ```

#[macro_use]
extern crate log;

pub mod app;
pub mod configuration;
pub mod launcher;
pub mod reporter;
pub mod time;

pub use crate::app::assert::{assert_equals, assert_not_equals, assert_true, Failure, TestResult};
pub use crate::app::context::TestContext;
pub use crate::app::error::RunError;
pub use crate::app::hooks::{Method, MethodRole, Tag};
pub use crate::app::outcome::Outcome;
pub use crate::app::registry::{Registry, SuiteDescriptor};
pub use crate::app::suite::Suite;
pub use crate::app::App;
pub use crate::time::{DurationUnit, TimeUnit};
