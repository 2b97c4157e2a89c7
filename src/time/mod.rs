pub mod error;
pub mod timeunit;

pub use self::timeunit::{DurationUnit, TimeUnit};
