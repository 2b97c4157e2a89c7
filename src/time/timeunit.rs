use crate::time::error::Error;
use core::str::FromStr;
use lazy_static::*;
use regex::Regex;
use std::fmt;
use std::time::Duration;

lazy_static! {
    static ref DURATION_REGEX: Regex = Regex::new(
        r"^(?P<value>\d+)\s*(?P<unit>ns|us|ms|s|m|h|d){1}$"
    )
    .expect("Regex compilation error");
}

/// A wall-clock budget expressed as `(value, unit)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationUnit {
    value: u64,
    unit: TimeUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Nanosecond,
    Microsecond,
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
}

impl DurationUnit {
    pub const fn new(value: u64, unit: TimeUnit) -> Self {
        Self { value, unit }
    }

    pub const fn millis(value: u64) -> Self {
        Self::new(value, TimeUnit::Millisecond)
    }

    pub const fn seconds(value: u64) -> Self {
        Self::new(value, TimeUnit::Second)
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    pub fn as_duration(&self) -> Duration {
        (*self).into()
    }
}

impl FromStr for DurationUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = DURATION_REGEX.captures(s.trim()).ok_or_else(|| {
            Error::Syntax(format!("'{}' is not correct duration unit value", s))
        })?;
        let value = caps["value"]
            .parse()
            .map_err(|_| Error::Syntax(format!("'{}' does not fit into duration value", s)))?;
        let unit = caps["unit"].parse::<TimeUnit>()?;
        Ok(Self { value, unit })
    }
}

impl From<DurationUnit> for Duration {
    fn from(unit: DurationUnit) -> Self {
        let value = unit.value;
        match unit.unit {
            TimeUnit::Nanosecond => Duration::from_nanos(value),
            TimeUnit::Microsecond => Duration::from_micros(value),
            TimeUnit::Millisecond => Duration::from_millis(value),
            TimeUnit::Second => Duration::from_secs(value),
            TimeUnit::Minute => Duration::from_secs(value.saturating_mul(60)),
            TimeUnit::Hour => Duration::from_secs(value.saturating_mul(60 * 60)),
            TimeUnit::Day => Duration::from_secs(value.saturating_mul(60 * 60 * 24)),
        }
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

impl FromStr for TimeUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ns" | "nanosecond" | "nanos" | "nanoseconds" => Ok(TimeUnit::Nanosecond),
            "us" | "microsecond" | "micros" | "microseconds" => Ok(TimeUnit::Microsecond),
            "ms" | "millisecond" | "millis" | "milliseconds" => Ok(TimeUnit::Millisecond),
            "s" | "second" | "secs" | "seconds" => Ok(TimeUnit::Second),
            "m" | "minute" | "mins" | "minutes" => Ok(TimeUnit::Minute),
            "h" | "hour" | "hours" => Ok(TimeUnit::Hour),
            "d" | "day" | "days" => Ok(TimeUnit::Day),
            _ => Err(Error::UnitNotSupported(format!("Unit '{}' not supported", s))),
        }
    }
}

// Names appear verbatim in timeout messages.
impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            TimeUnit::Nanosecond => "NANOSECONDS",
            TimeUnit::Microsecond => "MICROSECONDS",
            TimeUnit::Millisecond => "MILLISECOND",
            TimeUnit::Second => "SECONDS",
            TimeUnit::Minute => "MINUTES",
            TimeUnit::Hour => "HOURS",
            TimeUnit::Day => "DAYS",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use crate::time::timeunit::DurationUnit;
    use crate::time::timeunit::TimeUnit;
    use std::time::Duration;

    #[test]
    fn test_building_time_unit_from_string() {
        let cases = [
            ("ns", TimeUnit::Nanosecond),
            ("us", TimeUnit::Microsecond),
            ("ms", TimeUnit::Millisecond),
            ("s", TimeUnit::Second),
            ("m", TimeUnit::Minute),
            ("h", TimeUnit::Hour),
            ("d", TimeUnit::Day),
        ];
        for (value, expected) in cases.iter() {
            let result = value.parse::<TimeUnit>();
            assert!(result.is_ok());
            assert_eq!(result.unwrap(), *expected);
        }
    }

    #[test]
    fn test_unknown_unit_is_rejected() {
        assert!("fortnight".parse::<TimeUnit>().is_err());
        assert!("10 fortnights".parse::<DurationUnit>().is_err());
    }

    #[test]
    fn test_conversion_duration_unit_to_duration() {
        let value = "200ms";
        let unit = value.parse::<DurationUnit>().unwrap();
        let result: Duration = unit.into();

        assert_eq!(result, Duration::from_millis(200));
        assert_eq!(
            DurationUnit::new(2, TimeUnit::Minute).as_duration(),
            Duration::from_secs(120)
        );
    }

    #[test]
    fn test_display_matches_timeout_message_format() {
        assert_eq!(DurationUnit::millis(50).to_string(), "50 MILLISECOND");
        assert_eq!(DurationUnit::seconds(3).to_string(), "3 SECONDS");
        assert_eq!(DurationUnit::new(1, TimeUnit::Minute).to_string(), "1 MINUTES");
    }
}
