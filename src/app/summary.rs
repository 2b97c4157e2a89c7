use crate::app::outcome::Outcome;
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    pub passed: usize,
    pub failed: usize,
    pub timed_out: usize,
    pub errored: usize,
}

impl Tally {
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Passed => self.passed += 1,
            Outcome::AssertionFailed { .. } => self.failed += 1,
            Outcome::TimedOut { .. } => self.timed_out += 1,
            Outcome::Errored { .. } => self.errored += 1,
        }
    }

    pub fn merge(&mut self, other: &Tally) {
        self.passed += other.passed;
        self.failed += other.failed;
        self.timed_out += other.timed_out;
        self.errored += other.errored;
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed + self.timed_out + self.errored
    }

    pub fn all_passed(&self) -> bool {
        self.passed == self.total()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteSummary {
    pub suite: &'static str,
    pub tally: Tally,
}

impl SuiteSummary {
    pub fn new(suite: &'static str) -> Self {
        Self {
            suite,
            tally: Tally::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub name: String,
    pub suites: usize,
    pub skipped_suites: usize,
    pub aborted: bool,
    pub tally: Tally,
    pub duration: Duration,
}

impl RunSummary {
    pub fn success(&self) -> bool {
        !self.aborted && self.tally.all_passed()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_tally_counts_each_outcome_kind() {
        let mut tally = Tally::default();
        tally.record(&Outcome::Passed);
        tally.record(&Outcome::Passed);
        tally.record(&Outcome::TimedOut {
            message: String::new(),
        });
        tally.record(&Outcome::Errored {
            cause: String::new(),
        });

        assert_eq!(tally.total(), 4);
        assert_eq!(tally.passed, 2);
        assert!(!tally.all_passed());
    }

    #[test]
    fn test_empty_run_is_successful() {
        assert!(RunSummary::default().success());
    }
}
