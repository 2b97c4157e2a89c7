//! Allure-compatible result files, one JSON document per test.

pub mod model;

use self::model::label::Label;
use self::model::stage::Stage;
use self::model::status::{Status, StatusDetails};
use self::model::test_result::TestResult;
use crate::app::outcome::Outcome;
use crate::configuration::constants::cargo_env::CARGO_PKG_NAME;
use crate::reporter::{Reporter, TestReport};
use chrono::Duration as ChronoDuration;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct AllureReporter {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl AllureReporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Files written so far, in emission order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

pub(crate) fn to_result(report: &TestReport) -> Option<TestResult> {
    let elapsed = ChronoDuration::from_std(report.elapsed).unwrap_or_else(|_| ChronoDuration::zero());
    let stage = match report.outcome {
        Outcome::TimedOut { .. } => Stage::Interrupted,
        _ => Stage::Finished,
    };
    let built = TestResult::builder()
        .uuid(uuid::Uuid::new_v4())
        .name(report.name.to_owned())
        .full_name(report.full_name())
        .status(Status::from(&report.outcome))
        .status_details(StatusDetails::from(&report.outcome))
        .stage(stage)
        .description(report.description.clone())
        .labels(vec![
            Label::Suite(report.suite.to_owned()),
            Label::TestMethod(report.name.to_owned()),
            Label::Framework(CARGO_PKG_NAME.to_owned()),
            Label::Language("rust".to_owned()),
        ])
        .start(report.started)
        .stop(report.started + elapsed)
        .build();
    match built {
        Ok(result) => Some(result),
        Err(e) => {
            error!("Cannot build result of '{}': {}", report.full_name(), e);
            None
        }
    }
}

impl Reporter for AllureReporter {
    fn on_outcome(&mut self, report: &TestReport) {
        let result = match to_result(report) {
            Some(result) => result,
            None => return,
        };
        match result.save_into(&self.dir) {
            Ok(path) => {
                trace!("Saved result {} into {}", result.uuid(), path.display());
                self.written.push(path);
            }
            Err(e) => error!("Cannot save result of '{}': {}", report.full_name(), e),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::Utc;
    use serde_json::Value;
    use std::fs;
    use std::time::Duration;

    fn report(outcome: Outcome) -> TestReport {
        TestReport {
            suite: "Calculator",
            name: "divides",
            description: Some("integer division".to_owned()),
            outcome,
            started: Utc::now(),
            elapsed: Duration::from_millis(12),
        }
    }

    #[test]
    fn test_writes_one_file_per_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let mut reporter = AllureReporter::new(dir.path().join("allure-results"));
        reporter.on_outcome(&report(Outcome::Passed));
        reporter.on_outcome(&report(Outcome::Errored {
            cause: "panicked: attempt to divide by zero".to_owned(),
        }));

        assert_eq!(reporter.written().len(), 2);
        let content = fs::read_to_string(&reporter.written()[1]).unwrap();
        let json: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(json["status"], "broken");
        assert_eq!(json["fullName"], "Calculator::divides");
        assert_eq!(json["description"], "integer division");
        assert_eq!(
            json["statusDetails"]["message"],
            "panicked: attempt to divide by zero"
        );
        assert_eq!(json["labels"][0]["name"], "suite");
        assert_eq!(json["labels"][0]["value"], "Calculator");
        assert_eq!(
            json["stop"].as_i64().unwrap() - json["start"].as_i64().unwrap(),
            12
        );
    }

    #[test]
    fn test_timeout_is_interrupted_failure() {
        let result = to_result(&report(Outcome::TimedOut {
            message: "Expected running time is 50 MILLISECOND".to_owned(),
        }))
        .unwrap();
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["status"], "failed");
        assert_eq!(json["stage"], "interrupted");
        assert_eq!(
            json["statusDetails"]["message"],
            "Timed out. Expected running time is 50 MILLISECOND"
        );
    }
}
