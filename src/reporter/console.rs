use crate::app::error::RunError;
use crate::app::outcome::Outcome;
use crate::app::summary::RunSummary;
use crate::reporter::{Reporter, TestReport};
use std::io::{self, Stdout, Write};

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Human readable lines, one per outcome.
pub struct ConsoleReporter<W: Write = Stdout> {
    out: W,
    color: bool,
}

impl ConsoleReporter<Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, color: &str, text: &str) {
        let written = if self.color && !color.is_empty() {
            writeln!(self.out, "{}{}{}", color, text, RESET)
        } else {
            writeln!(self.out, "{}", text)
        };
        if let Err(e) = written {
            error!("Cannot write console report: {}", e);
        }
    }
}

fn describe(report: &TestReport) -> String {
    let name = report.name;
    match &report.outcome {
        Outcome::Passed => format!("[Test method {}] is successful", name),
        Outcome::AssertionFailed { expected, actual } => format!(
            "[Test method {}] is failed. Expected = [{}]; actual = [{}]",
            name, expected, actual
        ),
        Outcome::TimedOut { message } => {
            format!("[Test method {}] is failed. Timed out. {}", name, message)
        }
        Outcome::Errored { cause } => format!("[Test method {}] is broken. {}", name, cause),
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn on_suite_start(&mut self, suite: &'static str, tests: usize) {
        self.line("", &format!("[Suite {}] running {} tests", suite, tests));
    }

    fn on_description(&mut self, _suite: &'static str, test: &'static str, text: &str) {
        self.line(
            "",
            &format!("[Test method {}] detailed description: {}", test, text),
        );
    }

    fn on_outcome(&mut self, report: &TestReport) {
        let color = if report.outcome.is_passed() { GREEN } else { RED };
        self.line(color, &describe(report));
    }

    fn on_suite_aborted(&mut self, error: &RunError) {
        self.line(
            YELLOW,
            &format!("[Suite {}] is aborted. {}", error.suite(), error),
        );
    }

    fn on_run_complete(&mut self, summary: &RunSummary) {
        let tally = &summary.tally;
        let text = format!(
            "[{}] {} suites ({} skipped), {} tests: {} passed, {} failed, {} timed out, {} broken in {:.2}s{}",
            summary.name,
            summary.suites,
            summary.skipped_suites,
            tally.total(),
            tally.passed,
            tally.failed,
            tally.timed_out,
            tally.errored,
            summary.duration.as_secs_f64(),
            if summary.aborted { ", aborted" } else { "" }
        );
        let color = if summary.success() { GREEN } else { RED };
        self.line(color, &text);
        if let Err(e) = self.out.flush() {
            error!("Cannot flush console report: {}", e);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn report(outcome: Outcome) -> TestReport {
        TestReport {
            suite: "Calculator",
            name: "adds",
            description: None,
            outcome,
            started: Utc::now(),
            elapsed: Duration::from_millis(1),
        }
    }

    fn render(events: impl FnOnce(&mut ConsoleReporter<Vec<u8>>), color: bool) -> String {
        let mut reporter = ConsoleReporter::new(Vec::new(), color);
        events(&mut reporter);
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_plain_lines_for_each_outcome() {
        let output = render(
            |r| {
                r.on_description("Calculator", "adds", "adds two numbers");
                r.on_outcome(&report(Outcome::Passed));
                r.on_outcome(&report(Outcome::AssertionFailed {
                    expected: "5".to_owned(),
                    actual: "3".to_owned(),
                }));
                r.on_outcome(&report(Outcome::TimedOut {
                    message: "Expected running time is 50 MILLISECOND".to_owned(),
                }));
                r.on_outcome(&report(Outcome::Errored {
                    cause: "panicked: boom".to_owned(),
                }));
            },
            false,
        );

        assert_eq!(
            output,
            "[Test method adds] detailed description: adds two numbers\n\
             [Test method adds] is successful\n\
             [Test method adds] is failed. Expected = [5]; actual = [3]\n\
             [Test method adds] is failed. Timed out. Expected running time is 50 MILLISECOND\n\
             [Test method adds] is broken. panicked: boom\n"
        );
    }

    #[test]
    fn test_colored_lines_are_wrapped() {
        let output = render(|r| r.on_outcome(&report(Outcome::Passed)), true);

        assert_eq!(output, "\x1b[32m[Test method adds] is successful\x1b[0m\n");
    }

    #[test]
    fn test_abort_diagnostic_names_suite() {
        let error = RunError::Instantiation {
            suite: "Calculator",
            cause: "no database".to_owned(),
        };
        let output = render(|r| r.on_suite_aborted(&error), false);

        assert_eq!(
            output,
            "[Suite Calculator] is aborted. cannot instantiate suite 'Calculator': no database\n"
        );
    }
}
