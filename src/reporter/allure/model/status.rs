use crate::app::outcome::Outcome;
use serde_derive::Serialize;

#[derive(Debug, Serialize, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusDetails {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<String>,
}

impl From<String> for StatusDetails {
    fn from(message: String) -> Self {
        Self {
            message,
            trace: None,
        }
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum Status {
    Failed,
    Broken,
    Passed,
}

impl From<&Outcome> for Status {
    fn from(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::Passed => Status::Passed,
            Outcome::AssertionFailed { .. } | Outcome::TimedOut { .. } => Status::Failed,
            Outcome::Errored { .. } => Status::Broken,
        }
    }
}

impl From<&Outcome> for StatusDetails {
    fn from(outcome: &Outcome) -> Self {
        let message = match outcome {
            Outcome::Passed => String::new(),
            Outcome::AssertionFailed { expected, actual } => {
                format!("Expected = [{}]; actual = [{}]", expected, actual)
            }
            Outcome::TimedOut { message } => format!("Timed out. {}", message),
            Outcome::Errored { cause } => cause.clone(),
        };
        message.into()
    }
}
