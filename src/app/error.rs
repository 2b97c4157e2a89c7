use crate::app::hooks::MethodRole;
use thiserror::Error;

/// Fatal errors. Each one aborts the remainder of a suite's run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    #[error("cannot instantiate suite '{suite}': {cause}")]
    Instantiation { suite: &'static str, cause: String },
    #[error("invalid declaration of '{suite}::{method}': {reason}")]
    Configuration {
        suite: &'static str,
        method: &'static str,
        reason: String,
    },
    #[error("{role} '{suite}::{method}' failed: {cause}")]
    Hook {
        suite: &'static str,
        method: &'static str,
        role: MethodRole,
        cause: String,
    },
}

impl RunError {
    pub fn suite(&self) -> &'static str {
        match self {
            RunError::Instantiation { suite, .. }
            | RunError::Configuration { suite, .. }
            | RunError::Hook { suite, .. } => suite,
        }
    }
}
