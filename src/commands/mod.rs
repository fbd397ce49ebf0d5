// ABOUTME: Command dispatcher: maps user actions onto runtime calls and reports the outcome.
// ABOUTME: Input is validated before the first runtime call; nothing is retried.

mod container;
mod image;
mod system;

pub use container::{ContainerAction, perform_container_action, run_container};
pub use image::{pull_image, remove_image};
pub use system::prune;

use crate::runtime::{RuntimeError, RuntimeErrorKind};
use crate::types::{ParseImageRefError, ParsePortSpecError};
use serde::Serialize;

/// Why a command did not complete.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// Malformed caller input; no runtime call was made.
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl CommandError {
    /// Adapter kind, or `None` for validation failures.
    pub fn runtime_kind(&self) -> Option<RuntimeErrorKind> {
        match self {
            CommandError::Validation(_) => None,
            CommandError::Runtime(e) => Some(e.kind()),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, CommandError::Validation(_))
    }
}

impl From<ParsePortSpecError> for CommandError {
    fn from(e: ParsePortSpecError) -> Self {
        CommandError::Validation(e.to_string())
    }
}

impl From<ParseImageRefError> for CommandError {
    fn from(e: ParseImageRefError) -> Self {
        CommandError::Validation(e.to_string())
    }
}

/// What a successful command did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub message: String,
    /// Container or image the command acted on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Set by prune.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reclaimed_bytes: Option<u64>,
}

impl Outcome {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            subject: None,
            reclaimed_bytes: None,
        }
    }

    fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }
}
