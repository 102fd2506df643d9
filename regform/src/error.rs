//! Error types.

use thiserror::Error;

use crate::lifecycle::SubmissionState;

/// Errors raised while binding a validator to markup.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BindError {
    /// A required element is absent from the document.
    #[error("required element '{0}' not found")]
    MissingElement(String),
}

/// An illegal submission state change.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("illegal submission transition {from:?} -> {to:?}")]
pub struct TransitionError {
    pub from: SubmissionState,
    pub to: SubmissionState,
}

/// Errors returned by [`FormValidator::submit`](crate::FormValidator::submit).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// A submit is already being handled.
    #[error("a submission is already in progress ({state:?})")]
    InFlight { state: SubmissionState },

    #[error(transparent)]
    Transition(#[from] TransitionError),
}

/// Failure reported by a [`Submitter`](crate::submit::Submitter).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct SendError {
    pub message: String,
}

impl SendError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for SendError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for SendError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}
