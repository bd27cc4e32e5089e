//! Failure taxonomy for command invocation.
//!
//! Handlers signal expected, user-facing errors with [`CommandFailure`].
//! Everything else a handler returns (or panics with) is treated as
//! unexpected: it is logged in full and the invoker only ever sees the
//! fixed internal-error text.

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

use super::MessageType;

/// Structured failure raised by handler code to signal an expected,
/// user-facing error.
///
/// Both fields are optional: a set category selects the catalog template,
/// an attached detail string is substituted into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFailure {
    message_type: Option<MessageType>,
    detail: Option<String>,
}

impl CommandFailure {
    /// Failure with a category and a detail string.
    pub fn new(message_type: MessageType, detail: impl Into<String>) -> Self {
        Self {
            message_type: Some(message_type),
            detail: Some(detail.into()),
        }
    }

    /// Failure with a category and no detail; resolves to the category's
    /// default message for the owning command.
    pub fn of(message_type: MessageType) -> Self {
        Self {
            message_type: Some(message_type),
            detail: None,
        }
    }

    /// Failure with a detail string but no category.
    pub fn untyped(detail: impl Into<String>) -> Self {
        Self {
            message_type: None,
            detail: Some(detail.into()),
        }
    }

    pub fn message_type(&self) -> Option<MessageType> {
        self.message_type
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

impl fmt::Display for CommandFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.message_type, &self.detail) {
            (Some(t), Some(d)) => write!(f, "[{}] {}", t, d),
            (Some(t), None) => write!(f, "[{}]", t),
            (None, Some(d)) => write!(f, "{}", d),
            (None, None) => write!(f, "command failed"),
        }
    }
}

impl StdError for CommandFailure {}

/// Error type returned by command handlers.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Expected failure, resolved through the message catalog.
    #[error(transparent)]
    Failure(#[from] CommandFailure),

    /// Anything else; never shown to the invoker.
    #[error("handler error: {0}")]
    Internal(#[source] Box<dyn StdError + Send + Sync>),
}

impl HandlerError {
    /// Wraps an arbitrary error as an internal handler error.
    pub fn internal(err: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        HandlerError::Internal(err.into())
    }
}

/// Uniform wrapper for failures surfacing from a scheduled invocation.
///
/// Constructed at the point of failure so the completion handler can
/// classify without inspecting incidental wrapping.
#[derive(Debug, Error)]
pub enum InvocationError {
    /// Argument evaluation could not produce a valid argument sequence.
    /// The original evaluation detail is discarded; only the
    /// incorrect-usage category is surfaced.
    #[error("argument evaluation failed")]
    Usage,

    /// Handler signaled a structured, expected failure.
    #[error("command failed: {0}")]
    Domain(CommandFailure),

    /// Handler bug or invocation-mechanism failure.
    #[error("unexpected failure: {0}")]
    Unexpected(#[source] Box<dyn StdError + Send + Sync>),
}
