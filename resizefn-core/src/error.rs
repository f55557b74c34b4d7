//! Invocation error type and the error envelope

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Anything that can go wrong during one invocation.
///
/// Externally there is a single failure category: every variant collapses
/// into one `{"error": "<message>"}` line on stderr and exit code 1. The
/// variants exist only so the message says what actually failed.
#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("failed to parse event payload: {0}")]
    ParseEvent(#[source] serde_json::Error),

    #[error("failed to parse context payload: {0}")]
    ParseContext(#[source] serde_json::Error),

    /// Error raised by the user function body.
    #[error("{0}")]
    Handler(Box<dyn std::error::Error + Send + Sync>),
}

/// Failure payload, written to stderr as one line of JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub error: String,
}

impl ErrorPayload {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    /// Serialize to the one-line JSON form, with a hand-built fallback if
    /// serialization itself fails.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| format!(r#"{{"error":"{}"}}"#, self.error))
    }
}

impl From<&InvokeError> for ErrorPayload {
    fn from(err: &InvokeError) -> Self {
        Self::new(err.to_string())
    }
}
