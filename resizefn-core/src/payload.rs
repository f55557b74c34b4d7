//! Invocation payloads

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// External input payload describing the task to perform.
///
/// The event is an opaque JSON object supplied by the caller. The resize
/// function only ever reads the `imagePath` field; everything else is
/// carried along untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Event(pub Map<String, Value>);

impl Event {
    /// The `imagePath` field, when present and a string.
    pub fn image_path(&self) -> Option<&str> {
        self.0.get("imagePath").and_then(Value::as_str)
    }
}

/// External metadata accompanying an event.
///
/// Parsed so that malformed context is rejected up front, but never read
/// by the current function body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FunctionContext(pub Map<String, Value>);

/// Success payload, written to stdout as one line of JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}

impl Response {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
