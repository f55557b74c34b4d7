//! Invocation input loading
//!
//! The raw event/context strings are isolated behind `RawInput` so the
//! invoker never touches the process environment itself; tests construct
//! inputs directly.

use std::env;

/// Environment variable carrying the JSON event payload.
pub const EVENT_VAR: &str = "FUNCTION_EVENT";

/// Environment variable carrying the JSON context payload.
pub const CONTEXT_VAR: &str = "FUNCTION_CONTEXT";

const EMPTY_OBJECT: &str = "{}";

/// The two JSON strings handed to one invocation, still unparsed.
#[derive(Debug, Clone)]
pub struct RawInput {
    pub event: String,
    pub context: String,
}

impl Default for RawInput {
    fn default() -> Self {
        Self {
            event: EMPTY_OBJECT.to_string(),
            context: EMPTY_OBJECT.to_string(),
        }
    }
}

impl RawInput {
    pub fn new(event: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            context: context.into(),
        }
    }

    /// Load both payloads from the environment, treating an absent
    /// variable as the empty JSON object.
    pub fn from_env() -> Self {
        Self {
            event: env::var(EVENT_VAR).unwrap_or_else(|_| EMPTY_OBJECT.to_string()),
            context: env::var(CONTEXT_VAR).unwrap_or_else(|_| EMPTY_OBJECT.to_string()),
        }
    }
}
