//! Core types for the resizefn function invoker.
//!
//! Everything here is pure data: the event/context payloads handed to the
//! user function, the success and error envelopes written to the standard
//! streams, and the invocation error type. No I/O happens in this crate.

pub mod error;
pub mod payload;

pub use error::{ErrorPayload, InvokeError};
pub use payload::{Event, FunctionContext, Response};
