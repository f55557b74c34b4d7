//! resizefn - Serverless image-resize function
//!
//! One invocation per process lifetime: the event and context arrive as
//! JSON strings via environment variables, the user function resizes the
//! named image to 300x300, and the outcome is reported as a single JSON
//! line on stdout (success) or stderr (failure).

pub mod config;
pub mod handler;
pub mod invoker;
