//! Function invocation glue
//!
//! Parse both payloads, call the user function, await the result. One
//! attempt, one outcome; no retries and no timeout.

use std::future::Future;

use resizefn_core::{Event, FunctionContext, InvokeError, Response};
use tracing::debug;

use crate::config::RawInput;

/// Run a single invocation of `handler` against the raw input.
///
/// Parsing failures are reported before the handler runs; any error the
/// handler returns is folded into [`InvokeError::Handler`].
pub async fn invoke<H, Fut, E>(input: &RawInput, handler: H) -> Result<Response, InvokeError>
where
    H: FnOnce(Event, FunctionContext) -> Fut,
    Fut: Future<Output = Result<Response, E>>,
    E: std::error::Error + Send + Sync + 'static,
{
    let event: Event =
        serde_json::from_str(&input.event).map_err(InvokeError::ParseEvent)?;
    let context: FunctionContext =
        serde_json::from_str(&input.context).map_err(InvokeError::ParseContext)?;
    debug!(?event, "invoking function");

    handler(event, context)
        .await
        .map_err(|err| InvokeError::Handler(Box::new(err)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::ResizeError;

    async fn echo_ok(_event: Event, _context: FunctionContext) -> Result<Response, ResizeError> {
        Ok(Response::new("ok"))
    }

    #[tokio::test]
    async fn test_absent_payloads_parse_as_empty_objects() {
        let response = invoke(&RawInput::default(), echo_ok).await.unwrap();
        assert_eq!(response.message, "ok");
    }

    #[tokio::test]
    async fn test_malformed_event_is_a_parse_error() {
        let input = RawInput::new("not json", "{}");
        let err = invoke(&input, echo_ok).await.unwrap_err();
        assert!(matches!(err, InvokeError::ParseEvent(_)));
    }

    #[tokio::test]
    async fn test_malformed_context_is_a_parse_error() {
        let input = RawInput::new("{}", "[1, 2");
        let err = invoke(&input, echo_ok).await.unwrap_err();
        assert!(matches!(err, InvokeError::ParseContext(_)));
    }

    #[tokio::test]
    async fn test_non_object_event_is_rejected() {
        let input = RawInput::new("[1, 2, 3]", "{}");
        let err = invoke(&input, echo_ok).await.unwrap_err();
        assert!(matches!(err, InvokeError::ParseEvent(_)));
    }

    #[tokio::test]
    async fn test_handler_error_becomes_invoke_error() {
        let input = RawInput::default();
        let err = invoke(&input, |_event, _context| async {
            Err::<Response, ResizeError>(ResizeError::MissingImagePath)
        })
        .await
        .unwrap_err();
        assert!(matches!(err, InvokeError::Handler(_)));
        assert_eq!(
            err.to_string(),
            "event is missing a string imagePath field"
        );
    }
}
