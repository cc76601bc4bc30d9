//! Error interception for the whole pipeline.
//!
//! Handlers and the auth gate write their own 401/400 responses. Anything
//! they could not resolve comes back as an [`AppError::Internal`], which
//! marks the response with a [`RecordedError`]. This layer sits outermost,
//! logs the recorded detail, and guarantees the client only sees the
//! generic 500 body.

use std::any::Any;

use axum::{extract::Request, middleware::Next, response::Response};

use crate::error::{RecordedError, internal_error_response};

/// Outermost middleware: converts recorded errors into the generic 500.
///
/// Responses without a recorded error, including the gate's 401 and the
/// handler's 400, are returned untouched.
pub async fn intercept_errors(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let mut response = next.run(request).await;

    match response.extensions_mut().remove::<RecordedError>() {
        Some(RecordedError(err)) => {
            tracing::error!(%method, %path, error = ?err, "unhandled error");
            internal_error_response()
        }
        None => response,
    }
}

/// Response for a handler that panicked, used by `CatchPanicLayer`.
///
/// Treated as an unhandled failure: the payload is logged, the client gets
/// the generic 500.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else {
        "unknown panic payload".to_owned()
    };

    tracing::error!(panic = %detail, "handler panicked");
    internal_error_response()
}
