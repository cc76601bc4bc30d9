//! Error types and HTTP error response handling.
//!
//! This module defines all request-level errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use std::sync::Arc;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::models::response::ErrorBody;

/// Request-level error type.
///
/// # Error Categories
///
/// - **Authentication Errors**: Missing or incorrect API key, resolved at the gate
/// - **Validation Errors**: Request body is not a JSON object, resolved by the handler
/// - **Routing Errors**: No route matches the path or method
/// - **Unhandled Errors**: Anything else; surfaced to the error interceptor as a 500
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// API key header is missing or does not match the configured key.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Unauthorized - Invalid or missing API key")]
    Unauthorized,

    /// Request body is empty, malformed, or not a JSON object.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Invalid JSON request body")]
    InvalidJson,

    /// No route matches the request.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Endpoint not found")]
    NotFound,

    /// The path exists but does not accept this method.
    ///
    /// Returns HTTP 405 Method Not Allowed.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Any failure a handler did not resolve itself.
    ///
    /// Returns HTTP 500 with a generic message; the detail is only logged.
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Detail of an unhandled error, attached to the response extensions so the
/// error interceptor can log it. Never serialized.
#[derive(Debug, Clone)]
pub struct RecordedError(pub Arc<anyhow::Error>);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::InvalidJson => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Status and JSON body only. The message is the `Display` text, which
    /// for `Internal` is the generic string rather than the wrapped error.
    fn body_response(&self) -> Response {
        (self.status(), Json(ErrorBody::new(self.to_string()))).into_response()
    }
}

/// The generic 500 every unhandled failure collapses into.
pub fn internal_error_response() -> Response {
    AppError::Internal(anyhow::anyhow!("unhandled failure")).body_response()
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// { "error": true, "message": "Human-readable error message" }
/// ```
///
/// # Status Code Mapping
///
/// - `Unauthorized` → 401 Unauthorized
/// - `InvalidJson` → 400 Bad Request
/// - `NotFound` → 404 Not Found
/// - `MethodNotAllowed` → 405 Method Not Allowed
/// - `Internal` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut response = self.body_response();

        if let AppError::Internal(err) = self {
            response
                .extensions_mut()
                .insert(RecordedError(Arc::new(err)));
        }

        response
    }
}
