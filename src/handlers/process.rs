//! The protected placeholder endpoint.
//!
//! - POST /your-endpoint - Validate the body and echo it back

use axum::{Json, body::Bytes, extract::rejection::BytesRejection};
use serde_json::{Map, Value};

use crate::{error::AppError, models::response::ProcessResponse};

/// Parse a request body that must be a JSON object.
///
/// Empty bodies, malformed JSON, and any non-object value (array, string,
/// number, null) are all rejected.
pub fn parse_object(body: &[u8]) -> Result<Map<String, Value>, AppError> {
    serde_json::from_slice::<Map<String, Value>>(body).map_err(|err| {
        tracing::debug!(error = %err, "rejecting request body");
        AppError::InvalidJson
    })
}

/// Process a request.
///
/// # Endpoint
///
/// `POST /your-endpoint`
///
/// # Authentication
///
/// Requires valid API key in the `X-API-Key` header (enforced by the auth middleware).
///
/// # Request Body
///
/// Any JSON object. The Content-Type header is not checked.
///
/// # Response
///
/// - **Success (200 OK)**: the object echoed under `data`
/// - **Error (400)**: body is not a JSON object, or could not be read
///
/// The router disables the default body size limit for this route, so any
/// object is echoed regardless of size.
///
/// ```json
/// {
///   "success": true,
///   "message": "Request processed successfully",
///   "data": { "a": 1 }
/// }
/// ```
pub async fn process_request(
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ProcessResponse>, AppError> {
    let body = body.map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "failed to read request body");
        AppError::InvalidJson
    })?;
    let data = parse_object(&body)?;

    Ok(Json(ProcessResponse::echo(data)))
}
