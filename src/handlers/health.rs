//! Health check endpoint for service monitoring.

use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: &'static str,

    /// Service version, taken from the crate manifest
    pub version: &'static str,

    /// Current server time, RFC 3339 in UTC
    pub timestamp: String,
}

/// Health check handler.
///
/// No authentication. Always succeeds while the process can answer HTTP.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "ok",
///   "version": "1.0.0",
///   "timestamp": "2025-12-21T19:00:00Z"
/// }
/// ```
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    })
}
