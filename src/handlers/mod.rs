//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (raw body, headers)
//! 2. Validates it
//! 3. Returns HTTP response (JSON, status code)

/// Static capabilities listing
pub mod capabilities;
/// JSON 404 for unmatched routes
pub mod fallback;
/// Liveness endpoint
pub mod health;
/// Protected echo endpoint
pub mod process;
