//! API key authentication middleware.
//!
//! This middleware intercepts every protected request to:
//! 1. Extract the API key from the `X-API-Key` header
//! 2. Compare it against the configured key
//! 3. Reject unauthorized requests with HTTP 401 before the handler runs

use std::sync::Arc;

use crate::{config::Config, error::AppError};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Header carrying the caller's API key.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Exact comparison of two keys in constant time.
///
/// Both sides are hashed first so the comparison runs over equal-length
/// digests and timing reveals neither the key length nor a matching prefix.
pub fn keys_match(provided: &str, expected: &str) -> bool {
    let provided = Sha256::digest(provided.as_bytes());
    let expected = Sha256::digest(expected.as_bytes());
    provided.as_slice().ct_eq(expected.as_slice()).into()
}

/// API key authentication middleware function.
///
/// # Flow
///
/// 1. Extract `X-API-Key` header from request
/// 2. If missing or not valid UTF-8: return 401 Unauthorized
/// 3. If it differs from `SSP_API_KEY`: return 401 Unauthorized
/// 4. Otherwise call the next handler with the request unchanged
///
/// # Arguments
///
/// * `State(config)` - Process configuration injected by Axum
/// * `request` - Incoming HTTP request
/// * `next` - Next middleware/handler in the chain
pub async fn auth_middleware(
    State(config): State<Arc<Config>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(api_key) = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|h| h.to_str().ok())
    else {
        tracing::warn!(path = %request.uri().path(), "missing API key");
        return Err(AppError::Unauthorized);
    };

    if !keys_match(api_key, &config.ssp_api_key) {
        tracing::warn!(path = %request.uri().path(), "invalid API key");
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(request).await)
}
