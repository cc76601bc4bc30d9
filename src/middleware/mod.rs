//! HTTP middleware components.
//!
//! Middleware are functions that run around route handlers.
//! They can:
//! - Authenticate requests
//! - Short-circuit requests (reject unauthorized)
//! - Rewrite unhandled failures into a generic response

/// API key authentication middleware
pub mod auth;
/// Outermost error interception
pub mod errors;
