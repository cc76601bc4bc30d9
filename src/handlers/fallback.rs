//! Fallbacks for requests no route accepts.

use crate::error::AppError;

/// No route matches the path.
pub async fn not_found() -> AppError {
    AppError::NotFound
}

/// The path exists but not for this method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
