//! Response envelopes shared by handlers and middleware.

use serde::Serialize;
use serde_json::{Map, Value};

/// Body of every error response.
///
/// ```json
/// { "error": true, "message": "Unauthorized - Invalid or missing API key" }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    /// Always `true`; lets clients branch on a single field
    pub error: bool,

    /// Fixed, human-readable message. Never carries internal detail.
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: true,
            message: message.into(),
        }
    }
}

/// Successful response of the protected endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessResponse {
    pub success: bool,
    pub message: &'static str,

    /// The request object, echoed back unchanged
    pub data: Map<String, Value>,
}

impl ProcessResponse {
    pub fn echo(data: Map<String, Value>) -> Self {
        Self {
            success: true,
            message: "Request processed successfully",
            data,
        }
    }
}
