//! Capabilities listing advertised to the host platform.

use axum::Json;
use serde::Serialize;

/// What this plugin supports. Static for the lifetime of the process.
#[derive(Debug, Clone, Serialize)]
pub struct Capabilities {
    pub supported_methods: &'static [&'static str],
    pub supported_currencies: &'static [&'static str],
    pub features: &'static [&'static str],
}

pub const CAPABILITIES: Capabilities = Capabilities {
    supported_methods: &["your_methods_here"],
    supported_currencies: &["USD", "INR"],
    features: &["feature1", "feature2"],
};

/// `GET /capabilities`, no authentication.
pub async fn capabilities() -> Json<Capabilities> {
    Json(CAPABILITIES)
}
