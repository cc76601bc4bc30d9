//! Router construction.
//!
//! Request flow, outermost first:
//! 1. `intercept_errors` converts recorded unhandled errors into a generic 500
//! 2. `TraceLayer` logs each request/response
//! 3. `CatchPanicLayer` turns a panicking handler into a generic 500
//! 4. Route dispatch by method and path
//! 5. Protected routes only: `auth_middleware`, then the handler

use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::{config::Config, handlers, middleware};

/// Build the full application router around an immutable configuration.
pub fn build_router(config: Arc<Config>) -> Router {
    // Routes behind the API key gate
    let protected_routes = Router::new()
        // Any JSON object is echoed, so the default 2 MiB cap is lifted
        .route(
            "/your-endpoint",
            post(handlers::process::process_request).layer(DefaultBodyLimit::disable()),
        )
        // route_layer: unmatched paths still fall through to the 404 fallback
        .route_layer(axum_middleware::from_fn_with_state(
            config.clone(),
            middleware::auth::auth_middleware,
        ));

    Router::new()
        // Public routes (no authentication required)
        .route("/health", get(handlers::health::health_check))
        .route("/capabilities", get(handlers::capabilities::capabilities))
        .merge(protected_routes)
        .fallback(handlers::fallback::not_found)
        .method_not_allowed_fallback(handlers::fallback::method_not_allowed)
        .layer(CatchPanicLayer::custom(middleware::errors::panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(middleware::errors::intercept_errors))
        .with_state(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::auth::API_KEY_HEADER;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    const KEY: &str = "test-key";

    fn app() -> Router {
        let config = Config::from_vars([("SSP_API_KEY".to_string(), KEY.to_string())]).unwrap();
        build_router(Arc::new(config))
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn post_endpoint(key: Option<&str>, body: &str) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/your-endpoint")
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(key) = key {
            builder = builder.header(API_KEY_HEADER, key);
        }
        builder.body(Body::from(body.to_owned())).unwrap()
    }

    fn unauthorized() -> Value {
        json!({"error": true, "message": "Unauthorized - Invalid or missing API key"})
    }

    #[tokio::test]
    async fn health_needs_no_key() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], "1.0.0");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn health_ignores_a_wrong_key() {
        let request = Request::builder()
            .uri("/health")
            .header(API_KEY_HEADER, "wrong")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(request).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn capabilities_needs_no_key() {
        let request = Request::builder()
            .uri("/capabilities")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "supported_methods": ["your_methods_here"],
                "supported_currencies": ["USD", "INR"],
                "features": ["feature1", "feature2"]
            })
        );
    }

    #[tokio::test]
    async fn endpoint_without_key_is_unauthorized() {
        let (status, body) = send(post_endpoint(None, r#"{"a":1}"#)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, unauthorized());
    }

    #[tokio::test]
    async fn endpoint_with_wrong_or_empty_key_is_unauthorized() {
        for key in ["wrong", "", "test-key ", "TEST-KEY"] {
            let (status, body) = send(post_endpoint(Some(key), r#"{"a":1}"#)).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "key {key:?}");
            assert_eq!(body, unauthorized());
            assert!(body.get("data").is_none());
        }
    }

    #[tokio::test]
    async fn bad_key_wins_over_bad_body() {
        let (status, body) = send(post_endpoint(Some("wrong"), "not json")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, unauthorized());
    }

    #[tokio::test]
    async fn endpoint_echoes_object() {
        let (status, body) = send(post_endpoint(Some(KEY), r#"{"a":1}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "success": true,
                "message": "Request processed successfully",
                "data": {"a": 1}
            })
        );
    }

    #[tokio::test]
    async fn endpoint_rejects_non_objects() {
        for payload in [r#""not json""#, "not json", "[1,2,3]", ""] {
            let (status, body) = send(post_endpoint(Some(KEY), payload)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "payload {payload:?}");
            assert_eq!(
                body,
                json!({"error": true, "message": "Invalid JSON request body"})
            );
        }
    }

    #[tokio::test]
    async fn endpoint_does_not_require_content_type() {
        let request = Request::builder()
            .method("POST")
            .uri("/your-endpoint")
            .header(API_KEY_HEADER, KEY)
            .body(Body::from(r#"{"a":1}"#))
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], json!({"a": 1}));
    }

    #[tokio::test]
    async fn repeated_requests_echo_identically() {
        let app = app();
        let mut echoed = Vec::new();
        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(post_endpoint(Some(KEY), r#"{"a":1,"b":[true,null]}"#))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let bytes = response.into_body().collect().await.unwrap().to_bytes();
            echoed.push(bytes);
        }
        assert_eq!(echoed[0], echoed[1]);
    }

    #[tokio::test]
    async fn endpoint_echoes_bodies_over_default_limit() {
        let large = "x".repeat(3 * 1024 * 1024);
        let payload = json!({ "a": large }).to_string();
        let (status, body) = send(post_endpoint(Some(KEY), &payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["a"].as_str().map(str::len), Some(large.len()));
    }

    #[tokio::test]
    async fn wrong_method_is_json_405() {
        let requests = [
            Request::builder()
                .method("GET")
                .uri("/your-endpoint")
                .header(API_KEY_HEADER, KEY)
                .body(Body::empty())
                .unwrap(),
            Request::builder()
                .method("POST")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        ];
        for request in requests {
            let (status, body) = send(request).await;
            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
            assert_eq!(body, json!({"error": true, "message": "Method not allowed"}));
        }
    }

    /// Every non-2xx response, including those the router generates itself,
    /// is a JSON object with `error: true` and a string `message`.
    #[tokio::test]
    async fn every_error_response_is_json() {
        let large = json!({ "a": "x".repeat(3 * 1024 * 1024) }).to_string();
        let requests = vec![
            Request::builder().uri("/nope").body(Body::empty()).unwrap(),
            Request::builder()
                .method("DELETE")
                .uri("/capabilities")
                .body(Body::empty())
                .unwrap(),
            Request::builder()
                .method("PUT")
                .uri("/your-endpoint")
                .header(API_KEY_HEADER, KEY)
                .body(Body::from(r#"{"a":1}"#))
                .unwrap(),
            post_endpoint(None, r#"{"a":1}"#),
            post_endpoint(Some("wrong"), &large),
            post_endpoint(Some(KEY), "[1,2,3]"),
            post_endpoint(Some(KEY), &format!("{}]", &large)),
        ];

        for request in requests {
            let uri = request.uri().clone();
            let response = app().oneshot(request).await.unwrap();
            let status = response.status();
            assert!(!status.is_success(), "{uri} returned {status}");

            let content_type = response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned);
            assert_eq!(
                content_type.as_deref(),
                Some("application/json"),
                "{uri} returned {status}"
            );

            let bytes = response.into_body().collect().await.unwrap().to_bytes();
            let body: Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(body["error"], true, "{uri} returned {status}");
            assert!(body["message"].is_string(), "{uri} returned {status}");
        }
    }

    #[tokio::test]
    async fn unknown_route_is_json_404() {
        let request = Request::builder()
            .uri("/nope")
            .header(API_KEY_HEADER, KEY)
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": true, "message": "Endpoint not found"}));
    }
}
