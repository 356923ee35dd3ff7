use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;

use quill_api::authz::{AllowAll, Enforcer};
use quill_api::config::ServerConfig;
use quill_api::router::build_app_router;
use quill_api::state::AppState;
use quill_store::{ContentStore, MemoryStore};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with the given collaborators.
///
/// Mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, tracing, timeout,
/// panic recovery) that production uses.
pub fn build_test_app_with(store: Arc<dyn ContentStore>, enforcer: Arc<dyn Enforcer>) -> Router {
    let config = test_config();
    let state = AppState {
        store,
        enforcer,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Full router over a fresh in-memory store with allow-all authorization.
pub fn build_test_app() -> Router {
    build_test_app_with(Arc::new(MemoryStore::new()), Arc::new(AllowAll))
}

/// Empty-body request (GET / DELETE).
pub fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// JSON-body request (POST / PUT).
pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

/// Collect a response into its status code and parsed JSON body.
pub async fn response_json(
    response: axum::response::Response,
) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}
