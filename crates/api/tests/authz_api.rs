//! Authorization behavior: explicit denies and enforcer failures both
//! surface as the same generic 403 (fail-closed).

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use quill_api::authz::{Enforcer, EnforcerError};
use quill_store::MemoryStore;

use common::{build_test_app_with, json_request, request, response_json};

struct DenyAll;

#[async_trait]
impl Enforcer for DenyAll {
    async fn enforce(&self, _: &str, _: &str, _: &str) -> Result<bool, EnforcerError> {
        Ok(false)
    }
}

struct Exploding;

#[async_trait]
impl Enforcer for Exploding {
    async fn enforce(&self, _: &str, _: &str, _: &str) -> Result<bool, EnforcerError> {
        Err(EnforcerError("policy backend offline".into()))
    }
}

/// Records the subject/resource/action it was asked about, then allows.
struct Recording(std::sync::Mutex<Vec<(String, String, String)>>);

#[async_trait]
impl Enforcer for Recording {
    async fn enforce(
        &self,
        subject: &str,
        resource: &str,
        action: &str,
    ) -> Result<bool, EnforcerError> {
        self.0
            .lock()
            .expect("poisoned")
            .push((subject.into(), resource.into(), action.into()));
        Ok(true)
    }
}

#[tokio::test]
async fn explicit_deny_returns_403_envelope() {
    let app = build_test_app_with(Arc::new(MemoryStore::new()), Arc::new(DenyAll));

    let response = app.oneshot(request("GET", "/api/v1/articles")).await.unwrap();
    let (status, body) = response_json(response).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body["data"].is_null());
    assert_eq!(body["error"]["message"], "permission denied");
    // 403 short-circuits still go through the responder, so meta is present.
    assert!(body["meta"]["took"].is_u64());
}

#[tokio::test]
async fn enforcer_failure_is_denied_not_surfaced() {
    let app = build_test_app_with(Arc::new(MemoryStore::new()), Arc::new(Exploding));

    let response = app
        .oneshot(json_request("POST", "/api/v1/articles", json!({})))
        .await
        .unwrap();
    let (status, body) = response_json(response).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"]["message"], "permission denied");
    assert!(
        !body.to_string().contains("offline"),
        "Enforcer failure details must not reach the client"
    );
}

#[tokio::test]
async fn deny_short_circuits_before_the_store() {
    // The store stays empty, so a successful write would 200 with data;
    // a deny must come back before anything is stored.
    let store = Arc::new(MemoryStore::new());
    let app = build_test_app_with(store.clone(), Arc::new(DenyAll));

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/v1/articles", json!({"title": "x"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let allowed = build_test_app_with(store, Arc::new(quill_api::authz::AllowAll));
    let response = allowed
        .oneshot(request("GET", "/api/v1/articles"))
        .await
        .unwrap();
    let (_, body) = response_json(response).await;
    assert_eq!(body["meta"]["pagination"]["total"], 0);
}

#[tokio::test]
async fn subject_and_action_reach_the_enforcer() {
    let recording = Arc::new(Recording(std::sync::Mutex::new(Vec::new())));
    let app = build_test_app_with(Arc::new(MemoryStore::new()), recording.clone());

    let mut req = request("DELETE", "/api/v1/articles/some-id");
    req.headers_mut()
        .insert("x-subject", "editor-7".parse().unwrap());
    // Unknown id: 404 after the check; the enforcer still saw the request.
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let calls = recording.0.lock().expect("poisoned");
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0],
        (
            "editor-7".to_string(),
            "articles".to_string(),
            "delete".to_string()
        )
    );
}

#[tokio::test]
async fn missing_subject_header_defaults_to_anonymous() {
    let recording = Arc::new(Recording(std::sync::Mutex::new(Vec::new())));
    let app = build_test_app_with(Arc::new(MemoryStore::new()), recording.clone());

    app.oneshot(request("GET", "/api/v1/articles")).await.unwrap();

    let calls = recording.0.lock().expect("poisoned");
    assert_eq!(calls[0].0, "anonymous");
    assert_eq!(calls[0].2, "read");
}
