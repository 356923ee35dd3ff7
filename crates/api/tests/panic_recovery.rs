//! A panic escaping a handler must become a single well-formed 500
//! envelope, never a bare transport error or an empty body.

mod common;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use tower::ServiceExt;
use tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic};

use quill_api::responder::PanicRecovery;

use common::{request, response_json};

/// Router with a deliberately panicking route behind the same recovery
/// layer the production router installs.
fn panicking_app() -> Router {
    async fn boom() -> () {
        panic!("handler exploded");
    }

    Router::new()
        .route("/boom", get(boom))
        .layer(CatchPanicLayer::custom(PanicRecovery))
}

#[tokio::test]
async fn panic_yields_internal_server_error_envelope() {
    let app = panicking_app();

    let response = app.oneshot(request("GET", "/boom")).await.unwrap();

    assert_eq!(
        response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some("application/json")
    );

    let (status, body) = response_json(response).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["data"].is_null());
    assert_eq!(body["error"]["code"], 5000);
    assert_eq!(body["error"]["status"], 500);
    assert_eq!(body["error"]["name"], "InternalServerError");
    assert_eq!(body["error"]["message"], "Internal server error");
}

#[tokio::test]
async fn panic_message_is_not_leaked() {
    let app = panicking_app();

    let response = app.oneshot(request("GET", "/boom")).await.unwrap();
    let (_, body) = response_json(response).await;

    assert!(
        !body.to_string().contains("exploded"),
        "Panic payload must not reach the client"
    );
}

#[test]
fn recovery_handler_emits_fixed_shape_for_any_payload() {
    let mut recovery = PanicRecovery;

    let payloads: Vec<Box<dyn std::any::Any + Send>> = vec![
        Box::new("str panic"),
        Box::new(String::from("string panic")),
        Box::new(17u32),
    ];
    for payload in payloads {
        let response = recovery.response_for_panic(payload);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
