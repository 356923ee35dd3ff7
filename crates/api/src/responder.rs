//! Per-request response writer for the `{data, error, meta}` envelope.
//!
//! A [`Responder`] is extracted at the start of a handler, captures the
//! request start instant and trace id, and is consumed by exactly one
//! terminal write. Consuming `self` makes a double write unrepresentable:
//! the open/closed life cycle is enforced by move semantics instead of a
//! runtime flag.

use std::any::Any;
use std::convert::Infallible;
use std::future::Future;
use std::time::Instant;

use axum::body::Bytes;
use axum::extract::FromRequestParts;
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use http_body_util::Full;
use serde::Serialize;
use tower_http::catch_panic::ResponseForPanic;

use quill_core::{Envelope, ErrorBody, Meta, Pagination};

use crate::error::AppError;

/// Header carrying the per-request trace id, set by `SetRequestIdLayer`.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Ephemeral response writer, one per inbound request.
///
/// Never shared across requests; every write method consumes the responder,
/// so at most one envelope is ever emitted per instance.
#[derive(Debug)]
pub struct Responder {
    start: Instant,
    trace_id: Option<String>,
}

impl<S> FromRequestParts<S> for Responder
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let trace_id = parts
            .headers
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .map(str::to_owned);

        Ok(Responder {
            start: Instant::now(),
            trace_id,
        })
    }
}

impl Responder {
    /// Success write: `{data, meta: {traceId?, took}}` at the given status.
    pub fn success<T: Serialize>(self, status: StatusCode, data: T) -> Response {
        let meta = self.meta(None);
        (status, Json(Envelope::success(data, Some(meta)))).into_response()
    }

    /// Error write: `{data: null, error, meta: {traceId?, took}}`; the
    /// status comes from the error itself.
    pub fn error(self, err: AppError) -> Response {
        let meta = self.meta(None);
        let (status, body) = err.into_parts();
        let envelope = Envelope::<serde_json::Value>::failure(body, Some(meta));
        (status, Json(envelope)).into_response()
    }

    /// List write: always status 200, with `meta.pagination` populated.
    /// An empty list on an out-of-range page is still a success.
    pub fn list<T: Serialize>(self, data: T, pagination: Pagination) -> Response {
        let meta = self.meta(Some(pagination));
        (StatusCode::OK, Json(Envelope::success(data, Some(meta)))).into_response()
    }

    /// Run fallible handler logic and map its outcome to exactly one write.
    ///
    /// Keeps `?` usable inside handler bodies while the responder still owns
    /// the terminal write.
    pub async fn respond<T, F>(self, fut: F) -> Response
    where
        T: Serialize,
        F: Future<Output = Result<(StatusCode, T), AppError>>,
    {
        match fut.await {
            Ok((status, data)) => self.success(status, data),
            Err(err) => self.error(err),
        }
    }

    /// [`Responder::respond`] for list endpoints: the success arm carries
    /// items plus pagination and is written at status 200.
    pub async fn respond_list<T, F>(self, fut: F) -> Response
    where
        T: Serialize,
        F: Future<Output = Result<(T, Pagination), AppError>>,
    {
        match fut.await {
            Ok((data, pagination)) => self.list(data, pagination),
            Err(err) => self.error(err),
        }
    }

    fn meta(self, pagination: Option<Pagination>) -> Meta {
        Meta {
            pagination,
            trace_id: self.trace_id,
            took: self.start.elapsed().as_millis() as u64,
        }
    }
}

/// Recovery handler for panics escaping a request handler.
///
/// Installed once via `CatchPanicLayer::custom` in the router builder. It
/// emits a single fixed 500 envelope and cannot itself fail: the body is
/// built from static parts with a pre-written fallback.
#[derive(Debug, Clone, Copy)]
pub struct PanicRecovery;

/// Pre-serialized internal-error envelope, used if serialization of the
/// regular one ever fails.
const PANIC_FALLBACK_BODY: &str =
    r#"{"data":null,"error":{"code":5000,"status":500,"name":"InternalServerError","message":"Internal server error"}}"#;

impl ResponseForPanic for PanicRecovery {
    type ResponseBody = Full<Bytes>;

    fn response_for_panic(
        &mut self,
        err: Box<dyn Any + Send + 'static>,
    ) -> axum::http::Response<Self::ResponseBody> {
        let detail = if let Some(s) = err.downcast_ref::<String>() {
            s.as_str()
        } else if let Some(s) = err.downcast_ref::<&str>() {
            s
        } else {
            "non-string panic payload"
        };
        tracing::error!(panic = %detail, "Handler panicked, returning internal error envelope");

        let envelope = Envelope::<serde_json::Value>::failure(
            ErrorBody::internal("Internal server error"),
            None,
        );
        let body = serde_json::to_vec(&envelope)
            .unwrap_or_else(|_| PANIC_FALLBACK_BODY.as_bytes().to_vec());

        let mut response = axum::http::Response::new(Full::new(Bytes::from(body)));
        *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
        response
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        response
    }
}
