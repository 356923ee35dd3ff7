use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use quill_core::{CoreError, Envelope, ErrorBody};
use quill_store::StoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for data-access
/// failures, and adds HTTP-specific variants. Every variant maps to exactly
/// one wire-level [`ErrorBody`] from the fixed taxonomy.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `quill-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A data-access failure from the content store.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A bad request with a human-readable message (binder failures,
    /// invalid pagination parameters).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for fallible handler logic.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Transport status plus wire-level error body for this error.
    ///
    /// Internal failures are logged here and sanitized before they reach
    /// the client; not-found keeps the collaborator's message.
    pub fn into_parts(self) -> (StatusCode, ErrorBody) {
        match self {
            AppError::Core(core) => {
                if let CoreError::Internal(msg) = &core {
                    tracing::error!(error = %msg, "Internal core error");
                }
                let body = core.to_error_body();
                let status = StatusCode::from_u16(body.status_or_default())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (status, body)
            }

            AppError::Store(err @ StoreError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, ErrorBody::not_found(err.to_string()))
            }
            AppError::Store(StoreError::Backend(msg)) => {
                tracing::error!(error = %msg, "Store backend error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::internal("An internal error occurred"),
                )
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorBody::bad_request(msg)),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::internal("An internal error occurred"),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    /// Rejection path: an extractor failed before any responder existed, so
    /// the envelope carries no meta. Handler-level errors go through
    /// `Responder::error` instead, which adds trace and timing meta.
    fn into_response(self) -> Response {
        let (status, body) = self.into_parts();
        let envelope = Envelope::<serde_json::Value>::failure(body, None);
        (status, Json(envelope)).into_response()
    }
}
