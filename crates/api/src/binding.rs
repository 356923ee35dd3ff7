//! Request binding adapters.
//!
//! Thin wrappers over axum's `Query` and `Json` extractors that convert any
//! rejection into a bad-request envelope carrying the binder's message,
//! instead of axum's plain-text default.

use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Query-string binder; rejections become bad-request envelopes.
#[derive(Debug)]
pub struct BindQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for BindQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(BindQuery(value)),
            Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
        }
    }
}

/// JSON body binder; rejections become bad-request envelopes.
#[derive(Debug)]
pub struct BindJson<T>(pub T);

impl<T, S> FromRequest<S> for BindJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(BindJson(value)),
            Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
        }
    }
}
