//! Generic CRUD handlers over a named content resource.
//!
//! One handler set serves every resource collection: the `{resource}` path
//! segment selects the collection and the store does the rest. Each handler
//! follows the same shape: extract a responder, authorize, bind parameters,
//! call the store, and map the outcome to exactly one envelope write.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use serde_json::{json, Value};

use quill_core::Pagination;

use crate::authz::Subject;
use crate::binding::{BindJson, BindQuery};
use crate::query::ListParams;
use crate::responder::Responder;
use crate::state::AppState;

/// GET /api/v1/{resource}
///
/// Paginated listing. An out-of-range page yields an empty `data` list with
/// honest pagination meta, not an error.
pub async fn list_items(
    responder: Responder,
    Subject(subject): Subject,
    State(state): State<AppState>,
    Path(resource): Path<String>,
    BindQuery(params): BindQuery<ListParams>,
) -> Response {
    responder
        .respond_list(async {
            state.authorize(&subject, &resource, "read").await?;
            let (page, page_size) = params.resolve()?;

            let (items, total) = state.store.list(&resource, page, page_size).await?;

            Ok((items, Pagination::compute(page, page_size, total)))
        })
        .await
}

/// GET /api/v1/{resource}/{id}
pub async fn get_item(
    responder: Responder,
    Subject(subject): Subject,
    State(state): State<AppState>,
    Path((resource, id)): Path<(String, String)>,
) -> Response {
    responder
        .respond(async {
            state.authorize(&subject, &resource, "read").await?;

            let item = state.store.get(&resource, &id).await?;

            Ok((StatusCode::OK, item))
        })
        .await
}

/// POST /api/v1/{resource}
pub async fn create_item(
    responder: Responder,
    Subject(subject): Subject,
    State(state): State<AppState>,
    Path(resource): Path<String>,
    BindJson(dto): BindJson<Value>,
) -> Response {
    responder
        .respond(async {
            state.authorize(&subject, &resource, "create").await?;

            let item = state.store.create(&resource, dto).await?;

            tracing::info!(%resource, %subject, "Item created");

            Ok((StatusCode::OK, item))
        })
        .await
}

/// PUT /api/v1/{resource}/{id}
pub async fn update_item(
    responder: Responder,
    Subject(subject): Subject,
    State(state): State<AppState>,
    Path((resource, id)): Path<(String, String)>,
    BindJson(dto): BindJson<Value>,
) -> Response {
    responder
        .respond(async {
            state.authorize(&subject, &resource, "update").await?;

            let item = state.store.update(&resource, &id, dto).await?;

            tracing::info!(%resource, %id, %subject, "Item updated");

            Ok((StatusCode::OK, item))
        })
        .await
}

/// DELETE /api/v1/{resource}/{id}
///
/// Returns 200 with `data = {"message": "deleted"}`.
pub async fn delete_item(
    responder: Responder,
    Subject(subject): Subject,
    State(state): State<AppState>,
    Path((resource, id)): Path<(String, String)>,
) -> Response {
    responder
        .respond(async {
            state.authorize(&subject, &resource, "delete").await?;

            state.store.delete(&resource, &id).await?;

            tracing::info!(%resource, %id, %subject, "Item deleted");

            Ok((StatusCode::OK, json!({ "message": "deleted" })))
        })
        .await
}
