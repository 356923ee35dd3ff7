//! Route definitions for the generic content CRUD set.

use axum::routing::get;
use axum::Router;

use crate::handlers::content;
use crate::state::AppState;

/// Resource-generic CRUD routes.
///
/// ```text
/// GET    /{resource}          -> list_items
/// POST   /{resource}          -> create_item
/// GET    /{resource}/{id}     -> get_item
/// PUT    /{resource}/{id}     -> update_item
/// DELETE /{resource}/{id}     -> delete_item
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{resource}",
            get(content::list_items).post(content::create_item),
        )
        .route(
            "/{resource}/{id}",
            get(content::get_item)
                .put(content::update_item)
                .delete(content::delete_item),
        )
}
