pub mod content;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /{resource}           GET list, POST create
/// /{resource}/{id}      GET get, PUT update, DELETE delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(content::router())
}
