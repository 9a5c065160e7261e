//! Route definitions for the `/blocks` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{block, floor};
use crate::state::AppState;

/// Routes mounted at `/blocks`.
///
/// ```text
/// POST   /              -> create
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
/// GET    /{id}/floors   -> floor::list_by_block
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(block::create))
        .route(
            "/{id}",
            get(block::get_by_id).put(block::update).delete(block::delete),
        )
        .route("/{id}/floors", get(floor::list_by_block))
}
