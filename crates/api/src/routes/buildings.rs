//! Route definitions for the `/buildings` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{block, building};
use crate::state::AppState;

/// Routes mounted at `/buildings`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
/// GET    /{id}/blocks   -> block::list_by_building
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(building::list).post(building::create))
        .route(
            "/{id}",
            get(building::get_by_id)
                .put(building::update)
                .delete(building::delete),
        )
        .route("/{id}/blocks", get(block::list_by_building))
}
