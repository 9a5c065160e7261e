//! Route definitions for the `/floors` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{floor, room};
use crate::state::AppState;

/// Routes mounted at `/floors`.
///
/// ```text
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete
/// GET    /{id}/rooms        -> room::list_by_floor
/// PUT    /{id}/room-count   -> resize_rooms
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(floor::create))
        .route(
            "/{id}",
            get(floor::get_by_id).put(floor::update).delete(floor::delete),
        )
        .route("/{id}/rooms", get(room::list_by_floor))
        .route("/{id}/room-count", put(floor::resize_rooms))
}
