use axum::routing::{get, post};
use axum::Router;

use crate::handlers::room;
use crate::state::AppState;

/// Routes mounted at `/rooms`.
///
/// ```text
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(room::create)).route(
        "/{id}",
        get(room::get_by_id).put(room::update).delete(room::delete),
    )
}
