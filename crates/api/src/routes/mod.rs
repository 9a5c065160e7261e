pub mod attendance;
pub mod blocks;
pub mod buildings;
pub mod floors;
pub mod health;
pub mod rooms;
pub mod students;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;
use crate::ws;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /ws                                  realtime change channel
///
/// /buildings                           list, create
/// /buildings/{id}                      get, update, delete
/// /buildings/{id}/blocks               list blocks
/// /blocks                              create
/// /blocks/{id}                         get, update, delete
/// /blocks/{id}/floors                  list floors with room counts
/// /floors                              create
/// /floors/{id}                         get, update, delete
/// /floors/{id}/rooms                   list rooms
/// /floors/{id}/room-count              resize rooms (PUT)
/// /rooms                               create
/// /rooms/{id}                          get, update, delete
/// /students                            list (filters), create
/// /students/{id}                       get, update, delete
///
/// /attendance                          list rows, mark (PUT)
/// /attendance/months/{year}/{month}    month aggregate
/// /attendance/days/{date}              day detail
/// /attendance/holidays                 mark holiday (POST)
/// /attendance/holiday-periods          mark holiday period (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/ws", get(ws::ws_handler))
        .nest("/buildings", buildings::router())
        .nest("/blocks", blocks::router())
        .nest("/floors", floors::router())
        .nest("/rooms", rooms::router())
        .nest("/students", students::router())
        .nest("/attendance", attendance::router())
}
