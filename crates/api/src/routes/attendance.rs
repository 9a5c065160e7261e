//! Route definitions for the attendance register.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::attendance;
use crate::state::AppState;

/// Routes mounted at `/attendance`.
///
/// ```text
/// GET    /                          -> list (?date, room_id, student_id)
/// PUT    /                          -> mark
/// GET    /months/{year}/{month}     -> month (?room_id)
/// GET    /days/{date}               -> day (?room_id)
/// POST   /holidays                  -> mark_holiday
/// POST   /holiday-periods           -> mark_holiday_period
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(attendance::list).put(attendance::mark))
        .route("/months/{year}/{month}", get(attendance::month))
        .route("/days/{date}", get(attendance::day))
        .route("/holidays", post(attendance::mark_holiday))
        .route("/holiday-periods", post(attendance::mark_holiday_period))
}
