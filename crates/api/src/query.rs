//! Shared query parameter types for API handlers.

use hostel_core::types::DbId;
use serde::Deserialize;

/// Optional room scope (`?room_id=`) for attendance views.
#[derive(Debug, Default, Deserialize)]
pub struct RoomScopeParams {
    pub room_id: Option<DbId>,
}
