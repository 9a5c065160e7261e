//! Floor entity model and DTOs.

use hostel_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `floors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Floor {
    pub id: DbId,
    pub block_id: DbId,
    pub floor_number: i32,
    pub name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A floor together with the number of rooms on it, for block listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FloorWithRoomCount {
    pub id: DbId,
    pub block_id: DbId,
    pub floor_number: i32,
    pub name: Option<String>,
    pub room_count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new floor in a block.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFloor {
    pub block_id: DbId,
    #[validate(range(min = 0, message = "Floor number cannot be negative"))]
    pub floor_number: i32,
    pub name: Option<String>,
}

/// DTO for renaming or renumbering a floor.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateFloor {
    #[validate(range(min = 0, message = "Floor number cannot be negative"))]
    pub floor_number: Option<i32>,
    pub name: Option<String>,
}

/// Outcome of resizing a floor to a target room count.
#[derive(Debug, Clone, Serialize)]
pub struct RoomCountChange {
    pub floor_id: DbId,
    pub room_count: usize,
    pub added: usize,
    pub removed: usize,
}
