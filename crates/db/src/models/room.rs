//! Room entity model and DTOs.

use hostel_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `rooms` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Room {
    pub id: DbId,
    pub block_id: DbId,
    pub floor_id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a room. The block is taken from the floor.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRoom {
    pub floor_id: DbId,
    #[validate(length(min = 1, message = "Room name is required"))]
    pub name: String,
}

/// DTO for renaming a room.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateRoom {
    #[validate(length(min = 1, message = "Room name cannot be empty"))]
    pub name: Option<String>,
}
