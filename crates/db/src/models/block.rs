//! Block entity model and DTOs.

use hostel_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `blocks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Block {
    pub id: DbId,
    pub building_id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new block inside a building.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBlock {
    pub building_id: DbId,
    #[validate(length(min = 1, message = "Block name is required"))]
    pub name: String,
}

/// DTO for updating an existing block.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateBlock {
    #[validate(length(min = 1, message = "Block name cannot be empty"))]
    pub name: Option<String>,
}
