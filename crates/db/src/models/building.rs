//! Building entity model and DTOs.

use hostel_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `buildings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Building {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new building.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBuilding {
    #[validate(length(min = 1, message = "Building name is required"))]
    pub name: String,
}

/// DTO for updating an existing building. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateBuilding {
    #[validate(length(min = 1, message = "Building name cannot be empty"))]
    pub name: Option<String>,
}
