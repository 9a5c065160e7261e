//! Student entity model and DTOs.
//!
//! Students carry denormalized location fields (`building_name`,
//! `block_name`, `floor_number`, `room_number`) alongside the `room_id`
//! reference. Both are filterable.

use hostel_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `students` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Student {
    pub id: DbId,
    pub name: String,
    pub registration_no: String,
    pub phone_number: String,
    pub parent_phone_number: Option<String>,
    pub photo_url: Option<String>,
    pub building_name: Option<String>,
    pub block_name: Option<String>,
    pub floor_number: Option<i32>,
    pub room_number: Option<String>,
    pub room_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a student.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStudent {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(length(min = 3, message = "Registration number must be at least 3 characters"))]
    pub registration_no: String,
    #[validate(length(min = 10, message = "Phone number must be at least 10 digits"))]
    pub phone_number: String,
    #[validate(length(min = 10, message = "Parent's phone number must be at least 10 digits"))]
    pub parent_phone_number: Option<String>,
    pub photo_url: Option<String>,
    pub building_name: Option<String>,
    pub block_name: Option<String>,
    pub floor_number: Option<i32>,
    pub room_number: Option<String>,
    pub room_id: Option<DbId>,
}

/// DTO for editing a student. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateStudent {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 3, message = "Registration number must be at least 3 characters"))]
    pub registration_no: Option<String>,
    #[validate(length(min = 10, message = "Phone number must be at least 10 digits"))]
    pub phone_number: Option<String>,
    #[validate(length(min = 10, message = "Parent's phone number must be at least 10 digits"))]
    pub parent_phone_number: Option<String>,
    pub photo_url: Option<String>,
    pub building_name: Option<String>,
    pub block_name: Option<String>,
    pub floor_number: Option<i32>,
    pub room_number: Option<String>,
    pub room_id: Option<DbId>,
}

/// Filters for listing students. `None` fields do not constrain.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentFilter {
    pub room_id: Option<DbId>,
    pub building_name: Option<String>,
    pub block_name: Option<String>,
    pub floor_number: Option<i32>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Location scope of an unpaginated roster, e.g. the day register.
/// Uses the same predicates as [`StudentFilter`]; `None` fields do not
/// constrain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterScope {
    pub room_id: Option<DbId>,
    pub building_name: Option<String>,
    pub block_name: Option<String>,
    pub floor_number: Option<i32>,
}
