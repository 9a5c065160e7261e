//! Repository for the `rooms` table.

use hostel_core::types::DbId;
use sqlx::PgPool;

use crate::models::room::{CreateRoom, Room, UpdateRoom};

const COLUMNS: &str = "id, block_id, floor_id, name, created_at, updated_at";

/// Provides CRUD operations for rooms.
pub struct RoomRepo;

impl RoomRepo {
    /// Insert a room on a floor, inheriting the floor's block.
    ///
    /// Returns `None` if the floor does not exist.
    pub async fn create(pool: &PgPool, input: &CreateRoom) -> Result<Option<Room>, sqlx::Error> {
        let query = format!(
            "INSERT INTO rooms (block_id, floor_id, name)
             SELECT block_id, id, $2 FROM floors WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Room>(&query)
            .bind(input.floor_id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Room>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooms WHERE id = $1");
        sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the rooms on a floor in creation order.
    pub async fn list_by_floor(pool: &PgPool, floor_id: DbId) -> Result<Vec<Room>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooms WHERE floor_id = $1 ORDER BY id");
        sqlx::query_as::<_, Room>(&query)
            .bind(floor_id)
            .fetch_all(pool)
            .await
    }

    /// Rename a room. Returns `None` if the room does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRoom,
    ) -> Result<Option<Room>, sqlx::Error> {
        let query = format!(
            "UPDATE rooms SET name = COALESCE($2, name)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a room. Students and their marks keep existing with a cleared
    /// `room_id`; holiday markers scoped to the room are removed with it.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
