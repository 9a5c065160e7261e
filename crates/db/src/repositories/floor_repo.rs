//! Repository for the `floors` table, including room-count resizing.

use hostel_core::naming;
use hostel_core::types::DbId;
use sqlx::PgPool;

use crate::models::floor::{CreateFloor, Floor, FloorWithRoomCount, RoomCountChange, UpdateFloor};

const COLUMNS: &str = "id, block_id, floor_number, name, created_at, updated_at";

/// Provides CRUD operations for floors.
pub struct FloorRepo;

impl FloorRepo {
    /// Insert a new floor, returning the created row.
    ///
    /// A second floor with the same number in one block violates
    /// `uq_floors_block_floor_number`.
    pub async fn create(pool: &PgPool, input: &CreateFloor) -> Result<Floor, sqlx::Error> {
        let query = format!(
            "INSERT INTO floors (block_id, floor_number, name)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Floor>(&query)
            .bind(input.block_id)
            .bind(input.floor_number)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Floor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM floors WHERE id = $1");
        sqlx::query_as::<_, Floor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the floors of a block in floor-number order, each with its room count.
    pub async fn list_by_block(
        pool: &PgPool,
        block_id: DbId,
    ) -> Result<Vec<FloorWithRoomCount>, sqlx::Error> {
        sqlx::query_as::<_, FloorWithRoomCount>(
            "SELECT f.id, f.block_id, f.floor_number, f.name, \
                    COUNT(r.id) AS room_count, f.created_at, f.updated_at \
             FROM floors f \
             LEFT JOIN rooms r ON r.floor_id = f.id \
             WHERE f.block_id = $1 \
             GROUP BY f.id \
             ORDER BY f.floor_number",
        )
        .bind(block_id)
        .fetch_all(pool)
        .await
    }

    /// Rename or renumber a floor. Returns `None` if the floor does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFloor,
    ) -> Result<Option<Floor>, sqlx::Error> {
        let query = format!(
            "UPDATE floors SET
                floor_number = COALESCE($2, floor_number),
                name = COALESCE($3, name)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Floor>(&query)
            .bind(id)
            .bind(input.floor_number)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a floor and its rooms. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM floors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Grow or shrink the rooms of a floor to exactly `target` rooms.
    ///
    /// New rooms continue the floor's naming sequence (`A-203`, `A-204`, ...);
    /// surplus rooms are removed newest first. Runs in one transaction and
    /// locks the floor row so concurrent resizes serialize.
    ///
    /// Returns `None` if the floor does not exist.
    pub async fn resize_rooms(
        pool: &PgPool,
        floor_id: DbId,
        target: usize,
    ) -> Result<Option<RoomCountChange>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let floor: Option<(DbId, i32, String)> = sqlx::query_as(
            "SELECT f.block_id, f.floor_number, b.name \
             FROM floors f \
             JOIN blocks b ON b.id = f.block_id \
             WHERE f.id = $1 \
             FOR UPDATE OF f",
        )
        .bind(floor_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some((block_id, floor_number, block_name)) = floor else {
            return Ok(None);
        };

        let mut room_ids: Vec<DbId> =
            sqlx::query_scalar("SELECT id FROM rooms WHERE floor_id = $1 ORDER BY id")
                .bind(floor_id)
                .fetch_all(&mut *tx)
                .await?;
        let existing = room_ids.len();

        let mut added = 0;
        let mut removed = 0;

        if target > existing {
            for name in naming::rooms_to_add(&block_name, floor_number, existing, target) {
                sqlx::query("INSERT INTO rooms (block_id, floor_id, name) VALUES ($1, $2, $3)")
                    .bind(block_id)
                    .bind(floor_id)
                    .bind(&name)
                    .execute(&mut *tx)
                    .await?;
                added += 1;
            }
        } else if target < existing {
            let surplus = room_ids.split_off(target);
            let result = sqlx::query("DELETE FROM rooms WHERE id = ANY($1)")
                .bind(&surplus)
                .execute(&mut *tx)
                .await?;
            removed = result.rows_affected() as usize;
        }

        tx.commit().await?;

        tracing::debug!(floor_id, existing, target, added, removed, "Resized floor rooms");

        Ok(Some(RoomCountChange {
            floor_id,
            room_count: existing + added - removed,
            added,
            removed,
        }))
    }
}
