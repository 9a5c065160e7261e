//! Repository for the `blocks` table.

use hostel_core::types::DbId;
use sqlx::PgPool;

use crate::models::block::{Block, CreateBlock, UpdateBlock};

const COLUMNS: &str = "id, building_id, name, created_at, updated_at";

/// Provides CRUD operations for blocks.
pub struct BlockRepo;

impl BlockRepo {
    /// Insert a new block, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateBlock) -> Result<Block, sqlx::Error> {
        let query = format!(
            "INSERT INTO blocks (building_id, name) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Block>(&query)
            .bind(input.building_id)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Block>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blocks WHERE id = $1");
        sqlx::query_as::<_, Block>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the blocks of a building alphabetically.
    pub async fn list_by_building(
        pool: &PgPool,
        building_id: DbId,
    ) -> Result<Vec<Block>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM blocks WHERE building_id = $1 ORDER BY name, id");
        sqlx::query_as::<_, Block>(&query)
            .bind(building_id)
            .fetch_all(pool)
            .await
    }

    /// Rename a block. Returns `None` if the block does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBlock,
    ) -> Result<Option<Block>, sqlx::Error> {
        let query = format!(
            "UPDATE blocks SET name = COALESCE($2, name)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Block>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a block with its floors and rooms. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM blocks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
