//! Repository for the `buildings` table.

use hostel_core::types::DbId;
use sqlx::PgPool;

use crate::models::building::{Building, CreateBuilding, UpdateBuilding};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for buildings.
pub struct BuildingRepo;

impl BuildingRepo {
    /// Insert a new building, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateBuilding) -> Result<Building, sqlx::Error> {
        let query = format!("INSERT INTO buildings (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Building>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a building by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Building>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM buildings WHERE id = $1");
        sqlx::query_as::<_, Building>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all buildings alphabetically.
    pub async fn list(pool: &PgPool) -> Result<Vec<Building>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM buildings ORDER BY name, id");
        sqlx::query_as::<_, Building>(&query).fetch_all(pool).await
    }

    /// Update a building. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBuilding,
    ) -> Result<Option<Building>, sqlx::Error> {
        let query = format!(
            "UPDATE buildings SET name = COALESCE($2, name)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Building>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a building and, by cascade, its blocks, floors and rooms.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM buildings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
