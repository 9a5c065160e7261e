//! Repository for the `students` table.

use hostel_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use hostel_core::types::DbId;
use sqlx::PgPool;

use crate::models::student::{CreateStudent, RosterScope, Student, StudentFilter, UpdateStudent};

const COLUMNS: &str = "id, name, registration_no, phone_number, parent_phone_number, photo_url, \
     building_name, block_name, floor_number, room_number, room_id, created_at, updated_at";

/// Provides CRUD operations for students.
pub struct StudentRepo;

impl StudentRepo {
    /// Insert a new student, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateStudent) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO students (name, registration_no, phone_number, parent_phone_number, \
                 photo_url, building_name, block_name, floor_number, room_number, room_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(&input.name)
            .bind(&input.registration_no)
            .bind(&input.phone_number)
            .bind(&input.parent_phone_number)
            .bind(&input.photo_url)
            .bind(&input.building_name)
            .bind(&input.block_name)
            .bind(input.floor_number)
            .bind(&input.room_number)
            .bind(input.room_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List students matching `filter`, ordered by name.
    ///
    /// Filters combine with AND; `None` fields are ignored. `limit` and
    /// `offset` are clamped to sane bounds.
    pub async fn list(pool: &PgPool, filter: &StudentFilter) -> Result<Vec<Student>, sqlx::Error> {
        let limit = clamp_limit(filter.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
        let offset = clamp_offset(filter.offset);
        let query = format!(
            "SELECT {COLUMNS} FROM students
             WHERE ($1::BIGINT IS NULL OR room_id = $1)
               AND ($2::TEXT IS NULL OR building_name = $2)
               AND ($3::TEXT IS NULL OR block_name = $3)
               AND ($4::INTEGER IS NULL OR floor_number = $4)
             ORDER BY name, id
             LIMIT $5 OFFSET $6"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(filter.room_id)
            .bind(&filter.building_name)
            .bind(&filter.block_name)
            .bind(filter.floor_number)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Every student within `scope`, ordered by name.
    ///
    /// Unpaginated; used for the attendance register of a day.
    pub async fn list_roster(
        pool: &PgPool,
        scope: &RosterScope,
    ) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM students
             WHERE ($1::BIGINT IS NULL OR room_id = $1)
               AND ($2::TEXT IS NULL OR building_name = $2)
               AND ($3::TEXT IS NULL OR block_name = $3)
               AND ($4::INTEGER IS NULL OR floor_number = $4)
             ORDER BY name, id"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(scope.room_id)
            .bind(&scope.building_name)
            .bind(&scope.block_name)
            .bind(scope.floor_number)
            .fetch_all(pool)
            .await
    }

    /// Update a student. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStudent,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!(
            "UPDATE students SET
                name = COALESCE($2, name),
                registration_no = COALESCE($3, registration_no),
                phone_number = COALESCE($4, phone_number),
                parent_phone_number = COALESCE($5, parent_phone_number),
                photo_url = COALESCE($6, photo_url),
                building_name = COALESCE($7, building_name),
                block_name = COALESCE($8, block_name),
                floor_number = COALESCE($9, floor_number),
                room_number = COALESCE($10, room_number),
                room_id = COALESCE($11, room_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.registration_no)
            .bind(&input.phone_number)
            .bind(&input.parent_phone_number)
            .bind(&input.photo_url)
            .bind(&input.building_name)
            .bind(&input.block_name)
            .bind(input.floor_number)
            .bind(&input.room_number)
            .bind(input.room_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a student and their attendance rows. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
