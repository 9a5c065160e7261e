//! Repository for the `attendance` table.
//!
//! Per-student marks are unique per `(student_id, date)` via the partial
//! index `uq_attendance_student_date`; holiday markers (`student_id IS
//! NULL`) are not constrained.

use hostel_core::attendance::AttendanceStatus;
use hostel_core::types::{Date, DbId};
use sqlx::{PgExecutor, PgPool};

use crate::models::attendance::{AttendanceFilter, AttendanceRecord, MarkAttendance};

const COLUMNS: &str = "id, student_id, status, date, room_id, created_at, updated_at";

/// Provides reads and the mark/holiday mutations for attendance.
pub struct AttendanceRepo;

impl AttendanceRepo {
    /// List raw rows matching `filter`, ordered by date then id.
    pub async fn list(
        pool: &PgPool,
        filter: &AttendanceFilter,
    ) -> Result<Vec<AttendanceRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM attendance
             WHERE ($1::DATE IS NULL OR date = $1)
               AND ($2::BIGINT IS NULL OR room_id = $2)
               AND ($3::BIGINT IS NULL OR student_id = $3)
             ORDER BY date, id"
        );
        sqlx::query_as::<_, AttendanceRecord>(&query)
            .bind(filter.date)
            .bind(filter.room_id)
            .bind(filter.student_id)
            .fetch_all(pool)
            .await
    }

    /// Rows dated within `[start, end]` as seen from a room's calendar.
    ///
    /// Without a room, every student mark and every day-wide holiday marker
    /// is returned. With a room, student marks are limited to that room and
    /// holiday markers to day-wide ones plus those scoped to the room.
    pub async fn list_between(
        pool: &PgPool,
        start: Date,
        end: Date,
        room_id: Option<DbId>,
    ) -> Result<Vec<AttendanceRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM attendance
             WHERE date BETWEEN $1 AND $2
               AND (
                    (student_id IS NULL AND (room_id IS NULL OR room_id = $3))
                 OR (student_id IS NOT NULL AND ($3::BIGINT IS NULL OR room_id = $3))
               )
             ORDER BY date, id"
        );
        sqlx::query_as::<_, AttendanceRecord>(&query)
            .bind(start)
            .bind(end)
            .bind(room_id)
            .fetch_all(pool)
            .await
    }

    /// Every student mark on `date`, plus the holiday markers visible from
    /// `room_id` (day-wide ones, and the room's own when a room is given).
    pub async fn list_for_day(
        pool: &PgPool,
        date: Date,
        room_id: Option<DbId>,
    ) -> Result<Vec<AttendanceRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM attendance
             WHERE date = $1
               AND (student_id IS NOT NULL OR room_id IS NULL OR room_id = $2)
             ORDER BY id"
        );
        sqlx::query_as::<_, AttendanceRecord>(&query)
            .bind(date)
            .bind(room_id)
            .fetch_all(pool)
            .await
    }

    /// Find a student's mark on a given day.
    pub async fn find_for_student(
        pool: &PgPool,
        student_id: DbId,
        date: Date,
    ) -> Result<Option<AttendanceRecord>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM attendance WHERE student_id = $1 AND date = $2");
        sqlx::query_as::<_, AttendanceRecord>(&query)
            .bind(student_id)
            .bind(date)
            .fetch_optional(pool)
            .await
    }

    /// Create or overwrite a student's mark for a day in one statement.
    ///
    /// An existing row keeps its room unless a new `room_id` is given.
    pub async fn upsert_for_student(
        pool: &PgPool,
        input: &MarkAttendance,
    ) -> Result<AttendanceRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO attendance (student_id, status, date, room_id)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (student_id, date) WHERE student_id IS NOT NULL
             DO UPDATE SET
                status = EXCLUDED.status,
                room_id = COALESCE(EXCLUDED.room_id, attendance.room_id),
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AttendanceRecord>(&query)
            .bind(input.student_id)
            .bind(input.status.code())
            .bind(input.date)
            .bind(input.room_id)
            .fetch_one(pool)
            .await
    }

    /// Insert one holiday marker for `date`.
    pub async fn insert_holiday(
        pool: &PgPool,
        date: Date,
        room_id: Option<DbId>,
    ) -> Result<AttendanceRecord, sqlx::Error> {
        Self::insert_marker(pool, date, room_id).await
    }

    /// Insert one holiday marker per date, all or nothing.
    ///
    /// Any failure rolls back every marker of the period.
    pub async fn insert_holiday_period(
        pool: &PgPool,
        dates: &[Date],
        room_id: Option<DbId>,
    ) -> Result<Vec<AttendanceRecord>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut records = Vec::with_capacity(dates.len());

        for &date in dates {
            let record = Self::insert_marker(&mut *tx, date, room_id).await?;
            records.push(record);
        }

        tx.commit().await?;
        Ok(records)
    }

    async fn insert_marker<'e>(
        executor: impl PgExecutor<'e>,
        date: Date,
        room_id: Option<DbId>,
    ) -> Result<AttendanceRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO attendance (student_id, status, date, room_id)
             VALUES (NULL, $1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AttendanceRecord>(&query)
            .bind(AttendanceStatus::Holiday.code())
            .bind(date)
            .bind(room_id)
            .fetch_one(executor)
            .await
    }
}
