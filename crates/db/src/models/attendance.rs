//! Attendance record model and DTOs.

use hostel_core::attendance::{AttendanceRow, AttendanceStatus};
use hostel_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `attendance` table.
///
/// `student_id` is `None` for day-wide holiday markers. `status` is kept as
/// the stored code so malformed legacy values can be skipped rather than
/// failing the whole fetch.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AttendanceRecord {
    pub id: DbId,
    pub student_id: Option<DbId>,
    pub status: String,
    pub date: Date,
    pub room_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl AttendanceRow for AttendanceRecord {
    fn student_id(&self) -> Option<DbId> {
        self.student_id
    }

    fn date(&self) -> Date {
        self.date
    }

    fn status_code(&self) -> &str {
        &self.status
    }
}

/// DTO for marking one student's attendance on one day.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkAttendance {
    pub student_id: DbId,
    pub status: AttendanceStatus,
    pub date: Date,
    pub room_id: Option<DbId>,
}

/// DTO for marking a single day as a holiday.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkHoliday {
    pub date: Date,
    /// Restrict the holiday to one room; `None` applies to everyone.
    pub room_id: Option<DbId>,
}

/// DTO for marking an inclusive date range as holidays.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkHolidayPeriod {
    pub start_date: Date,
    pub end_date: Date,
    pub room_id: Option<DbId>,
}

/// Filters for listing raw attendance rows.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AttendanceFilter {
    pub date: Option<Date>,
    pub room_id: Option<DbId>,
    pub student_id: Option<DbId>,
}
