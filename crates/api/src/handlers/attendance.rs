//! Handlers for the attendance register.
//!
//! Per-student marks are upserted; holidays are stored as student-less
//! marker rows. The month view collapses rows into one status per day,
//! where a holiday marker always wins.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use hostel_core::attendance::{aggregate_month, resolve_day, MonthAttendance};
use hostel_core::calendar::{holiday_period_dates, YearMonth};
use hostel_core::error::CoreError;
use hostel_core::types::{Date, DbId};
use hostel_db::models::attendance::{
    AttendanceFilter, AttendanceRecord, MarkAttendance, MarkHoliday, MarkHolidayPeriod,
};
use hostel_db::models::student::RosterScope;
use hostel_db::repositories::{AttendanceRepo, StudentRepo};
use hostel_events::{ChangeEvent, Table};
use serde::Serialize;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::query::RoomScopeParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Calendar view of one month.
#[derive(Debug, Serialize)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    /// `YYYY-MM`.
    pub label: String,
    /// `null` at the edge of the supported year range.
    pub previous: Option<YearMonth>,
    pub next: Option<YearMonth>,
    pub room_id: Option<DbId>,
    /// One status per marked day; unmarked days are absent.
    pub days: MonthAttendance,
}

/// One roster entry of the day register.
#[derive(Debug, Serialize)]
pub struct StudentDayStatus {
    pub student_id: DbId,
    pub name: String,
    pub registration_no: String,
    pub room_number: Option<String>,
    /// `P`, `A`, `L`, `H`, or `-` when unmarked.
    pub status: &'static str,
}

/// The register for a single day.
#[derive(Debug, Serialize)]
pub struct DayView {
    pub date: Date,
    /// The roster scope the register was built for.
    #[serde(flatten)]
    pub scope: RosterScope,
    /// A holiday marker exists for the day (day-wide or for the room).
    pub holiday: bool,
    /// Roster entries with a mark.
    pub marked: usize,
    pub students: Vec<StudentDayStatus>,
}

/// Outcome of marking a holiday period.
#[derive(Debug, Serialize)]
pub struct HolidayPeriodResult {
    pub marked: usize,
    pub start_date: Date,
    pub end_date: Date,
    pub records: Vec<AttendanceRecord>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/attendance
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<AttendanceFilter>,
) -> AppResult<Json<DataResponse<Vec<AttendanceRecord>>>> {
    let records = AttendanceRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: records }))
}

/// PUT /api/v1/attendance
///
/// Creates or overwrites the student's mark for the day. Without an
/// explicit `room_id` the student's current room is recorded.
pub async fn mark(
    State(state): State<AppState>,
    Json(mut input): Json<MarkAttendance>,
) -> AppResult<Json<DataResponse<AttendanceRecord>>> {
    let student = StudentRepo::find_by_id(&state.pool, input.student_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id: input.student_id,
        }))?;
    input.room_id = input.room_id.or(student.room_id);

    let record = AttendanceRepo::upsert_for_student(&state.pool, &input).await?;

    tracing::debug!(
        student_id = input.student_id,
        date = %input.date,
        status = %input.status,
        "Attendance marked"
    );
    state.event_bus.publish(
        ChangeEvent::new(Table::Attendance, "attendance.marked")
            .with_entity(record.id)
            .with_data(&record),
    );

    Ok(Json(DataResponse { data: record }))
}

/// GET /api/v1/attendance/months/{year}/{month}
pub async fn month(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u32)>,
    Query(params): Query<RoomScopeParams>,
) -> AppResult<Json<DataResponse<MonthView>>> {
    let ym = YearMonth::new(year, month)?;
    let rows =
        AttendanceRepo::list_between(&state.pool, ym.first_day(), ym.last_day(), params.room_id)
            .await?;

    Ok(Json(DataResponse {
        data: MonthView {
            year: ym.year(),
            month: ym.month(),
            label: ym.to_string(),
            previous: ym.prev(),
            next: ym.next(),
            room_id: params.room_id,
            days: aggregate_month(&rows, ym),
        },
    }))
}

/// GET /api/v1/attendance/days/{date}
///
/// The roster can be narrowed by `room_id`, `building_name`, `block_name`
/// and `floor_number`. Room-scoped holidays only count when `room_id` is
/// given.
pub async fn day(
    State(state): State<AppState>,
    Path(date): Path<Date>,
    Query(scope): Query<RosterScope>,
) -> AppResult<Json<DataResponse<DayView>>> {
    let roster = StudentRepo::list_roster(&state.pool, &scope).await?;
    let rows = AttendanceRepo::list_for_day(&state.pool, date, scope.room_id).await?;
    let resolved = resolve_day(&rows, date);

    let students: Vec<StudentDayStatus> = roster
        .into_iter()
        .map(|s| StudentDayStatus {
            status: resolved.display_for(s.id),
            student_id: s.id,
            name: s.name,
            registration_no: s.registration_no,
            room_number: s.room_number,
        })
        .collect();
    let marked = students
        .iter()
        .filter(|s| resolved.status_of(s.student_id).is_some())
        .count();

    Ok(Json(DataResponse {
        data: DayView {
            date,
            scope,
            holiday: resolved.holiday,
            marked,
            students,
        },
    }))
}

/// POST /api/v1/attendance/holidays
pub async fn mark_holiday(
    State(state): State<AppState>,
    Json(input): Json<MarkHoliday>,
) -> AppResult<(StatusCode, Json<DataResponse<AttendanceRecord>>)> {
    let record = AttendanceRepo::insert_holiday(&state.pool, input.date, input.room_id).await?;

    tracing::info!(date = %input.date, room_id = ?input.room_id, "Holiday marked");
    state.event_bus.publish(
        ChangeEvent::new(Table::Attendance, "attendance.holiday_marked")
            .with_entity(record.id)
            .with_data(&record),
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}

/// POST /api/v1/attendance/holiday-periods
///
/// Marks every date of the inclusive range as a holiday. All markers are
/// written in one transaction, so either every date is marked or none is.
pub async fn mark_holiday_period(
    State(state): State<AppState>,
    Json(input): Json<MarkHolidayPeriod>,
) -> AppResult<(StatusCode, Json<DataResponse<HolidayPeriodResult>>)> {
    let dates = holiday_period_dates(input.start_date, input.end_date)?;
    let records =
        AttendanceRepo::insert_holiday_period(&state.pool, &dates, input.room_id).await?;

    let marked = records.len();
    tracing::info!(
        start_date = %input.start_date,
        end_date = %input.end_date,
        room_id = ?input.room_id,
        marked,
        "Holiday period marked"
    );
    state.event_bus.publish(
        ChangeEvent::new(Table::Attendance, "attendance.holiday_period_marked").with_payload(json!({
            "start_date": input.start_date,
            "end_date": input.end_date,
            "room_id": input.room_id,
            "marked": marked,
        })),
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: HolidayPeriodResult {
                marked,
                start_date: input.start_date,
                end_date: input.end_date,
                records,
            },
        }),
    ))
}
