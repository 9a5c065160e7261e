//! Handlers for the `/students` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use hostel_core::error::CoreError;
use hostel_core::types::DbId;
use hostel_db::models::student::{CreateStudent, Student, StudentFilter, UpdateStudent};
use hostel_db::repositories::StudentRepo;
use hostel_events::{ChangeAction, ChangeEvent, Table};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Student",
        id,
    })
}

/// GET /api/v1/students
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<StudentFilter>,
) -> AppResult<Json<DataResponse<Vec<Student>>>> {
    let students = StudentRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: students }))
}

/// POST /api/v1/students
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateStudent>,
) -> AppResult<(StatusCode, Json<DataResponse<Student>>)> {
    input.validate()?;
    let student = StudentRepo::create(&state.pool, &input).await?;

    tracing::info!(student_id = student.id, room_id = ?student.room_id, "Student registered");
    state.event_bus.publish(
        ChangeEvent::row(Table::Students, ChangeAction::Created, student.id).with_data(&student),
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: student })))
}

/// GET /api/v1/students/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Student>>> {
    let student = StudentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: student }))
}

/// PUT /api/v1/students/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStudent>,
) -> AppResult<Json<DataResponse<Student>>> {
    input.validate()?;
    let student = StudentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    state.event_bus.publish(
        ChangeEvent::row(Table::Students, ChangeAction::Updated, id).with_data(&student),
    );

    Ok(Json(DataResponse { data: student }))
}

/// DELETE /api/v1/students/{id}
///
/// The student's attendance rows are removed with them.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if !StudentRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    state
        .event_bus
        .publish(ChangeEvent::row(Table::Students, ChangeAction::Deleted, id));
    Ok(StatusCode::NO_CONTENT)
}
