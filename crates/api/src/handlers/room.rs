//! Handlers for the `/rooms` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hostel_core::error::CoreError;
use hostel_core::types::DbId;
use hostel_db::models::room::{CreateRoom, Room, UpdateRoom};
use hostel_db::repositories::{FloorRepo, RoomRepo};
use hostel_events::{ChangeAction, ChangeEvent, Table};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(entity: &'static str, id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity, id })
}

/// GET /api/v1/floors/{id}/rooms
pub async fn list_by_floor(
    State(state): State<AppState>,
    Path(floor_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Room>>>> {
    FloorRepo::find_by_id(&state.pool, floor_id)
        .await?
        .ok_or_else(|| not_found("Floor", floor_id))?;
    let rooms = RoomRepo::list_by_floor(&state.pool, floor_id).await?;
    Ok(Json(DataResponse { data: rooms }))
}

/// POST /api/v1/rooms
///
/// The room inherits its block from the floor.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateRoom>,
) -> AppResult<(StatusCode, Json<DataResponse<Room>>)> {
    input.validate()?;
    let room = RoomRepo::create(&state.pool, &input)
        .await?
        .ok_or_else(|| not_found("Floor", input.floor_id))?;

    state
        .event_bus
        .publish(ChangeEvent::row(Table::Rooms, ChangeAction::Created, room.id).with_data(&room));

    Ok((StatusCode::CREATED, Json(DataResponse { data: room })))
}

/// GET /api/v1/rooms/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Room>>> {
    let room = RoomRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Room", id))?;
    Ok(Json(DataResponse { data: room }))
}

/// PUT /api/v1/rooms/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRoom>,
) -> AppResult<Json<DataResponse<Room>>> {
    input.validate()?;
    let room = RoomRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("Room", id))?;

    state
        .event_bus
        .publish(ChangeEvent::row(Table::Rooms, ChangeAction::Updated, id).with_data(&room));

    Ok(Json(DataResponse { data: room }))
}

/// DELETE /api/v1/rooms/{id}
///
/// Students in the room keep their record with `room_id` cleared.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if !RoomRepo::delete(&state.pool, id).await? {
        return Err(not_found("Room", id));
    }
    state
        .event_bus
        .publish(ChangeEvent::row(Table::Rooms, ChangeAction::Deleted, id));
    Ok(StatusCode::NO_CONTENT)
}
