//! Handlers for the `/floors` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hostel_core::error::CoreError;
use hostel_core::naming::{floor_label, MAX_ROOMS_PER_FLOOR};
use hostel_core::types::DbId;
use hostel_db::models::floor::{
    CreateFloor, Floor, FloorWithRoomCount, RoomCountChange, UpdateFloor,
};
use hostel_db::repositories::{BlockRepo, FloorRepo};
use hostel_events::{ChangeAction, ChangeEvent, Table};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Floor", id })
}

/// A floor in a block listing, with its display label.
#[derive(Debug, Serialize)]
pub struct FloorSummary {
    #[serde(flatten)]
    pub floor: FloorWithRoomCount,
    /// The floor's own name, or an ordinal label such as `2nd Floor`.
    pub label: String,
}

impl From<FloorWithRoomCount> for FloorSummary {
    fn from(floor: FloorWithRoomCount) -> Self {
        let label = floor
            .name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| floor_label(floor.floor_number));
        Self { floor, label }
    }
}

/// Request body for `PUT /floors/{id}/room-count`.
#[derive(Debug, Deserialize)]
pub struct RoomCountInput {
    pub count: usize,
}

/// GET /api/v1/blocks/{id}/floors
pub async fn list_by_block(
    State(state): State<AppState>,
    Path(block_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<FloorSummary>>>> {
    BlockRepo::find_by_id(&state.pool, block_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Block",
            id: block_id,
        }))?;
    let floors = FloorRepo::list_by_block(&state.pool, block_id).await?;
    Ok(Json(DataResponse {
        data: floors.into_iter().map(FloorSummary::from).collect(),
    }))
}

/// POST /api/v1/floors
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateFloor>,
) -> AppResult<(StatusCode, Json<DataResponse<Floor>>)> {
    input.validate()?;
    let floor = FloorRepo::create(&state.pool, &input).await?;

    state
        .event_bus
        .publish(ChangeEvent::row(Table::Floors, ChangeAction::Created, floor.id).with_data(&floor));

    Ok((StatusCode::CREATED, Json(DataResponse { data: floor })))
}

/// GET /api/v1/floors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Floor>>> {
    let floor = FloorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: floor }))
}

/// PUT /api/v1/floors/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFloor>,
) -> AppResult<Json<DataResponse<Floor>>> {
    input.validate()?;
    let floor = FloorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    state
        .event_bus
        .publish(ChangeEvent::row(Table::Floors, ChangeAction::Updated, id).with_data(&floor));

    Ok(Json(DataResponse { data: floor }))
}

/// DELETE /api/v1/floors/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if !FloorRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    state
        .event_bus
        .publish(ChangeEvent::row(Table::Floors, ChangeAction::Deleted, id));
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/floors/{id}/room-count
///
/// Adds or removes rooms so the floor holds exactly `count` rooms.
pub async fn resize_rooms(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<RoomCountInput>,
) -> AppResult<Json<DataResponse<RoomCountChange>>> {
    if input.count > MAX_ROOMS_PER_FLOOR {
        return Err(AppError::Core(CoreError::Validation(format!(
            "A floor can hold at most {MAX_ROOMS_PER_FLOOR} rooms"
        ))));
    }

    let change = FloorRepo::resize_rooms(&state.pool, id, input.count)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(
        floor_id = id,
        room_count = change.room_count,
        added = change.added,
        removed = change.removed,
        "Floor rooms resized"
    );
    state.event_bus.publish(
        ChangeEvent::new(Table::Floors, "floor.rooms_resized")
            .with_entity(id)
            .with_data(&change),
    );

    Ok(Json(DataResponse { data: change }))
}
