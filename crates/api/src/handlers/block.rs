//! Handlers for the `/blocks` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hostel_core::error::CoreError;
use hostel_core::types::DbId;
use hostel_db::models::block::{Block, CreateBlock, UpdateBlock};
use hostel_db::repositories::{BlockRepo, BuildingRepo};
use hostel_events::{ChangeAction, ChangeEvent, Table};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Block", id })
}

/// GET /api/v1/buildings/{id}/blocks
pub async fn list_by_building(
    State(state): State<AppState>,
    Path(building_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Block>>>> {
    BuildingRepo::find_by_id(&state.pool, building_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Building",
            id: building_id,
        }))?;
    let blocks = BlockRepo::list_by_building(&state.pool, building_id).await?;
    Ok(Json(DataResponse { data: blocks }))
}

/// POST /api/v1/blocks
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateBlock>,
) -> AppResult<(StatusCode, Json<DataResponse<Block>>)> {
    input.validate()?;
    let block = BlockRepo::create(&state.pool, &input).await?;

    state
        .event_bus
        .publish(ChangeEvent::row(Table::Blocks, ChangeAction::Created, block.id).with_data(&block));

    Ok((StatusCode::CREATED, Json(DataResponse { data: block })))
}

/// GET /api/v1/blocks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Block>>> {
    let block = BlockRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: block }))
}

/// PUT /api/v1/blocks/{id}
///
/// Renaming a block does not rename its existing rooms.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBlock>,
) -> AppResult<Json<DataResponse<Block>>> {
    input.validate()?;
    let block = BlockRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    state
        .event_bus
        .publish(ChangeEvent::row(Table::Blocks, ChangeAction::Updated, id).with_data(&block));

    Ok(Json(DataResponse { data: block }))
}

/// DELETE /api/v1/blocks/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if !BlockRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    state
        .event_bus
        .publish(ChangeEvent::row(Table::Blocks, ChangeAction::Deleted, id));
    Ok(StatusCode::NO_CONTENT)
}
