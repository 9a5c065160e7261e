//! Handlers for the `/buildings` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hostel_core::error::CoreError;
use hostel_core::types::DbId;
use hostel_db::models::building::{Building, CreateBuilding, UpdateBuilding};
use hostel_db::repositories::BuildingRepo;
use hostel_events::{ChangeAction, ChangeEvent, Table};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Building",
        id,
    })
}

/// GET /api/v1/buildings
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Building>>>> {
    let buildings = BuildingRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: buildings }))
}

/// POST /api/v1/buildings
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateBuilding>,
) -> AppResult<(StatusCode, Json<DataResponse<Building>>)> {
    input.validate()?;
    let building = BuildingRepo::create(&state.pool, &input).await?;

    state.event_bus.publish(
        ChangeEvent::row(Table::Buildings, ChangeAction::Created, building.id).with_data(&building),
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: building })))
}

/// GET /api/v1/buildings/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Building>>> {
    let building = BuildingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: building }))
}

/// PUT /api/v1/buildings/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBuilding>,
) -> AppResult<Json<DataResponse<Building>>> {
    input.validate()?;
    let building = BuildingRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    state.event_bus.publish(
        ChangeEvent::row(Table::Buildings, ChangeAction::Updated, id).with_data(&building),
    );

    Ok(Json(DataResponse { data: building }))
}

/// DELETE /api/v1/buildings/{id}
///
/// Removes the building's blocks, floors and rooms with it.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if !BuildingRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(building_id = id, "Building deleted");
    state
        .event_bus
        .publish(ChangeEvent::row(Table::Buildings, ChangeAction::Deleted, id));
    Ok(StatusCode::NO_CONTENT)
}
