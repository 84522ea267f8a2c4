//! Handlers for the `/units` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use stroyka_core::error::CoreError;
use stroyka_core::types::DbId;
use stroyka_db::models::unit::{CreateUnit, Unit, UnitFilter, UpdateUnit};
use stroyka_db::repositories::UnitRepo;

use crate::error::{AppError, AppResult};
use crate::response::{CreatedResponse, StatusResponse};
use crate::state::AppState;

/// POST /api/v1/units
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateUnit>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let unit = UnitRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse::new(unit.id))))
}

/// GET /api/v1/units
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<UnitFilter>,
) -> AppResult<Json<Vec<Unit>>> {
    let units = UnitRepo::list(&state.pool, &filter).await?;
    Ok(Json(units))
}

/// GET /api/v1/units/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Unit>> {
    let unit = UnitRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Unit", id }))?;
    Ok(Json(unit))
}

/// PUT /api/v1/units/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUnit>,
) -> AppResult<Json<StatusResponse>> {
    UnitRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Unit", id }))?;
    Ok(Json(StatusResponse::success()))
}

/// DELETE /api/v1/units/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<StatusResponse>> {
    let deleted = UnitRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Unit", id }));
    }
    Ok(Json(StatusResponse::success()))
}
