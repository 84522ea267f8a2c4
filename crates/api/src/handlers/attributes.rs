//! Handlers for the `/attributes` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use stroyka_core::error::CoreError;
use stroyka_core::types::DbId;
use stroyka_db::models::attribute::{Attribute, AttributeFilter, CreateAttribute, UpdateAttribute};
use stroyka_db::repositories::AttributeRepo;

use crate::error::{AppError, AppResult};
use crate::response::{CreatedResponse, StatusResponse};
use crate::state::AppState;

/// POST /api/v1/attributes
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAttribute>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let attribute = AttributeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse::new(attribute.id))))
}

/// GET /api/v1/attributes
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<AttributeFilter>,
) -> AppResult<Json<Vec<Attribute>>> {
    let attributes = AttributeRepo::list(&state.pool, &filter).await?;
    Ok(Json(attributes))
}

/// GET /api/v1/attributes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Attribute>> {
    let attribute = AttributeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Attribute",
            id,
        }))?;
    Ok(Json(attribute))
}

/// PUT /api/v1/attributes/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAttribute>,
) -> AppResult<Json<StatusResponse>> {
    AttributeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Attribute",
            id,
        }))?;
    Ok(Json(StatusResponse::success()))
}

/// DELETE /api/v1/attributes/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<StatusResponse>> {
    let deleted = AttributeRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Attribute",
            id,
        }));
    }
    Ok(Json(StatusResponse::success()))
}
