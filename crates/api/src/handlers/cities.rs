//! Handlers for the `/cities` resource.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use stroyka_core::error::CoreError;
use stroyka_core::types::DbId;
use stroyka_db::models::city::{City, CityFilter, CreateCity, UpdateCity};
use stroyka_db::repositories::CityRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::read_image_field;
use crate::response::{CreatedResponse, StatusResponse, StoredImageResponse};
use crate::state::AppState;

/// POST /api/v1/cities
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCity>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let city = CityRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse::new(city.id))))
}

/// GET /api/v1/cities
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<CityFilter>,
) -> AppResult<Json<Vec<City>>> {
    let cities = CityRepo::list(&state.pool, &filter).await?;
    Ok(Json(cities))
}

/// GET /api/v1/cities/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<City>> {
    let city = CityRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "City", id }))?;
    Ok(Json(city))
}

/// PUT /api/v1/cities/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCity>,
) -> AppResult<Json<StatusResponse>> {
    CityRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "City", id }))?;
    Ok(Json(StatusResponse::success()))
}

/// DELETE /api/v1/cities/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<StatusResponse>> {
    let city = CityRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "City", id }))?;

    if let Some(image) = &city.image {
        state.images.delete(image).await?;
    }
    CityRepo::delete(&state.pool, id).await?;
    Ok(Json(StatusResponse::success()))
}

/// PATCH /api/v1/cities/{id}/image
///
/// Replace the city image with an uploaded file.
pub async fn update_image(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<StoredImageResponse>> {
    let city = CityRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "City", id }))?;

    let (original_name, bytes) = read_image_field(multipart).await?;

    if let Some(old) = &city.image {
        state.images.delete(old).await?;
    }
    let stored = state.images.save(&original_name, &bytes).await?;

    let changes = UpdateCity {
        name: None,
        image: Some(stored.clone()),
    };
    CityRepo::update(&state.pool, id, &changes).await?;

    Ok(Json(StoredImageResponse::new(stored)))
}
