//! Handlers for the `/categories` resource.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use stroyka_core::error::CoreError;
use stroyka_core::types::DbId;
use stroyka_db::models::category::{Category, CategoryFilter, CreateCategory, UpdateCategory};
use stroyka_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::read_image_field;
use crate::response::{CreatedResponse, StatusResponse, StoredImageResponse};
use crate::state::AppState;

/// POST /api/v1/categories
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let category = CategoryRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse::new(category.id))))
}

/// GET /api/v1/categories
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<CategoryFilter>,
) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryRepo::list(&state.pool, &filter).await?;
    Ok(Json(categories))
}

/// GET /api/v1/categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Category>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;
    Ok(Json(category))
}

/// PUT /api/v1/categories/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<Json<StatusResponse>> {
    CategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;
    Ok(Json(StatusResponse::success()))
}

/// DELETE /api/v1/categories/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<StatusResponse>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;

    if let Some(image) = &category.image {
        state.images.delete(image).await?;
    }
    CategoryRepo::delete(&state.pool, id).await?;
    Ok(Json(StatusResponse::success()))
}

/// PATCH /api/v1/categories/{id}/image
///
/// Replace the category image with an uploaded file.
pub async fn update_image(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<StoredImageResponse>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;

    let (original_name, bytes) = read_image_field(multipart).await?;

    if let Some(old) = &category.image {
        state.images.delete(old).await?;
    }
    let stored = state.images.save(&original_name, &bytes).await?;

    let changes = UpdateCategory {
        name: None,
        image: Some(stored.clone()),
    };
    CategoryRepo::update(&state.pool, id, &changes).await?;

    Ok(Json(StoredImageResponse::new(stored)))
}
