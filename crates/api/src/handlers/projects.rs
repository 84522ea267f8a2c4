//! Handlers for the `/projects` resource, including the image subresource.
//!
//! Project reads fan out across four related tables: the category, the
//! city, the image gallery, and the attribute assignments resolved to
//! attribute/unit display fields.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use stroyka_core::error::CoreError;
use stroyka_core::types::DbId;
use stroyka_db::models::category::Category;
use stroyka_db::models::city::City;
use stroyka_db::models::project::{CreateProject, Project, ProjectFilter, UpdateProject};
use stroyka_db::models::project_attribute::ProjectAttributeDetail;
use stroyka_db::models::project_image::ProjectImage;
use stroyka_db::repositories::{
    CategoryRepo, CityRepo, ProjectAttributeRepo, ProjectImageRepo, ProjectRepo,
};

use crate::error::{AppError, AppResult};
use crate::handlers::read_image_field;
use crate::response::{CreatedResponse, StatusResponse, StoredImageResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// A project with its related entities embedded, as returned by reads.
#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    #[serde(flatten)]
    pub project: Project,
    pub category: Category,
    pub city: City,
    pub attributes: Vec<ProjectAttributeDetail>,
    pub images: Vec<ProjectImage>,
}

/// Request body for `DELETE /projects/{id}/images`.
#[derive(Debug, Deserialize)]
pub struct ImagesToDelete {
    pub ids_images: Vec<DbId>,
}

// ---------------------------------------------------------------------------
// Project CRUD
// ---------------------------------------------------------------------------

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let project = ProjectRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse::new(project.id))))
}

/// GET /api/v1/projects
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<ProjectFilter>,
) -> AppResult<Json<Vec<ProjectResponse>>> {
    let projects = ProjectRepo::list(&state.pool, &filter).await?;

    let mut response = Vec::with_capacity(projects.len());
    for project in projects {
        response.push(assemble_response(&state, project).await?);
    }
    Ok(Json(response))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectResponse>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(assemble_response(&state, project).await?))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<StatusResponse>> {
    ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(StatusResponse::success()))
}

/// DELETE /api/v1/projects/{id}
///
/// Removes stored image files first, then the dependent rows and the
/// project row.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<StatusResponse>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    if let Some(main_image) = &project.main_image {
        state.images.delete(main_image).await?;
    }
    for image in ProjectImageRepo::list_by_project(&state.pool, id).await? {
        state.images.delete(&image.image).await?;
    }

    ProjectRepo::delete(&state.pool, id).await?;
    Ok(Json(StatusResponse::success()))
}

/// PATCH /api/v1/projects/{id}/main-image
///
/// Replace the project's main image with an uploaded file.
pub async fn update_main_image(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<StoredImageResponse>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    let (original_name, bytes) = read_image_field(multipart).await?;

    if let Some(old) = &project.main_image {
        state.images.delete(old).await?;
    }
    let stored = state.images.save(&original_name, &bytes).await?;

    let changes = UpdateProject {
        main_image: Some(stored.clone()),
        ..Default::default()
    };
    ProjectRepo::update(&state.pool, id, &changes).await?;

    Ok(Json(StoredImageResponse::new(stored)))
}

// ---------------------------------------------------------------------------
// Image subresource
// ---------------------------------------------------------------------------

/// POST /api/v1/projects/{id}/images
///
/// Upload one or more gallery images for a project.
pub async fn add_images(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<StatusResponse>)> {
    ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        let Some(name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {e}")))?;

        let stored = state.images.save(&name, &bytes).await?;
        ProjectImageRepo::create(&state.pool, id, &stored).await?;
    }

    Ok((StatusCode::CREATED, Json(StatusResponse::success())))
}

/// DELETE /api/v1/projects/{id}/images
///
/// Remove the listed gallery images. Ids that do not exist or belong to a
/// different project are skipped.
pub async fn delete_images(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ImagesToDelete>,
) -> AppResult<Json<StatusResponse>> {
    ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    for id_image in input.ids_images {
        let Some(image) = ProjectImageRepo::find_by_id(&state.pool, id_image).await? else {
            continue;
        };
        if image.id_project != id {
            continue;
        }
        ProjectImageRepo::delete(&state.pool, id_image).await?;
        state.images.delete(&image.image).await?;
    }

    Ok(Json(StatusResponse::success()))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Assemble the aggregated read model for one project.
///
/// A dangling category or city reference is a data-integrity fault and is
/// surfaced as an internal error rather than silently dropped.
async fn assemble_response(state: &AppState, project: Project) -> AppResult<ProjectResponse> {
    let category = CategoryRepo::find_by_id(&state.pool, project.id_category)
        .await?
        .ok_or_else(|| {
            AppError::InternalError(format!(
                "project {} references missing category {}",
                project.id, project.id_category
            ))
        })?;

    let city = CityRepo::find_by_id(&state.pool, project.id_city)
        .await?
        .ok_or_else(|| {
            AppError::InternalError(format!(
                "project {} references missing city {}",
                project.id, project.id_city
            ))
        })?;

    let images = ProjectImageRepo::list_by_project(&state.pool, project.id).await?;
    let attributes = ProjectAttributeRepo::list_detailed_by_project(&state.pool, project.id).await?;

    Ok(ProjectResponse {
        project,
        category,
        city,
        attributes,
        images,
    })
}
