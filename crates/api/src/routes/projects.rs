//! Route definitions for the `/projects` resource and its image
//! subresource.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete
/// PATCH  /{id}/main-image   -> update_main_image (multipart upload)
/// POST   /{id}/images       -> add_images (multipart upload)
/// DELETE /{id}/images       -> delete_images
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(projects::list).post(projects::create))
        .route(
            "/{id}",
            get(projects::get_by_id)
                .put(projects::update)
                .delete(projects::delete),
        )
        .route("/{id}/main-image", patch(projects::update_main_image))
        .route(
            "/{id}/images",
            post(projects::add_images).delete(projects::delete_images),
        )
}
