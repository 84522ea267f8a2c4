//! Route definitions for the `/cities` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::cities;
use crate::state::AppState;

/// Routes mounted at `/cities`.
///
/// ```text
/// GET    /            -> list
/// POST   /            -> create
/// GET    /{id}        -> get_by_id
/// PUT    /{id}        -> update
/// DELETE /{id}        -> delete
/// PATCH  /{id}/image  -> update_image (multipart upload)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cities::list).post(cities::create))
        .route(
            "/{id}",
            get(cities::get_by_id)
                .put(cities::update)
                .delete(cities::delete),
        )
        .route("/{id}/image", patch(cities::update_image))
}
