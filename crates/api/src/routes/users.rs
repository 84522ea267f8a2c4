//! Route definitions for the `/users` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /me    -> me
/// GET    /      -> list (admin only)
/// PUT    /{id}  -> update (self or admin)
/// DELETE /{id}  -> delete (self or admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/me", get(users::me))
        .route("/", get(users::list))
        .route("/{id}", axum::routing::put(users::update).delete(users::delete))
}
