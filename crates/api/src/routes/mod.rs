//! Route definitions, one module per resource.

pub mod attributes;
pub mod auth;
pub mod categories;
pub mod cities;
pub mod health;
pub mod orders;
pub mod projects;
pub mod units;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/register                   register (public)
/// /auth/login                      login (public)
/// /auth/refresh                    refresh (public)
/// /auth/logout                     logout (requires auth)
///
/// /users/me                        current user profile
/// /users                           list all users (admin only)
/// /users/{id}                      update, delete (self or admin)
///
/// /cities, /categories, /units, /attributes
///                                  catalog CRUD (+ image PATCH where
///                                  the entity carries an image)
///
/// /projects                        list, create
/// /projects/{id}                   get, update, delete
/// /projects/{id}/main-image        replace main image (PATCH)
/// /projects/{id}/images            add (POST), remove (DELETE)
///
/// /orders                          list, create (requires auth)
/// /orders/{id}                     get, update, delete (owner or admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        .nest("/attributes", attributes::router())
        .nest("/categories", categories::router())
        .nest("/cities", cities::router())
        .nest("/units", units::router())
        .nest("/projects", projects::router())
        .nest("/orders", orders::router())
}
