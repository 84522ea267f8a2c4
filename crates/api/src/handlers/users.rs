//! Handlers for the `/users` resource.
//!
//! Mutations are allowed for the user themselves or an admin; listing all
//! users is admin-only.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use stroyka_core::credentials;
use stroyka_core::error::CoreError;
use stroyka_core::types::DbId;
use stroyka_db::models::user::{UpdateUser, UserPublic};
use stroyka_db::repositories::UserRepo;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::StatusResponse;
use crate::state::AppState;

/// Request body for `PUT /users/{id}`. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UserUpdateRequest {
    pub name: Option<String>,
    pub org_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
}

/// GET /api/v1/users/me
pub async fn me(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<UserPublic>> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth_user.user_id,
        }))?;
    Ok(Json(UserPublic::from(&user)))
}

/// GET /api/v1/users (admin only)
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<UserPublic>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users.iter().map(UserPublic::from).collect()))
}

/// PUT /api/v1/users/{id} (self or admin)
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    auth_user: AuthUser,
    Json(input): Json<UserUpdateRequest>,
) -> AppResult<Json<StatusResponse>> {
    ensure_self_or_admin(&auth_user, id)?;

    if let Some(email) = &input.email {
        credentials::validate_email(email)?;
    }

    let password_hash = match &input.password {
        Some(password) => {
            credentials::validate_password(password)?;
            Some(
                hash_password(password)
                    .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?,
            )
        }
        None => None,
    };

    let changes = UpdateUser {
        name: input.name,
        org_name: input.org_name,
        email: input.email,
        phone: input.phone,
        password_hash,
    };
    UserRepo::update(&state.pool, id, &changes)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id,
        }))?;

    Ok(Json(StatusResponse::success()))
}

/// DELETE /api/v1/users/{id} (self or admin)
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    auth_user: AuthUser,
) -> AppResult<Json<StatusResponse>> {
    ensure_self_or_admin(&auth_user, id)?;

    let deleted = UserRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "User", id }));
    }
    Ok(Json(StatusResponse::success()))
}

/// Reject callers touching another user's account without the admin role.
fn ensure_self_or_admin(auth_user: &AuthUser, target: DbId) -> Result<(), AppError> {
    if target != auth_user.user_id && !auth_user.is_admin() {
        return Err(AppError::Core(CoreError::Forbidden(
            "You may only manage your own account".into(),
        )));
    }
    Ok(())
}
