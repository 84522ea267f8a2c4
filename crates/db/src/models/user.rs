//! User entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use stroyka_core::types::{DbId, Timestamp};

/// A user row from the `users` table. Not serializable: the password hash
/// must never leave the persistence layer; respond with [`UserPublic`].
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub org_name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The public projection of a user embedded in API responses.
#[derive(Debug, Clone, Serialize)]
pub struct UserPublic {
    pub id: DbId,
    pub name: String,
    pub org_name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
}

impl From<&User> for UserPublic {
    fn from(user: &User) -> Self {
        UserPublic {
            id: user.id,
            name: user.name.clone(),
            org_name: user.org_name.clone(),
            role: user.role.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
        }
    }
}

/// Write model for inserting a user. The password arrives already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub org_name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
}

/// Sparse write model for user updates. A password change arrives here as
/// a fresh hash.
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub org_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password_hash: Option<String>,
}
