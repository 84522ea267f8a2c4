//! Attribute entity model and DTOs (named project characteristics).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stroyka_core::types::{DbId, Timestamp};

/// An attribute row from the `attributes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Attribute {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new attribute.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAttribute {
    pub name: String,
}

/// DTO for updating an existing attribute.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAttribute {
    pub name: Option<String>,
}

/// Exact-match list filter for attributes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AttributeFilter {
    pub name: Option<String>,
}
