//! Measurement unit entity model and DTOs (e.g. "m2" / "square meters").

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stroyka_core::types::{DbId, Timestamp};

/// A unit row from the `units` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Unit {
    pub id: DbId,
    pub name: String,
    pub full_name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new unit.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUnit {
    pub name: String,
    pub full_name: Option<String>,
}

/// DTO for updating an existing unit. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUnit {
    pub name: Option<String>,
    pub full_name: Option<String>,
}

/// Exact-match list filter for units.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UnitFilter {
    pub name: Option<String>,
    pub full_name: Option<String>,
}
