//! City entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stroyka_core::types::{DbId, Timestamp};

/// A city row from the `cities` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct City {
    pub id: DbId,
    pub name: String,
    pub image: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new city.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCity {
    pub name: String,
    pub image: Option<String>,
}

/// DTO for updating an existing city. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCity {
    pub name: Option<String>,
    pub image: Option<String>,
}

/// Exact-match list filter for cities.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CityFilter {
    pub name: Option<String>,
}
