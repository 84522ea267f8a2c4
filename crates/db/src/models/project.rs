//! Project entity model and DTOs.
//!
//! A project aggregates its attribute assignments and gallery images;
//! create/update DTOs carry the attribute list that the repository
//! reconciles against the `project_attributes` table.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stroyka_core::types::{DbId, Timestamp};

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub main_image: Option<String>,
    pub description: String,
    pub is_done: bool,
    pub id_category: DbId,
    pub id_city: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One attribute-value assignment supplied with a project payload.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AttributeAssignment {
    pub id_attribute: DbId,
    pub value: String,
    pub id_unit: Option<DbId>,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: String,
    pub slug: String,
    pub main_image: Option<String>,
    pub description: String,
    pub is_done: Option<bool>,
    pub id_category: DbId,
    pub id_city: DbId,
    #[serde(default)]
    pub attributes: Vec<AttributeAssignment>,
}

/// DTO for updating an existing project. All fields are optional.
///
/// A supplied `attributes` list is upsert-merged against existing rows;
/// `None` leaves the stored assignments untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub main_image: Option<String>,
    pub description: Option<String>,
    pub is_done: Option<bool>,
    pub id_category: Option<DbId>,
    pub id_city: Option<DbId>,
    pub attributes: Option<Vec<AttributeAssignment>>,
}

/// List filter for projects.
///
/// Scalar fields are exact-match ANDed. `id_attribute` + `attribute_value`
/// together restrict the result to projects carrying that exact
/// attribute-value pair; either one alone is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectFilter {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub is_done: Option<bool>,
    pub id_category: Option<DbId>,
    pub id_city: Option<DbId>,
    pub id_attribute: Option<DbId>,
    pub attribute_value: Option<String>,
}
