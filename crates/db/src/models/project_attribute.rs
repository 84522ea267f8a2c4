//! Project attribute assignment model.
//!
//! The table has no surrogate id; rows are addressed by the composite
//! (id_project, id_attribute) key.

use serde::Serialize;
use sqlx::FromRow;
use stroyka_core::types::DbId;

/// A row from the `project_attributes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectAttribute {
    pub id_project: DbId,
    pub id_attribute: DbId,
    pub value: String,
    pub id_unit: Option<DbId>,
}

/// An assignment joined with its attribute name and unit display fields,
/// as embedded in project responses.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectAttributeDetail {
    pub id_attribute: DbId,
    pub attribute_name: String,
    pub value: String,
    pub id_unit: Option<DbId>,
    pub unit_name: Option<String>,
    pub unit_full_name: Option<String>,
}
