//! Project gallery image model.

use serde::Serialize;
use sqlx::FromRow;
use stroyka_core::types::{DbId, Timestamp};

/// A row from the `project_images` table. `image` is the stored filename.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectImage {
    pub id: DbId,
    pub id_project: DbId,
    pub image: String,
    pub created_at: Timestamp,
}
