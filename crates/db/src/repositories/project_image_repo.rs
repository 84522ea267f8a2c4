//! Repository for the `project_images` table.

use sqlx::PgPool;
use stroyka_core::types::DbId;

use crate::models::project_image::ProjectImage;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, id_project, image, created_at";

/// Provides CRUD operations for project gallery images.
pub struct ProjectImageRepo;

impl ProjectImageRepo {
    /// Insert a new image row for a project, returning the created row.
    pub async fn create(
        pool: &PgPool,
        id_project: DbId,
        image: &str,
    ) -> Result<ProjectImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_images (id_project, image) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectImage>(&query)
            .bind(id_project)
            .bind(image)
            .fetch_one(pool)
            .await
    }

    /// Find an image row by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ProjectImage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_images WHERE id = $1");
        sqlx::query_as::<_, ProjectImage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's images in insertion order.
    pub async fn list_by_project(
        pool: &PgPool,
        id_project: DbId,
    ) -> Result<Vec<ProjectImage>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM project_images WHERE id_project = $1 ORDER BY id");
        sqlx::query_as::<_, ProjectImage>(&query)
            .bind(id_project)
            .fetch_all(pool)
            .await
    }

    /// Delete an image row by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM project_images WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
