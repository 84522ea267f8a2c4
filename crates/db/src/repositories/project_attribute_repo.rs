//! Repository for the `project_attributes` table.
//!
//! The table is keyed by the composite (id_project, id_attribute) pair, so
//! mutations address rows by filter rather than by a surrogate id.

use sqlx::PgPool;
use stroyka_core::types::DbId;

use crate::models::project_attribute::{ProjectAttribute, ProjectAttributeDetail};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id_project, id_attribute, value, id_unit";

/// Provides composite-key operations for project attribute assignments.
pub struct ProjectAttributeRepo;

impl ProjectAttributeRepo {
    /// List the raw assignment rows of a project.
    pub async fn list_by_project(
        pool: &PgPool,
        id_project: DbId,
    ) -> Result<Vec<ProjectAttribute>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_attributes \
             WHERE id_project = $1 ORDER BY id_attribute"
        );
        sqlx::query_as::<_, ProjectAttribute>(&query)
            .bind(id_project)
            .fetch_all(pool)
            .await
    }

    /// List a project's assignments resolved to attribute names and unit
    /// display fields, as embedded in project responses.
    pub async fn list_detailed_by_project(
        pool: &PgPool,
        id_project: DbId,
    ) -> Result<Vec<ProjectAttributeDetail>, sqlx::Error> {
        sqlx::query_as::<_, ProjectAttributeDetail>(
            "SELECT pa.id_attribute, a.name AS attribute_name, pa.value, \
                    pa.id_unit, u.name AS unit_name, u.full_name AS unit_full_name \
             FROM project_attributes pa \
             JOIN attributes a ON a.id = pa.id_attribute \
             LEFT JOIN units u ON u.id = pa.id_unit \
             WHERE pa.id_project = $1 \
             ORDER BY pa.id_attribute",
        )
        .bind(id_project)
        .fetch_all(pool)
        .await
    }

    /// Find one assignment by its composite key.
    pub async fn find_by_key(
        pool: &PgPool,
        id_project: DbId,
        id_attribute: DbId,
    ) -> Result<Option<ProjectAttribute>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_attributes \
             WHERE id_project = $1 AND id_attribute = $2"
        );
        sqlx::query_as::<_, ProjectAttribute>(&query)
            .bind(id_project)
            .bind(id_attribute)
            .fetch_optional(pool)
            .await
    }

    /// Count the assignment rows of a project.
    pub async fn count_by_project(pool: &PgPool, id_project: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*)::BIGINT FROM project_attributes WHERE id_project = $1",
        )
        .bind(id_project)
        .fetch_one(pool)
        .await
    }

    /// Delete every assignment of a project. Returns the removed row count.
    pub async fn delete_by_project(pool: &PgPool, id_project: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM project_attributes WHERE id_project = $1")
            .bind(id_project)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
