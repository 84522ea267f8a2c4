//! Repository for the `attributes` table.

use sqlx::PgPool;
use stroyka_core::types::DbId;

use crate::models::attribute::{Attribute, AttributeFilter, CreateAttribute, UpdateAttribute};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for attributes.
pub struct AttributeRepo;

impl AttributeRepo {
    /// Insert a new attribute, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAttribute) -> Result<Attribute, sqlx::Error> {
        let query = format!("INSERT INTO attributes (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Attribute>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find an attribute by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Attribute>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM attributes WHERE id = $1");
        sqlx::query_as::<_, Attribute>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List attributes matching every supplied filter criterion.
    pub async fn list(
        pool: &PgPool,
        filter: &AttributeFilter,
    ) -> Result<Vec<Attribute>, sqlx::Error> {
        match &filter.name {
            Some(name) => {
                let query =
                    format!("SELECT {COLUMNS} FROM attributes WHERE name = $1 ORDER BY id");
                sqlx::query_as::<_, Attribute>(&query)
                    .bind(name)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM attributes ORDER BY id");
                sqlx::query_as::<_, Attribute>(&query).fetch_all(pool).await
            }
        }
    }

    /// Update an attribute. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAttribute,
    ) -> Result<Option<Attribute>, sqlx::Error> {
        let query = format!(
            "UPDATE attributes SET
                name = COALESCE($2, name),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Attribute>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete an attribute by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM attributes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
