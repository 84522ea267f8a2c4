//! Repository for the `units` table.

use sqlx::PgPool;
use stroyka_core::types::DbId;

use crate::models::unit::{CreateUnit, Unit, UnitFilter, UpdateUnit};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, full_name, created_at, updated_at";

/// Provides CRUD operations for measurement units.
pub struct UnitRepo;

impl UnitRepo {
    /// Insert a new unit, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUnit) -> Result<Unit, sqlx::Error> {
        let query =
            format!("INSERT INTO units (name, full_name) VALUES ($1, $2) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Unit>(&query)
            .bind(&input.name)
            .bind(&input.full_name)
            .fetch_one(pool)
            .await
    }

    /// Find a unit by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Unit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM units WHERE id = $1");
        sqlx::query_as::<_, Unit>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List units matching every supplied filter criterion.
    pub async fn list(pool: &PgPool, filter: &UnitFilter) -> Result<Vec<Unit>, sqlx::Error> {
        let query = match (&filter.name, &filter.full_name) {
            (Some(_), Some(_)) => {
                format!("SELECT {COLUMNS} FROM units WHERE name = $1 AND full_name = $2 ORDER BY id")
            }
            (Some(_), None) => format!("SELECT {COLUMNS} FROM units WHERE name = $1 ORDER BY id"),
            (None, Some(_)) => {
                format!("SELECT {COLUMNS} FROM units WHERE full_name = $1 ORDER BY id")
            }
            (None, None) => format!("SELECT {COLUMNS} FROM units ORDER BY id"),
        };

        let mut q = sqlx::query_as::<_, Unit>(&query);
        if let Some(name) = &filter.name {
            q = q.bind(name);
        }
        if let Some(full_name) = &filter.full_name {
            q = q.bind(full_name);
        }
        q.fetch_all(pool).await
    }

    /// Update a unit. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUnit,
    ) -> Result<Option<Unit>, sqlx::Error> {
        let query = format!(
            "UPDATE units SET
                name = COALESCE($2, name),
                full_name = COALESCE($3, full_name),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Unit>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.full_name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a unit by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM units WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
