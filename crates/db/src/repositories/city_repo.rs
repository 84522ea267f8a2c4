//! Repository for the `cities` table.

use sqlx::PgPool;
use stroyka_core::types::DbId;

use crate::models::city::{City, CityFilter, CreateCity, UpdateCity};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, image, created_at, updated_at";

/// Provides CRUD operations for cities.
pub struct CityRepo;

impl CityRepo {
    /// Insert a new city, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCity) -> Result<City, sqlx::Error> {
        let query = format!("INSERT INTO cities (name, image) VALUES ($1, $2) RETURNING {COLUMNS}");
        sqlx::query_as::<_, City>(&query)
            .bind(&input.name)
            .bind(&input.image)
            .fetch_one(pool)
            .await
    }

    /// Find a city by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<City>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cities WHERE id = $1");
        sqlx::query_as::<_, City>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List cities matching every supplied filter criterion.
    pub async fn list(pool: &PgPool, filter: &CityFilter) -> Result<Vec<City>, sqlx::Error> {
        match &filter.name {
            Some(name) => {
                let query = format!("SELECT {COLUMNS} FROM cities WHERE name = $1 ORDER BY id");
                sqlx::query_as::<_, City>(&query)
                    .bind(name)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM cities ORDER BY id");
                sqlx::query_as::<_, City>(&query).fetch_all(pool).await
            }
        }
    }

    /// Update a city. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCity,
    ) -> Result<Option<City>, sqlx::Error> {
        let query = format!(
            "UPDATE cities SET
                name = COALESCE($2, name),
                image = COALESCE($3, image),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, City>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.image)
            .fetch_optional(pool)
            .await
    }

    /// Delete a city by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cities WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
