//! Repository for the `projects` table, including attribute reconciliation.
//!
//! Create and update fold the supplied attribute assignments into the same
//! transaction as the project row, so a failed assignment write never
//! leaves a half-written aggregate.

use sqlx::{PgConnection, PgPool};
use stroyka_core::types::DbId;

use crate::models::project::{
    AttributeAssignment, CreateProject, Project, ProjectFilter, UpdateProject,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, slug, main_image, description, is_done, id_category, id_city, created_at, updated_at";

/// Provides CRUD operations for projects and their attribute assignments.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project and its attribute assignments in one
    /// transaction, returning the created project row.
    ///
    /// Duplicate attribute ids within the payload collapse to the last
    /// occurrence before anything is written.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO projects \
                (name, slug, main_image, description, is_done, id_category, id_city) \
             VALUES ($1, $2, $3, $4, COALESCE($5, false), $6, $7) \
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.main_image)
            .bind(&input.description)
            .bind(input.is_done)
            .bind(input.id_category)
            .bind(input.id_city)
            .fetch_one(&mut *tx)
            .await?;

        for assignment in dedup_last_wins(&input.attributes) {
            insert_assignment(&mut tx, project.id, assignment).await?;
        }

        tx.commit().await?;
        Ok(project)
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List projects matching every supplied filter criterion.
    ///
    /// When both `id_attribute` and `attribute_value` are set, the result
    /// is restricted to projects carrying that exact attribute-value pair
    /// (semi-join against `project_attributes`).
    pub async fn list(pool: &PgPool, filter: &ProjectFilter) -> Result<Vec<Project>, sqlx::Error> {
        let (where_clause, bind_values) = build_project_filter(filter);

        let query = format!(
            "SELECT {COLUMNS} FROM projects {where_clause} ORDER BY created_at DESC"
        );

        let mut q = sqlx::query_as::<_, Project>(&query);
        for value in &bind_values {
            q = match value {
                BindValue::BigInt(v) => q.bind(*v),
                BindValue::Text(v) => q.bind(v),
                BindValue::Bool(v) => q.bind(*v),
            };
        }
        q.fetch_all(pool).await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// A supplied attribute list is upsert-merged against the existing
    /// assignments inside the same transaction: matches (by attribute id)
    /// are rewritten in place, novel ids are inserted, unmentioned rows
    /// are left untouched. Returns `None` if no row with `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE projects SET
                name = COALESCE($2, name),
                slug = COALESCE($3, slug),
                main_image = COALESCE($4, main_image),
                description = COALESCE($5, description),
                is_done = COALESCE($6, is_done),
                id_category = COALESCE($7, id_category),
                id_city = COALESCE($8, id_city),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let Some(project) = sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.main_image)
            .bind(&input.description)
            .bind(input.is_done)
            .bind(input.id_category)
            .bind(input.id_city)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        if let Some(attributes) = &input.attributes {
            let existing: Vec<DbId> = sqlx::query_scalar(
                "SELECT id_attribute FROM project_attributes WHERE id_project = $1",
            )
            .bind(id)
            .fetch_all(&mut *tx)
            .await?;

            for assignment in dedup_last_wins(attributes) {
                if existing.contains(&assignment.id_attribute) {
                    update_assignment(&mut tx, id, assignment).await?;
                } else {
                    insert_assignment(&mut tx, id, assignment).await?;
                }
            }
        }

        tx.commit().await?;
        Ok(Some(project))
    }

    /// Set `is_done = true`. Used when a linked order completes.
    pub async fn mark_done(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE projects SET is_done = TRUE, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a project and its dependent rows in one transaction.
    ///
    /// Attribute assignments and gallery image rows go first since the
    /// schema declares no ON DELETE CASCADE for them. Returns `true` if
    /// the project row existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM project_attributes WHERE id_project = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM project_images WHERE id_project = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Insert one attribute assignment row for `id_project`.
async fn insert_assignment(
    conn: &mut PgConnection,
    id_project: DbId,
    assignment: &AttributeAssignment,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO project_attributes (id_project, id_attribute, value, id_unit) \
         VALUES ($1, $2, $3, $4)",
    )
    .bind(id_project)
    .bind(assignment.id_attribute)
    .bind(&assignment.value)
    .bind(assignment.id_unit)
    .execute(conn)
    .await?;
    Ok(())
}

/// Rewrite the value/unit of an existing assignment, matched by the
/// composite (project, attribute) key. A `None` unit clears the column.
async fn update_assignment(
    conn: &mut PgConnection,
    id_project: DbId,
    assignment: &AttributeAssignment,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE project_attributes SET value = $3, id_unit = $4 \
         WHERE id_project = $1 AND id_attribute = $2",
    )
    .bind(id_project)
    .bind(assignment.id_attribute)
    .bind(&assignment.value)
    .bind(assignment.id_unit)
    .execute(conn)
    .await?;
    Ok(())
}

/// Collapse duplicate attribute ids in a payload, keeping the last
/// occurrence of each (first-occurrence order preserved).
fn dedup_last_wins(assignments: &[AttributeAssignment]) -> Vec<&AttributeAssignment> {
    let mut out: Vec<&AttributeAssignment> = Vec::with_capacity(assignments.len());
    for assignment in assignments {
        match out.iter().position(|a| a.id_attribute == assignment.id_attribute) {
            Some(i) => out[i] = assignment,
            None => out.push(assignment),
        }
    }
    out
}

/// Typed bind value for dynamically built project queries.
enum BindValue {
    BigInt(DbId),
    Text(String),
    Bool(bool),
}

/// Build the WHERE clause and bind list for [`ProjectRepo::list`].
fn build_project_filter(filter: &ProjectFilter) -> (String, Vec<BindValue>) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_idx = 1u32;
    let mut bind_values: Vec<BindValue> = Vec::new();

    if let Some(ref name) = filter.name {
        conditions.push(format!("name = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Text(name.clone()));
    }

    if let Some(ref slug) = filter.slug {
        conditions.push(format!("slug = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Text(slug.clone()));
    }

    if let Some(is_done) = filter.is_done {
        conditions.push(format!("is_done = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Bool(is_done));
    }

    if let Some(id_category) = filter.id_category {
        conditions.push(format!("id_category = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::BigInt(id_category));
    }

    if let Some(id_city) = filter.id_city {
        conditions.push(format!("id_city = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::BigInt(id_city));
    }

    // The attribute filter only applies when both halves are supplied.
    if let (Some(id_attribute), Some(value)) = (filter.id_attribute, &filter.attribute_value) {
        conditions.push(format!(
            "EXISTS (SELECT 1 FROM project_attributes pa \
             WHERE pa.id_project = projects.id \
               AND pa.id_attribute = ${bind_idx} \
               AND pa.value = ${})",
            bind_idx + 1
        ));
        bind_values.push(BindValue::BigInt(id_attribute));
        bind_values.push(BindValue::Text(value.clone()));
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    (where_clause, bind_values)
}
