//! Repository for the `orders` table.

use sqlx::PgPool;
use stroyka_core::order::OrderStatus;
use stroyka_core::types::{Date, DbId};

use crate::models::order::{CreateOrder, Order, OrderFilter, OrderUpdateFields};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, id_user, id_project, status, created_date, updated_date, \
    start_price, final_price, payment_date, start_date, end_date, \
    created_at, updated_at";

/// Provides CRUD operations for orders.
pub struct OrderRepo;

impl OrderRepo {
    /// Insert a new PENDING order for `id_user`, stamped with `today`.
    pub async fn create(
        pool: &PgPool,
        id_user: DbId,
        input: &CreateOrder,
        today: Date,
    ) -> Result<Order, sqlx::Error> {
        let query = format!(
            "INSERT INTO orders (id_user, id_project, status, created_date) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(id_user)
            .bind(input.id_project)
            .bind(OrderStatus::Pending.as_str())
            .bind(today)
            .fetch_one(pool)
            .await
    }

    /// Find an order by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Order>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM orders WHERE id = $1");
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List orders matching every supplied filter criterion, most recently
    /// created first.
    pub async fn list(pool: &PgPool, filter: &OrderFilter) -> Result<Vec<Order>, sqlx::Error> {
        let (where_clause, bind_values) = build_order_filter(filter);

        let query =
            format!("SELECT {COLUMNS} FROM orders {where_clause} ORDER BY created_at DESC");

        let mut q = sqlx::query_as::<_, Order>(&query);
        for value in &bind_values {
            q = match value {
                BindValue::BigInt(v) => q.bind(*v),
                BindValue::Text(v) => q.bind(v),
                BindValue::Float(v) => q.bind(*v),
                BindValue::Date(v) => q.bind(*v),
            };
        }
        q.fetch_all(pool).await
    }

    /// Apply a sparse update. Only non-`None` fields overwrite stored
    /// values; `updated_date` is always written.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        fields: &OrderUpdateFields,
    ) -> Result<Option<Order>, sqlx::Error> {
        let query = format!(
            "UPDATE orders SET
                status = COALESCE($2, status),
                start_price = COALESCE($3, start_price),
                final_price = COALESCE($4, final_price),
                payment_date = COALESCE($5, payment_date),
                start_date = COALESCE($6, start_date),
                end_date = COALESCE($7, end_date),
                updated_date = $8,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .bind(&fields.status)
            .bind(fields.start_price)
            .bind(fields.final_price)
            .bind(fields.payment_date)
            .bind(fields.start_date)
            .bind(fields.end_date)
            .bind(fields.updated_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete an order by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Typed bind value for dynamically built order queries.
enum BindValue {
    BigInt(DbId),
    Text(String),
    Float(f64),
    Date(Date),
}

/// Build the WHERE clause and bind list for [`OrderRepo::list`].
fn build_order_filter(filter: &OrderFilter) -> (String, Vec<BindValue>) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_idx = 1u32;
    let mut bind_values: Vec<BindValue> = Vec::new();

    let mut add = |column: &str, value: BindValue| {
        conditions.push(format!("{column} = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(value);
    };

    if let Some(id_user) = filter.id_user {
        add("id_user", BindValue::BigInt(id_user));
    }
    if let Some(id_project) = filter.id_project {
        add("id_project", BindValue::BigInt(id_project));
    }
    if let Some(status) = filter.status {
        add("status", BindValue::Text(status.as_str().to_string()));
    }
    if let Some(created_date) = filter.created_date {
        add("created_date", BindValue::Date(created_date));
    }
    if let Some(updated_date) = filter.updated_date {
        add("updated_date", BindValue::Date(updated_date));
    }
    if let Some(start_price) = filter.start_price {
        add("start_price", BindValue::Float(start_price));
    }
    if let Some(final_price) = filter.final_price {
        add("final_price", BindValue::Float(final_price));
    }
    if let Some(payment_date) = filter.payment_date {
        add("payment_date", BindValue::Date(payment_date));
    }
    if let Some(start_date) = filter.start_date {
        add("start_date", BindValue::Date(start_date));
    }
    if let Some(end_date) = filter.end_date {
        add("end_date", BindValue::Date(end_date));
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    (where_clause, bind_values)
}
