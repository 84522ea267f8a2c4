//! Order entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stroyka_core::order::OrderStatus;
use stroyka_core::types::{Date, DbId, Timestamp};

/// An order row from the `orders` table.
///
/// `status` holds one of the [`OrderStatus`] strings; the column is
/// CHECK-constrained to that set.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Order {
    pub id: DbId,
    pub id_user: DbId,
    pub id_project: DbId,
    pub status: String,
    pub created_date: Date,
    pub updated_date: Option<Date>,
    pub start_price: Option<f64>,
    pub final_price: Option<f64>,
    pub payment_date: Option<Date>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new order. The server supplies the owner, the
/// PENDING status, and the creation date.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrder {
    pub id_project: DbId,
}

/// DTO for updating an existing order. All fields are optional; only
/// supplied fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateOrder {
    pub status: Option<OrderStatus>,
    pub start_price: Option<f64>,
    pub final_price: Option<f64>,
    pub payment_date: Option<Date>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}

/// The full sparse field set written by an order update, after the
/// workflow has folded its date stamps into the caller's changes.
/// `updated_date` is stamped on every update.
#[derive(Debug, Clone, Default)]
pub struct OrderUpdateFields {
    pub status: Option<String>,
    pub start_price: Option<f64>,
    pub final_price: Option<f64>,
    pub payment_date: Option<Date>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub updated_date: Date,
}

/// List filter for orders. Non-admin callers have `id_user` forced to
/// their own id regardless of what they supplied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderFilter {
    pub id_user: Option<DbId>,
    pub id_project: Option<DbId>,
    pub status: Option<OrderStatus>,
    pub created_date: Option<Date>,
    pub updated_date: Option<Date>,
    pub start_price: Option<f64>,
    pub final_price: Option<f64>,
    pub payment_date: Option<Date>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}
