//! Order status workflow: transition date-stamping and update validation.
//!
//! An order moves PENDING -> IN_PROGRESS -> COMPLETED -> PAID, one step per
//! update. Reaching a stage for the first time stamps the matching date
//! column; reaching COMPLETED also flips `is_done` on the linked project.
//! The functions here are pure so the rules can be tested without a
//! database; the API layer applies the returned stamps.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Lifecycle states of an order, stored as TEXT in `orders.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    InProgress,
    Completed,
    Paid,
}

impl OrderStatus {
    /// The exact string persisted in the `orders.status` column.
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::InProgress => "IN_PROGRESS",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Paid => "PAID",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Workflow date columns of the stored order row, as loaded before an update.
#[derive(Debug, Clone, Copy, Default)]
pub struct StoredDates {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub payment_date: Option<NaiveDate>,
}

/// Side effects of a status change, computed by [`plan_status_change`].
///
/// `None` fields are left untouched by the subsequent sparse update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusStamps {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub payment_date: Option<NaiveDate>,
    /// Propagate `is_done = true` to the linked project.
    pub mark_project_done: bool,
}

/// Compute the date stamps triggered by setting `new_status`.
///
/// Each stage is stamped at most once: a date column that already holds a
/// value is never overwritten, and the project `is_done` propagation only
/// fires together with the first `end_date` stamp.
pub fn plan_status_change(
    new_status: OrderStatus,
    stored: StoredDates,
    today: NaiveDate,
) -> StatusStamps {
    let mut stamps = StatusStamps::default();
    match new_status {
        OrderStatus::InProgress if stored.start_date.is_none() => {
            stamps.start_date = Some(today);
        }
        OrderStatus::Completed if stored.end_date.is_none() => {
            stamps.end_date = Some(today);
            stamps.mark_project_done = true;
        }
        OrderStatus::Paid if stored.payment_date.is_none() => {
            stamps.payment_date = Some(today);
        }
        _ => {}
    }
    stamps
}

/// The workflow-relevant fields of a sparse order update payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderChanges {
    pub start_price: Option<f64>,
    pub final_price: Option<f64>,
    pub payment_date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Validate an order update payload against the workflow rules.
///
/// Rejected (before anything is persisted):
/// - `final_price` supplied and either it or a supplied `start_price` is
///   negative
/// - any supplied workflow date lying in the future
/// - `start_date` and `end_date` supplied together in the wrong order
pub fn validate_changes(changes: &OrderChanges, today: NaiveDate) -> Result<(), CoreError> {
    if let Some(final_price) = changes.final_price {
        if final_price < 0.0 || changes.start_price.is_some_and(|p| p < 0.0) {
            return Err(CoreError::Validation(
                "prices must not be negative".into(),
            ));
        }
    }

    for date in [changes.start_date, changes.end_date, changes.payment_date]
        .into_iter()
        .flatten()
    {
        if date > today {
            return Err(CoreError::Validation(format!(
                "date {date} lies in the future"
            )));
        }
    }

    if let (Some(start), Some(end)) = (changes.start_date, changes.end_date) {
        if start > end {
            return Err(CoreError::Validation(
                "start_date must not be after end_date".into(),
            ));
        }
    }

    Ok(())
}
