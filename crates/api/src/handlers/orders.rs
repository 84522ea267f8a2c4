//! Handlers for the `/orders` resource.
//!
//! The status workflow itself lives in `stroyka_core::order`; this module
//! loads the stored row, applies the computed stamps, and enforces the
//! ownership rule: non-admin callers only ever see or touch their own
//! orders.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use stroyka_core::error::CoreError;
use stroyka_core::order::{plan_status_change, validate_changes, OrderChanges, StoredDates};
use stroyka_core::types::DbId;
use stroyka_db::models::order::{CreateOrder, Order, OrderFilter, OrderUpdateFields, UpdateOrder};
use stroyka_db::models::project::Project;
use stroyka_db::models::user::UserPublic;
use stroyka_db::repositories::{OrderRepo, ProjectRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::{CreatedResponse, StatusResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Shortened project projection embedded in order responses.
#[derive(Debug, Serialize)]
pub struct ShortProject {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub main_image: Option<String>,
    pub description: String,
    pub is_done: bool,
}

impl From<&Project> for ShortProject {
    fn from(project: &Project) -> Self {
        ShortProject {
            id: project.id,
            name: project.name.clone(),
            slug: project.slug.clone(),
            main_image: project.main_image.clone(),
            description: project.description.clone(),
            is_done: project.is_done,
        }
    }
}

/// An order with its user and project references embedded.
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    #[serde(flatten)]
    pub order: Order,
    pub user: UserPublic,
    pub project: ShortProject,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/orders
///
/// Place an order on a project. The caller becomes the owner; the order
/// starts PENDING with `created_date` stamped to today.
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateOrder>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    ProjectRepo::find_by_id(&state.pool, input.id_project)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: input.id_project,
        }))?;

    let today = Utc::now().date_naive();
    let order = OrderRepo::create(&state.pool, auth_user.user_id, &input, today).await?;

    Ok((StatusCode::CREATED, Json(CreatedResponse::new(order.id))))
}

/// GET /api/v1/orders
///
/// List orders. A non-admin caller's filter is forced to `id_user =
/// caller`, whatever they supplied.
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(mut filter): Query<OrderFilter>,
) -> AppResult<Json<Vec<OrderResponse>>> {
    if !auth_user.is_admin() {
        filter.id_user = Some(auth_user.user_id);
    }

    let orders = OrderRepo::list(&state.pool, &filter).await?;

    let mut response = Vec::with_capacity(orders.len());
    for order in orders {
        response.push(assemble_response(&state, order).await?);
    }
    Ok(Json(response))
}

/// GET /api/v1/orders/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<OrderResponse>> {
    let order = load_owned(&state, &auth_user, id).await?;
    Ok(Json(assemble_response(&state, order).await?))
}

/// PUT /api/v1/orders/{id}
///
/// Sparse update. A `status` change triggers the workflow date stamps and,
/// on first completion, marks the linked project done.
pub async fn update(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateOrder>,
) -> AppResult<Json<StatusResponse>> {
    let order = load_owned(&state, &auth_user, id).await?;
    let today = Utc::now().date_naive();

    let changes = OrderChanges {
        start_price: input.start_price,
        final_price: input.final_price,
        payment_date: input.payment_date,
        start_date: input.start_date,
        end_date: input.end_date,
    };
    validate_changes(&changes, today)?;

    let stamps = match input.status {
        Some(status) => plan_status_change(
            status,
            StoredDates {
                start_date: order.start_date,
                end_date: order.end_date,
                payment_date: order.payment_date,
            },
            today,
        ),
        None => Default::default(),
    };

    let fields = OrderUpdateFields {
        status: input.status.map(|s| s.as_str().to_string()),
        start_price: input.start_price,
        final_price: input.final_price,
        // A workflow stamp wins over a caller-supplied date for the same field.
        payment_date: stamps.payment_date.or(input.payment_date),
        start_date: stamps.start_date.or(input.start_date),
        end_date: stamps.end_date.or(input.end_date),
        updated_date: today,
    };

    OrderRepo::update(&state.pool, id, &fields)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Order",
            id,
        }))?;

    if stamps.mark_project_done {
        ProjectRepo::mark_done(&state.pool, order.id_project).await?;
    }

    Ok(Json(StatusResponse::success()))
}

/// DELETE /api/v1/orders/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<StatusResponse>> {
    load_owned(&state, &auth_user, id).await?;
    OrderRepo::delete(&state.pool, id).await?;
    Ok(Json(StatusResponse::success()))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load an order, enforcing that non-admin callers own it.
async fn load_owned(state: &AppState, auth_user: &AuthUser, id: DbId) -> AppResult<Order> {
    let order = OrderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Order",
            id,
        }))?;

    if !auth_user.is_admin() && order.id_user != auth_user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You may only access your own orders".into(),
        )));
    }
    Ok(order)
}

/// Embed the referenced user and project into an order response.
///
/// A dangling reference is a data-integrity fault and is surfaced as an
/// internal error rather than silently dropped.
async fn assemble_response(state: &AppState, order: Order) -> AppResult<OrderResponse> {
    let user = UserRepo::find_by_id(&state.pool, order.id_user)
        .await?
        .ok_or_else(|| {
            AppError::InternalError(format!(
                "order {} references missing user {}",
                order.id, order.id_user
            ))
        })?;

    let project = ProjectRepo::find_by_id(&state.pool, order.id_project)
        .await?
        .ok_or_else(|| {
            AppError::InternalError(format!(
                "order {} references missing project {}",
                order.id, order.id_project
            ))
        })?;

    Ok(OrderResponse {
        user: UserPublic::from(&user),
        project: ShortProject::from(&project),
        order,
    })
}
