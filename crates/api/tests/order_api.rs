//! HTTP-level integration tests for the order workflow: status-transition
//! date stamping, update validation, and the ownership rules.

mod common;

use axum::http::StatusCode;
use chrono::Utc;
use common::{
    body_json, get_auth, post_json_auth, put_json_auth, seed_category, seed_city, seed_project,
    seed_user,
};
use serde_json::json;
use sqlx::PgPool;
use stroyka_core::types::DbId;
use stroyka_db::models::order::OrderUpdateFields;
use stroyka_db::repositories::OrderRepo;

/// Seed a user + project, log the user in, and create one order.
/// Returns (token, order id, project id).
async fn setup_order(pool: &PgPool, email: &str) -> (String, DbId, DbId) {
    seed_user(pool, email, "USER").await;
    let id_city = seed_city(pool, "Orel").await;
    let id_category = seed_category(pool, "Houses").await;
    let id_project = seed_project(pool, "Ordered", id_category, id_city).await;

    let token = common::login_token(common::build_test_app(pool.clone()), email).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/orders",
        json!({"id_project": id_project}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["id"].as_i64().unwrap();

    (token, id, id_project)
}

async fn fetch_order(pool: &PgPool, token: &str, id: DbId) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, &format!("/api/v1/orders/{id}"), token).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_create_order_starts_pending(pool: PgPool) {
    let (token, id, _) = setup_order(&pool, "buyer@example.com").await;

    let order = fetch_order(&pool, &token, id).await;
    assert_eq!(order["status"], "PENDING");
    assert_eq!(
        order["created_date"],
        Utc::now().date_naive().to_string().as_str()
    );
    assert!(order["start_date"].is_null());
    // The referenced user and project are embedded.
    assert_eq!(order["user"]["email"], "buyer@example.com");
    assert_eq!(order["project"]["name"], "Ordered");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_create_order_for_missing_project_404(pool: PgPool) {
    seed_user(&pool, "lost@example.com", "USER").await;
    let token = common::login_token(common::build_test_app(pool.clone()), "lost@example.com").await;

    let app = common::build_test_app(pool);
    let response =
        post_json_auth(app, "/api/v1/orders", json!({"id_project": 424242}), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_orders_require_authentication(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/orders").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Status transitions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_in_progress_stamps_start_date(pool: PgPool) {
    let (token, id, _) = setup_order(&pool, "starter@example.com").await;

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/orders/{id}"),
        json!({"status": "IN_PROGRESS"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let today = Utc::now().date_naive().to_string();
    let order = fetch_order(&pool, &token, id).await;
    assert_eq!(order["status"], "IN_PROGRESS");
    assert_eq!(order["start_date"], today.as_str());
    assert_eq!(order["updated_date"], today.as_str());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_in_progress_does_not_restamp_start_date(pool: PgPool) {
    let (token, id, _) = setup_order(&pool, "restamp@example.com").await;

    // Backdate the stored start_date, then transition again.
    let yesterday = Utc::now().date_naive().pred_opt().unwrap();
    OrderRepo::update(
        &pool,
        id,
        &OrderUpdateFields {
            start_date: Some(yesterday),
            updated_date: yesterday,
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let app = common::build_test_app(pool.clone());
    put_json_auth(
        app,
        &format!("/api/v1/orders/{id}"),
        json!({"status": "IN_PROGRESS"}),
        &token,
    )
    .await;

    let order = fetch_order(&pool, &token, id).await;
    assert_eq!(order["start_date"], yesterday.to_string().as_str());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_completed_stamps_end_date_and_marks_project_done(pool: PgPool) {
    let (token, id, id_project) = setup_order(&pool, "finisher@example.com").await;

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/orders/{id}"),
        json!({"status": "COMPLETED"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let order = fetch_order(&pool, &token, id).await;
    assert_eq!(order["status"], "COMPLETED");
    assert_eq!(
        order["end_date"],
        Utc::now().date_naive().to_string().as_str()
    );

    // The completion propagated to the linked project.
    let app = common::build_test_app(pool);
    let project = body_json(common::get(app, &format!("/api/v1/projects/{id_project}")).await).await;
    assert_eq!(project["is_done"], true);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_paid_stamps_payment_date(pool: PgPool) {
    let (token, id, _) = setup_order(&pool, "payer@example.com").await;

    let app = common::build_test_app(pool.clone());
    put_json_auth(
        app,
        &format!("/api/v1/orders/{id}"),
        json!({"status": "PAID", "final_price": 990000.0}),
        &token,
    )
    .await;

    let order = fetch_order(&pool, &token, id).await;
    assert_eq!(
        order["payment_date"],
        Utc::now().date_naive().to_string().as_str()
    );
    assert_eq!(order["final_price"], 990000.0);
    // Only the payment stage was stamped.
    assert!(order["start_date"].is_null());
    assert!(order["end_date"].is_null());
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_negative_final_price_rejected(pool: PgPool) {
    let (token, id, _) = setup_order(&pool, "cheap@example.com").await;

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/orders/{id}"),
        json!({"final_price": -1.0, "status": "PAID"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["status"], "FAILED");

    // Nothing was persisted.
    let order = fetch_order(&pool, &token, id).await;
    assert_eq!(order["status"], "PENDING");
    assert!(order["final_price"].is_null());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_future_date_rejected(pool: PgPool) {
    let (token, id, _) = setup_order(&pool, "future@example.com").await;
    let tomorrow = Utc::now().date_naive().succ_opt().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        &format!("/api/v1/orders/{id}"),
        json!({"start_date": tomorrow.to_string()}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_inverted_date_range_rejected(pool: PgPool) {
    let (token, id, _) = setup_order(&pool, "inverted@example.com").await;
    let today = Utc::now().date_naive();
    let yesterday = today.pred_opt().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        &format!("/api/v1/orders/{id}"),
        json!({"start_date": today.to_string(), "end_date": yesterday.to_string()}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_update_is_sparse_and_stamps_updated_date(pool: PgPool) {
    let (token, id, _) = setup_order(&pool, "sparse@example.com").await;

    let app = common::build_test_app(pool.clone());
    put_json_auth(
        app,
        &format!("/api/v1/orders/{id}"),
        json!({"start_price": 500000.0}),
        &token,
    )
    .await;

    let order = fetch_order(&pool, &token, id).await;
    assert_eq!(order["start_price"], 500000.0);
    // Unsupplied fields are untouched, but updated_date is always stamped.
    assert_eq!(order["status"], "PENDING");
    assert_eq!(
        order["updated_date"],
        Utc::now().date_naive().to_string().as_str()
    );
}

// ---------------------------------------------------------------------------
// Ownership
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_non_admin_listing_is_forced_to_own_orders(pool: PgPool) {
    let (_, _, id_project) = setup_order(&pool, "owner-a@example.com").await;

    // A second user orders the same project.
    seed_user(&pool, "owner-b@example.com", "USER").await;
    let token_b =
        common::login_token(common::build_test_app(pool.clone()), "owner-b@example.com").await;
    let app = common::build_test_app(pool.clone());
    post_json_auth(
        app,
        "/api/v1/orders",
        json!({"id_project": id_project}),
        &token_b,
    )
    .await;

    // B asks for A's orders; the filter override wins.
    let app = common::build_test_app(pool.clone());
    let a_id: i64 = sqlx::query_scalar("SELECT id FROM users WHERE email = $1")
        .bind("owner-a@example.com")
        .fetch_one(&pool)
        .await
        .unwrap();
    let json = body_json(get_auth(app, &format!("/api/v1/orders?id_user={a_id}"), &token_b).await)
        .await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["user"]["email"], "owner-b@example.com");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_admin_list_filters_apply_as_given(pool: PgPool) {
    let (_, _, id_project) = setup_order(&pool, "customer@example.com").await;
    seed_user(&pool, "admin@example.com", "ADMIN").await;
    let admin_token =
        common::login_token(common::build_test_app(pool.clone()), "admin@example.com").await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(
        get_auth(
            app,
            &format!("/api/v1/orders?id_project={id_project}"),
            &admin_token,
        )
        .await,
    )
    .await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_non_admin_cannot_touch_foreign_order(pool: PgPool) {
    let (_, id, _) = setup_order(&pool, "victim@example.com").await;

    seed_user(&pool, "intruder@example.com", "USER").await;
    let token =
        common::login_token(common::build_test_app(pool.clone()), "intruder@example.com").await;

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, &format!("/api/v1/orders/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/orders/{id}"),
        json!({"status": "PAID"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app(pool);
    let response = common::delete_auth(app, &format!("/api/v1/orders/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_owner_can_delete_own_order(pool: PgPool) {
    let (token, id, _) = setup_order(&pool, "cleaner@example.com").await;

    let app = common::build_test_app(pool.clone());
    let response = common::delete_auth(app, &format!("/api/v1/orders/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/api/v1/orders/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
