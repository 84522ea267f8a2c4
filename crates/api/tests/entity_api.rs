//! HTTP-level integration tests for the catalog entities (cities,
//! categories, units, attributes).
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// City CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_create_city_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/cities", json!({"name": "Kazan"})).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["status"], "SUCCESS");
    assert!(json["id"].is_number());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_get_city_by_id(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/v1/cities", json!({"name": "Perm"})).await).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/cities/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Perm");
    assert!(json["image"].is_null());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_get_nonexistent_city_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/cities/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["status"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_update_city_is_sparse(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/cities",
            json!({"name": "Tula", "image": "tula.jpg"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    // Only the name is supplied; the image must survive.
    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/cities/{id}"),
        json!({"name": "Tula Oblast"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/cities/{id}")).await).await;
    assert_eq!(json["name"], "Tula Oblast");
    assert_eq!(json["image"], "tula.jpg");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_delete_city(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created =
        body_json(post_json(app, "/api/v1/cities", json!({"name": "Gone"})).await).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/cities/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/cities/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_list_cities_filters_by_name(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/cities", json!({"name": "Moscow"})).await;
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/cities", json!({"name": "Sochi"})).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/cities?name=Sochi").await).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Sochi");

    // No filter: everything comes back.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/cities").await).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_category_crud_round_trip(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(app, "/api/v1/categories", json!({"name": "Cottages"})).await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/categories/{id}"),
        json!({"image": "cottages.png"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/categories/{id}")).await).await;
    assert_eq!(json["name"], "Cottages");
    assert_eq!(json["image"], "cottages.png");

    let app = common::build_test_app(pool.clone());
    assert_eq!(
        delete(app, &format!("/api/v1/categories/{id}")).await.status(),
        StatusCode::OK
    );
    let app = common::build_test_app(pool);
    assert_eq!(
        get(app, &format!("/api/v1/categories/{id}")).await.status(),
        StatusCode::NOT_FOUND
    );
}

// ---------------------------------------------------------------------------
// Units
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_unit_crud_and_filter(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/v1/units",
        json!({"name": "m2", "full_name": "square meters"}),
    )
    .await;
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/units", json!({"name": "pcs"})).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/units?name=m2").await).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["full_name"], "square meters");

    // Filtering on both columns is conjunctive.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/units?name=m2&full_name=nope").await).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

// ---------------------------------------------------------------------------
// Attributes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_attribute_crud_round_trip(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(app, "/api/v1/attributes", json!({"name": "floors"})).await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/attributes/{id}"),
        json!({"name": "floor count"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/attributes/{id}")).await).await;
    assert_eq!(json["name"], "floor count");

    let app = common::build_test_app(pool.clone());
    assert_eq!(
        delete(app, &format!("/api/v1/attributes/{id}")).await.status(),
        StatusCode::OK
    );
    let app = common::build_test_app(pool);
    assert_eq!(
        delete(app, &format!("/api/v1/attributes/{id}")).await.status(),
        StatusCode::NOT_FOUND
    );
}
