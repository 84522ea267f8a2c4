//! Shared helpers for HTTP-level integration tests.
//!
//! Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use stroyka_api::auth::jwt::JwtConfig;
use stroyka_api::auth::password::hash_password;
use stroyka_api::config::ServerConfig;
use stroyka_api::router::build_app_router;
use stroyka_api::state::AppState;
use stroyka_api::storage::ImageStore;
use stroyka_core::types::DbId;
use stroyka_db::models::user::NewUser;
use stroyka_db::repositories::UserRepo;

/// Password used by every seeded test user.
pub const TEST_PASSWORD: &str = "password123";

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        upload_dir: std::env::temp_dir().join("stroyka-test-uploads"),
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool. Mirrors the router construction in `main.rs` so
/// integration tests exercise the same stack that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let images = ImageStore::new(&config.upload_dir);

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        images: Arc::new(images),
    };

    build_app_router(state, &config)
}

/// Send a request with optional bearer token and JSON body.
pub async fn request(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("valid request"),
        None => builder.body(Body::empty()).expect("valid request"),
    };
    app.oneshot(request).await.expect("request should complete")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    request(app, Method::GET, uri, None, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    request(app, Method::POST, uri, None, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    request(app, Method::PUT, uri, None, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    request(app, Method::DELETE, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    request(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response<Body> {
    request(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response<Body> {
    request(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    request(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body into a JSON value.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

/// Insert a user directly with [`TEST_PASSWORD`], returning the new id.
pub async fn seed_user(pool: &PgPool, email: &str, role: &str) -> DbId {
    let password_hash = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    let user = UserRepo::create(
        pool,
        &NewUser {
            name: "Test User".to_string(),
            org_name: "Test Org".to_string(),
            role: role.to_string(),
            email: email.to_string(),
            phone: "+70000000000".to_string(),
            password_hash,
        },
    )
    .await
    .expect("user insert should succeed");
    user.id
}

/// Log a seeded user in and return their access token.
pub async fn login_token(app: Router, email: &str) -> String {
    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({"email": email, "password": TEST_PASSWORD}),
    )
    .await;
    let json = body_json(response).await;
    json["access_token"]
        .as_str()
        .expect("login should return an access token")
        .to_string()
}

/// Insert a city and return its id.
pub async fn seed_city(pool: &PgPool, name: &str) -> DbId {
    use stroyka_db::models::city::CreateCity;
    use stroyka_db::repositories::CityRepo;

    CityRepo::create(
        pool,
        &CreateCity {
            name: name.to_string(),
            image: None,
        },
    )
    .await
    .expect("city insert should succeed")
    .id
}

/// Insert a category and return its id.
pub async fn seed_category(pool: &PgPool, name: &str) -> DbId {
    use stroyka_db::models::category::CreateCategory;
    use stroyka_db::repositories::CategoryRepo;

    CategoryRepo::create(
        pool,
        &CreateCategory {
            name: name.to_string(),
            image: None,
        },
    )
    .await
    .expect("category insert should succeed")
    .id
}

/// Insert an attribute and return its id.
pub async fn seed_attribute(pool: &PgPool, name: &str) -> DbId {
    use stroyka_db::models::attribute::CreateAttribute;
    use stroyka_db::repositories::AttributeRepo;

    AttributeRepo::create(
        pool,
        &CreateAttribute {
            name: name.to_string(),
        },
    )
    .await
    .expect("attribute insert should succeed")
    .id
}

/// Insert a project (no attributes) and return its id.
pub async fn seed_project(pool: &PgPool, name: &str, id_category: DbId, id_city: DbId) -> DbId {
    use stroyka_db::models::project::CreateProject;
    use stroyka_db::repositories::ProjectRepo;

    ProjectRepo::create(
        pool,
        &CreateProject {
            name: name.to_string(),
            slug: name.to_lowercase().replace(' ', "-"),
            main_image: None,
            description: "seeded".to_string(),
            is_done: None,
            id_category,
            id_city,
            attributes: Vec::new(),
        },
    )
    .await
    .expect("project insert should succeed")
    .id
}
