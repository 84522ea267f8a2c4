use std::sync::Arc;

use crate::config::ServerConfig;
use crate::storage::ImageStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: stroyka_db::DbPool,
    /// Server configuration (JWT secret, CORS origins, upload dir).
    pub config: Arc<ServerConfig>,
    /// Uploaded image storage rooted at the configured upload directory.
    pub images: Arc<ImageStore>,
}
