//! Shared response envelope types for API handlers.
//!
//! Mutating endpoints answer with a coarse `{"status": "SUCCESS"}`
//! envelope; creations add the generated id. Reads return the resource
//! JSON directly.

use serde::Serialize;
use stroyka_core::types::DbId;

/// Status string for successful mutations.
pub const STATUS_SUCCESS: &str = "SUCCESS";

/// Standard `{"status": "SUCCESS"}` mutation envelope.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub fn success() -> Self {
        StatusResponse {
            status: STATUS_SUCCESS,
        }
    }
}

/// Creation envelope carrying the generated row id.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub status: &'static str,
    pub id: DbId,
}

impl CreatedResponse {
    pub fn new(id: DbId) -> Self {
        CreatedResponse {
            status: STATUS_SUCCESS,
            id,
        }
    }
}

/// Envelope for image uploads carrying the stored filename.
#[derive(Debug, Serialize)]
pub struct StoredImageResponse {
    pub status: &'static str,
    pub image: String,
}

impl StoredImageResponse {
    pub fn new(image: String) -> Self {
        StoredImageResponse {
            status: STATUS_SUCCESS,
            image,
        }
    }
}
