//! HTTP handlers, one module per resource.

pub mod attributes;
pub mod auth;
pub mod categories;
pub mod cities;
pub mod orders;
pub mod projects;
pub mod units;
pub mod users;

use axum::body::Bytes;
use axum::extract::Multipart;

use crate::error::{AppError, AppResult};

/// Read the first file field of a multipart body, returning the client
/// filename and the file bytes. Shared by every image upload endpoint.
pub(crate) async fn read_image_field(mut multipart: Multipart) -> AppResult<(String, Bytes)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        let Some(name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {e}")))?;
        return Ok((name, bytes));
    }
    Err(AppError::BadRequest("Missing image file field".into()))
}
