//! API error types with IntoResponse
//!
//! Not-found is the only business outcome; every store failure becomes a
//! generic 500 with the cause logged.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found (404, empty body)
    NotFound { resource: &'static str, id: String },

    /// Database error (500, logged)
    Database(DbError),
}

impl ApiError {
    pub fn item_not_found(id: i32) -> Self {
        Self::NotFound {
            resource: "todo item",
            id: id.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::NotFound { resource, id } => {
                tracing::debug!("{} '{}' not found", resource, id);
                StatusCode::NOT_FOUND.into_response()
            }
            Self::Database(e) => {
                // Log the actual error, return generic message
                match std::error::Error::source(e) {
                    Some(cause) => tracing::error!("Database error: {}: {}", e, cause),
                    None => tracing::error!("Database error: {}", e),
                }
                let body = json!({
                    "error": "internal_error",
                    "message": "an internal error occurred"
                });
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}
