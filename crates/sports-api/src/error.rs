//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// An error returned by an API handler.
///
/// Bodies are always `{"error": "<message>"}`. Store failures are logged in
/// full but reported to the client only as a generic message.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("route not found")]
  NotFound,

  #[error("database not connected")]
  Unavailable,

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound => (StatusCode::NOT_FOUND, "Route not found"),
      ApiError::Unavailable => {
        (StatusCode::SERVICE_UNAVAILABLE, "Database not connected")
      }
      ApiError::Store(e) => {
        error!(error = %e, "store operation failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Server Error")
      }
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}

/// Fallback handler for unmatched routes.
pub async fn not_found() -> ApiError { ApiError::NotFound }
