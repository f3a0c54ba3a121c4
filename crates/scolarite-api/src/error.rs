//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  extract::rejection::{JsonRejection, PathRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use scolarite_core::StoreError;
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler. Rendered as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  /// A store failure reported as `500`.
  pub fn store<E: StoreError>(e: E) -> Self { ApiError::Store(Box::new(e)) }

  /// A store failure reported as `400` with the store's own message.
  pub fn rejected<E: StoreError>(e: E) -> Self { ApiError::BadRequest(e.to_string()) }

  /// A failed delete. Constraint violations are replaced by `blocked`, which
  /// names the dependency; anything else keeps the store's message.
  pub fn delete_failed<E: StoreError>(e: E, blocked: &str) -> Self {
    if e.is_constraint_violation() {
      ApiError::BadRequest(blocked.to_owned())
    } else {
      ApiError::rejected(e)
    }
  }
}

impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self { ApiError::BadRequest(rejection.body_text()) }
}

impl From<PathRejection> for ApiError {
  fn from(rejection: PathRejection) -> Self { ApiError::BadRequest(rejection.body_text()) }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Store(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };
    if status.is_server_error() {
      tracing::error!(%status, error = %message, "request failed");
    } else {
      tracing::warn!(%status, error = %message, "request rejected");
    }
    (status, Json(json!({ "error": message }))).into_response()
  }
}
