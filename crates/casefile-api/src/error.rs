//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("unauthorized")]
  Unauthorized,

  #[error("forbidden: {0}")]
  Forbidden(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  /// A single-write constraint violation — the insert did not apply, the
  /// store is otherwise healthy.
  #[error("constraint violation: {0}")]
  Constraint(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("internal error: {0}")]
  Internal(String),
}

impl ApiError {
  pub fn store<E: std::error::Error + Send + Sync + 'static>(e: E) -> Self {
    ApiError::Store(Box::new(e))
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::Unauthorized => {
        (StatusCode::UNAUTHORIZED, "unauthorized".to_owned())
      }
      ApiError::Forbidden(m) => (StatusCode::FORBIDDEN, m.clone()),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Constraint(m) => (StatusCode::UNPROCESSABLE_ENTITY, m.clone()),
      ApiError::Store(e) => {
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
      }
      ApiError::Internal(m) => (StatusCode::INTERNAL_SERVER_ERROR, m.clone()),
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
