//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use dex_core::catalog::CatalogError;
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("conflict: {0}")]
  Conflict(String),

  #[error("unprocessable: {0}")]
  Unprocessable(String),

  #[error("catalog unavailable: {0}")]
  UpstreamUnavailable(String),

  #[error("catalog error: {0}")]
  Upstream(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  pub fn store(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    Self::Store(Box::new(e))
  }
}

impl From<dex_core::Error> for ApiError {
  fn from(e: dex_core::Error) -> Self { Self::BadRequest(e.to_string()) }
}

impl From<CatalogError> for ApiError {
  fn from(e: CatalogError) -> Self {
    match e {
      CatalogError::Unavailable(_) => {
        Self::UpstreamUnavailable("catalog is unreachable".to_owned())
      }
      CatalogError::NotFound(name) => {
        Self::NotFound(format!("Pokemon '{name}' not identified"))
      }
      CatalogError::Status(code) => Self::Upstream(format!("catalog error ({code})")),
      CatalogError::Decode(reason) => {
        Self::Upstream(format!("catalog response unreadable: {reason}"))
      }
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Conflict(m) => (StatusCode::CONFLICT, m.clone()),
      ApiError::Unprocessable(m) => (StatusCode::UNPROCESSABLE_ENTITY, m.clone()),
      ApiError::UpstreamUnavailable(m) => (StatusCode::SERVICE_UNAVAILABLE, m.clone()),
      ApiError::Upstream(m) => (StatusCode::BAD_GATEWAY, m.clone()),
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store failure");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
      }
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
