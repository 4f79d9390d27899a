//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! This is the only place that turns failures into status codes. Handlers
//! return `Result<_, ApiError>` and let `?` do the classification.

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
  #[error("not found")]
  NotFound,

  #[error("malformed id: {0:?}")]
  MalformedId(String),

  /// The create handler's own pre-check: neither field was supplied.
  #[error("{0} property is missing")]
  MissingProperty(&'static str),

  #[error("{0}")]
  Validation(String),

  /// The body could not be read as a person (bad JSON, wrong field types).
  #[error("malformed body: {0}")]
  MalformedBody(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  /// Classify a backend error through the core taxonomy.
  pub fn from_store<E>(e: E) -> Self
  where
    E: Into<phonebook_core::Error>,
  {
    Self::from(e.into())
  }
}

impl From<phonebook_core::Error> for ApiError {
  fn from(e: phonebook_core::Error) -> Self {
    match e {
      phonebook_core::Error::MalformedId(raw) => ApiError::MalformedId(raw),
      phonebook_core::Error::Validation(v) => ApiError::Validation(v.to_string()),
      phonebook_core::Error::Store(source) => ApiError::Store(source),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
      ApiError::MalformedId(raw) => {
        tracing::debug!(id = %raw, "rejecting malformed id");
        StatusCode::BAD_REQUEST.into_response()
      }
      e @ ApiError::MissingProperty(_) => {
        (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() })))
          .into_response()
      }
      ApiError::Validation(message) | ApiError::MalformedBody(message) => {
        (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
          .into_response()
      }
      ApiError::Store(e) => {
        tracing::error!(error = %e, "unhandled store failure");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          Json(json!({ "error": "internal server error" })),
        )
          .into_response()
      }
    }
  }
}
