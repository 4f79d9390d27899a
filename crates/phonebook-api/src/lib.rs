//! JSON REST API for the phonebook.
//!
//! Exposes an axum [`Router`] backed by any
//! [`phonebook_core::store::PersonStore`]. Transport concerns (listening,
//! request logging) are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = phonebook_api::api_router(Arc::new(store));
//! axum::serve(listener, app).await?;
//! ```

pub mod error;
pub mod info;
pub mod persons;

use std::sync::Arc;

use axum::{
  Json,
  Router,
  http::StatusCode,
  response::{IntoResponse, Response},
  routing::get,
};
use phonebook_core::store::PersonStore;
use serde_json::json;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// Any request no route claims, including a known path with an unsupported
/// method, gets 404 `{"error":"unknown endpoint"}`.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: PersonStore + 'static,
{
  Router::new()
    .route(
      "/api/persons",
      get(persons::list::<S>).post(persons::create::<S>),
    )
    .route(
      "/api/persons/{id}",
      get(persons::get_one::<S>)
        .put(persons::update_one::<S>)
        .delete(persons::delete_one::<S>),
    )
    .route("/info", get(info::handler::<S>))
    .method_not_allowed_fallback(unknown_endpoint)
    .fallback(unknown_endpoint)
    .with_state(store)
}

async fn unknown_endpoint() -> Response {
  (StatusCode::NOT_FOUND, Json(json!({ "error": "unknown endpoint" })))
    .into_response()
}
