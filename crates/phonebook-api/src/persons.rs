//! Handlers for `/api/persons` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/api/persons` | All persons, possibly empty |
//! | `POST`   | `/api/persons` | Body: [`NewPerson`]; returns 200 + stored person |
//! | `GET`    | `/api/persons/:id` | 404 if not found, 400 if `id` is malformed |
//! | `PUT`    | `/api/persons/:id` | Body: [`NewPerson`]; 404 if not found |
//! | `DELETE` | `/api/persons/:id` | Always 204 unless `id` is malformed |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State, rejection::JsonRejection},
  http::StatusCode,
};
use phonebook_core::{
  person::{NewPerson, Person, PersonId},
  store::PersonStore,
};

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /api/persons`
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Json<Vec<Person>>, ApiError>
where
  S: PersonStore,
{
  let persons = store.list_all().await.map_err(ApiError::from_store)?;
  Ok(Json(persons))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /api/persons/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(raw_id): Path<String>,
) -> Result<Json<Person>, ApiError>
where
  S: PersonStore,
{
  let id = PersonId::parse(&raw_id)?;
  let person = store
    .find_by_id(id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or(ApiError::NotFound)?;
  Ok(Json(person))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /api/persons` — returns 200 + the stored person.
///
/// Only a body with *both* fields missing is rejected here. A body with one
/// field goes to the store, whose validation reports the missing field.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Result<Json<NewPerson>, JsonRejection>,
) -> Result<Json<Person>, ApiError>
where
  S: PersonStore,
{
  let body = candidate(body)?;
  if is_missing(&body.name) && is_missing(&body.number) {
    return Err(ApiError::MissingProperty("name"));
  }

  let person = store.insert(body).await.map_err(ApiError::from_store)?;
  tracing::debug!(id = %person.id, "created person");
  Ok(Json(person))
}

/// A request without a JSON content type carries no fields at all; any other
/// unreadable body is a bad request.
fn candidate(body: Result<Json<NewPerson>, JsonRejection>) -> Result<NewPerson, ApiError> {
  match body {
    Ok(Json(b)) => Ok(b),
    Err(JsonRejection::MissingJsonContentType(_)) => Ok(NewPerson::default()),
    Err(e) => Err(ApiError::MalformedBody(e.body_text())),
  }
}

fn is_missing(field: &Option<String>) -> bool {
  field.as_deref().is_none_or(str::is_empty)
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /api/persons/:id` — replaces name and number together.
pub async fn update_one<S>(
  State(store): State<Arc<S>>,
  Path(raw_id): Path<String>,
  body: Result<Json<NewPerson>, JsonRejection>,
) -> Result<Json<Person>, ApiError>
where
  S: PersonStore,
{
  let id = PersonId::parse(&raw_id)?;
  let body = candidate(body)?;
  let person = store
    .update_by_id(id, body)
    .await
    .map_err(ApiError::from_store)?
    .ok_or(ApiError::NotFound)?;
  Ok(Json(person))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /api/persons/:id` — 204 whether or not the person existed.
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError>
where
  S: PersonStore,
{
  let id = PersonId::parse(&raw_id)?;
  let removed = store.delete_by_id(id).await.map_err(ApiError::from_store)?;
  tracing::debug!(%id, removed, "delete person");
  Ok(StatusCode::NO_CONTENT)
}
