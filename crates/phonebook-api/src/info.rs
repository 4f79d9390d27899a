//! Handler for `GET /info`.

use std::sync::Arc;

use axum::{extract::State, response::Html};
use chrono::{DateTime, Utc};
use phonebook_core::store::PersonStore;

use crate::error::ApiError;

/// Rendering of the server clock, e.g. `Mon Oct 19 2026 09:30:00 GMT+0000`.
const TIMESTAMP_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// `GET /info` — person count and the time the handler ran.
pub async fn handler<S>(State(store): State<Arc<S>>) -> Result<Html<String>, ApiError>
where
  S: PersonStore,
{
  let count = store.count_all().await.map_err(ApiError::from_store)?;
  Ok(Html(render(count, Utc::now())))
}

pub fn render(count: u64, now: DateTime<Utc>) -> String {
  format!(
    "<p>Phonebook has info for {count} people</br>{}</p>",
    now.format(TIMESTAMP_FORMAT)
  )
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone as _;

  use super::*;

  #[test]
  fn renders_count_and_timestamp() {
    let now = Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap();
    assert_eq!(
      render(4, now),
      "<p>Phonebook has info for 4 people</br>Mon Oct 19 2026 09:30:00 GMT+0000</p>"
    );
  }
}
