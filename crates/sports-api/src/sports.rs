//! Handlers for `/sports` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/sports` | Static catalog; never touches the store |
//! | `GET`  | `/sports/db` | Stored sports sorted by name; seeds an empty store first. 503 if the store is not ready |

use std::sync::Arc;

use axum::{Json, extract::State};
use sports_core::{
  Sport, SportStore, StoredSport,
  catalog::{seed_set, static_catalog},
  seed::seed_if_empty,
};
use tracing::warn;

use crate::error::ApiError;

// ─── Static ───────────────────────────────────────────────────────────────────

/// `GET /sports`
pub async fn catalog() -> Json<Vec<Sport>> { Json(static_catalog()) }

// ─── Stored ───────────────────────────────────────────────────────────────────

/// `GET /sports/db`
pub async fn stored<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<StoredSport>>, ApiError>
where
  S: SportStore,
{
  if !store.is_ready() {
    warn!("GET /sports/db while the store is not connected");
    return Err(ApiError::Unavailable);
  }

  seed_if_empty(store.as_ref(), seed_set())
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  let sports = store
    .list_by_name()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(sports))
}
