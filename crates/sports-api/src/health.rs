//! Handler for `GET /health`.

use axum::Json;
use sports_core::HealthReport;

/// `GET /health` — always 200, whatever the state of the store.
pub async fn handler() -> Json<HealthReport> { Json(HealthReport::ok()) }
