//! Liveness report returned by `GET /health`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The `status` value of a healthy service.
pub const STATUS_OK: &str = "OK";

/// Liveness report. Says nothing about storage connectivity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
  pub status:    String,
  pub timestamp: DateTime<Utc>,
}

impl HealthReport {
  /// An `OK` report stamped with the current time.
  pub fn ok() -> Self {
    Self { status: STATUS_OK.to_owned(), timestamp: Utc::now() }
  }

  pub fn is_ok(&self) -> bool { self.status == STATUS_OK }
}
