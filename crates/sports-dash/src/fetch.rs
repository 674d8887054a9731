//! Per-section fetch results.
//!
//! Each dashboard region owns one of these values and renders by matching on
//! it, so a failure in one region never leaks into another.

use serde::de::DeserializeOwned;
use serde_json::Value;
use sports_core::HealthReport;

// ─── Fetch ────────────────────────────────────────────────────────────────────

/// Outcome of fetching one catalog endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetch<T> {
  Loaded(T),
  /// The request failed or the body had the wrong shape.
  Failed(String),
}

impl<T> Fetch<Vec<T>> {
  /// Items to render; a failed fetch renders like an empty one.
  pub fn items(&self) -> &[T] {
    match self {
      Fetch::Loaded(items) => items,
      Fetch::Failed(_) => &[],
    }
  }

  pub fn failure(&self) -> Option<&str> {
    match self {
      Fetch::Loaded(_) => None,
      Fetch::Failed(reason) => Some(reason),
    }
  }
}

impl<T: DeserializeOwned> Fetch<Vec<T>> {
  /// Accept `body` only if it is a JSON array whose items decode as `T`.
  pub fn from_json_array(body: Value) -> Self {
    if !body.is_array() {
      return Fetch::Failed(format!(
        "expected a JSON array, got {}",
        json_kind(&body)
      ));
    }
    match serde_json::from_value(body) {
      Ok(items) => Fetch::Loaded(items),
      Err(e) => Fetch::Failed(format!("malformed item: {e}")),
    }
  }
}

fn json_kind(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "a boolean",
    Value::Number(_) => "a number",
    Value::String(_) => "a string",
    Value::Array(_) => "an array",
    Value::Object(_) => "an object",
  }
}

// ─── Health ───────────────────────────────────────────────────────────────────

/// What the dashboard knows about API liveness.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HealthState {
  /// Nothing fetched yet.
  #[default]
  Unknown,
  Reported(HealthReport),
  /// The health request failed in any way.
  Down,
}

impl HealthState {
  pub fn label(&self) -> &str {
    match self {
      HealthState::Unknown => "Unknown",
      HealthState::Reported(report) => &report.status,
      HealthState::Down => "Down",
    }
  }

  pub fn is_ok(&self) -> bool {
    matches!(self, HealthState::Reported(report) if report.is_ok())
  }
}
