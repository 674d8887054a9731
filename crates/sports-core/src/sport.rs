//! The sport record, in its unsaved and stored forms.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named sport with its team size.
///
/// This is the shape served by the static catalog and the input to
/// [`crate::store::SportStore::upsert_by_name`]. It carries no id; only the
/// store assigns one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sport {
  /// Unique within a store.
  pub name:    String,
  pub players: u32,
}

impl Sport {
  pub fn new(name: impl Into<String>, players: u32) -> Self {
    Self { name: name.into(), players }
  }
}

/// A sport as persisted by a store, with its store-assigned id.
///
/// Serialises flat: `{"id": "...", "name": "...", "players": 15}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSport {
  pub id:    Uuid,
  #[serde(flatten)]
  pub sport: Sport,
}

impl StoredSport {
  pub fn name(&self) -> &str { &self.sport.name }
}
