//! The `SportStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `sports-store-sqlite`).
//! Higher layers (`sports-api`, `sports-server`) depend on this abstraction,
//! not on any concrete backend.

use std::future::Future;

use crate::sport::{Sport, StoredSport};

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a persistent collection of sports keyed by name.
///
/// A store is an explicit handle: callers ask it whether it is usable via
/// [`SportStore::is_ready`] instead of inspecting any global connection
/// state. All async methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait SportStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Whether the backend holds a live connection. A store that is not ready
  /// fails every other operation.
  fn is_ready(&self) -> bool;

  /// Number of stored sports.
  fn count(&self) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;

  /// All stored sports, sorted by `name` ascending.
  fn list_by_name(
    &self,
  ) -> impl Future<Output = Result<Vec<StoredSport>, Self::Error>> + Send + '_;

  /// Insert `sport` unless a sport with the same name already exists.
  ///
  /// Returns the stored record when a row was inserted and `None` when the
  /// name was already taken. Never fails on a name collision, so concurrent
  /// callers may upsert the same name safely.
  fn upsert_by_name(
    &self,
    sport: Sport,
  ) -> impl Future<Output = Result<Option<StoredSport>, Self::Error>> + Send + '_;

  /// Delete every stored sport and return how many were removed.
  ///
  /// Only the explicit seed command uses this; the HTTP surface never
  /// deletes.
  fn clear(&self) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;
}
