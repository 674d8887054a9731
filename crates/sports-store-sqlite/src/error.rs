//! Error type for `sports-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The store was built without a connection (see
  /// [`crate::SqliteStore::disconnected`]).
  #[error("database not connected")]
  NotConnected,

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  #[error("invalid row: {0}")]
  InvalidRow(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
