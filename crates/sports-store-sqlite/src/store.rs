//! [`SqliteStore`] — the SQLite implementation of [`SportStore`].

use std::path::Path;

use tracing::{debug, info};
use uuid::Uuid;

use sports_core::{Sport, SportStore, StoredSport};

use crate::{
  encode::{RawSport, encode_uuid},
  schema::SCHEMA,
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A sports store backed by a single SQLite file.
///
/// A store may also be built without a connection
/// ([`SqliteStore::disconnected`]); it then reports `is_ready() == false` and
/// every query fails with [`Error::NotConnected`].
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: Option<tokio_rusqlite::Connection>,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn: Some(conn) };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn: Some(conn) };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open a store from a connection string.
  ///
  /// Accepts a plain file path, `sqlite://<path>`, or `:memory:`.
  pub async fn connect(url: &str) -> Result<Self> {
    let path = url.strip_prefix("sqlite://").unwrap_or(url);
    let store = if path == ":memory:" {
      Self::open_in_memory().await?
    } else {
      Self::open(path).await?
    };
    info!(path, "connected to sqlite store");
    Ok(store)
  }

  /// A store with no connection behind it.
  pub fn disconnected() -> Self { Self { conn: None } }

  fn conn(&self) -> Result<&tokio_rusqlite::Connection> {
    self.conn.as_ref().ok_or(Error::NotConnected)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn()?
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── SportStore impl ─────────────────────────────────────────────────────────

impl SportStore for SqliteStore {
  type Error = Error;

  fn is_ready(&self) -> bool { self.conn.is_some() }

  async fn count(&self) -> Result<u64> {
    let count: i64 = self
      .conn()?
      .call(|conn| {
        Ok(conn.query_row("SELECT COUNT(*) FROM sports", [], |r| r.get(0))?)
      })
      .await?;

    u64::try_from(count)
      .map_err(|_| Error::InvalidRow(format!("negative row count {count}")))
  }

  async fn list_by_name(&self) -> Result<Vec<StoredSport>> {
    let raws: Vec<RawSport> = self
      .conn()?
      .call(|conn| {
        let mut stmt = conn
          .prepare("SELECT id, name, players FROM sports ORDER BY name ASC")?;
        let rows = stmt
          .query_map([], RawSport::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawSport::into_stored).collect()
  }

  async fn upsert_by_name(&self, sport: Sport) -> Result<Option<StoredSport>> {
    let stored = StoredSport { id: Uuid::new_v4(), sport };

    let id_str  = encode_uuid(stored.id);
    let name    = stored.sport.name.clone();
    let players = i64::from(stored.sport.players);

    let changed = self
      .conn()?
      .call(move |conn| {
        Ok(conn.execute(
          "INSERT INTO sports (id, name, players) VALUES (?1, ?2, ?3)
           ON CONFLICT (name) DO NOTHING",
          rusqlite::params![id_str, name, players],
        )?)
      })
      .await?;

    if changed == 0 {
      debug!(name = stored.name(), "sport already present, skipping insert");
      return Ok(None);
    }
    Ok(Some(stored))
  }

  async fn clear(&self) -> Result<u64> {
    let removed = self
      .conn()?
      .call(|conn| Ok(conn.execute("DELETE FROM sports", [])?))
      .await?;
    Ok(removed as u64)
  }
}
