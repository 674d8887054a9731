//! Conversions between SQLite column values and domain types.
//!
//! Ids are stored as hyphenated lowercase UUID strings; player counts as
//! INTEGER.

use sports_core::{Sport, StoredSport};
use uuid::Uuid;

use crate::{Error, Result};

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

/// Raw row from the `sports` table.
pub struct RawSport {
  pub id:      String,
  pub name:    String,
  pub players: i64,
}

impl RawSport {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:      row.get(0)?,
      name:    row.get(1)?,
      players: row.get(2)?,
    })
  }

  pub fn into_stored(self) -> Result<StoredSport> {
    let players = u32::try_from(self.players).map_err(|_| {
      Error::InvalidRow(format!(
        "player count {} out of range for {:?}",
        self.players, self.name
      ))
    })?;

    Ok(StoredSport {
      id:    decode_uuid(&self.id)?,
      sport: Sport { name: self.name, players },
    })
  }
}
