//! Seeding a store with the default sport set.
//!
//! Seeding never takes a lock. Every insert goes through
//! [`SportStore::upsert_by_name`], so two callers that both observe an empty
//! store and both seed still end up with exactly one record per name. The
//! emptiness check in [`seed_if_empty`] only saves writes.

use tracing::info;

use crate::{sport::Sport, store::SportStore};

/// Upsert every sport in `seed` and return how many rows were inserted.
pub async fn seed_all<S>(store: &S, seed: Vec<Sport>) -> Result<usize, S::Error>
where
  S: SportStore,
{
  let mut inserted = 0;
  for sport in seed {
    if store.upsert_by_name(sport).await?.is_some() {
      inserted += 1;
    }
  }
  Ok(inserted)
}

/// Seed `store` with `seed` if it currently holds no sports.
///
/// Returns the number of rows inserted, which is `0` for a non-empty store
/// and may be `0` for an empty one if a concurrent caller won the race.
pub async fn seed_if_empty<S>(
  store: &S,
  seed: Vec<Sport>,
) -> Result<usize, S::Error>
where
  S: SportStore,
{
  if store.count().await? > 0 {
    return Ok(0);
  }

  info!("store is empty, seeding {} sports", seed.len());
  let inserted = seed_all(store, seed).await?;
  info!(inserted, "seeding finished");
  Ok(inserted)
}
