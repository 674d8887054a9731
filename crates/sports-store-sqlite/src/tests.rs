//! Integration tests for `SqliteStore` against an in-memory database.

use sports_core::{
  catalog::seed_set,
  seed::{seed_all, seed_if_empty},
  Sport, SportStore,
};

use crate::{Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn names(sports: &[sports_core::StoredSport]) -> Vec<&str> {
  sports.iter().map(|s| s.name()).collect()
}

// ─── Basic operations ────────────────────────────────────────────────────────

#[tokio::test]
async fn new_store_is_ready_and_empty() {
  let s = store().await;
  assert!(s.is_ready());
  assert_eq!(s.count().await.unwrap(), 0);
  assert!(s.list_by_name().await.unwrap().is_empty());
}

#[tokio::test]
async fn upsert_inserts_with_fresh_id() {
  let s = store().await;

  let stored = s
    .upsert_by_name(Sport::new("Rugby", 15))
    .await
    .unwrap()
    .expect("first insert should create a row");
  assert_eq!(stored.sport, Sport::new("Rugby", 15));

  let all = s.list_by_name().await.unwrap();
  assert_eq!(all, vec![stored]);
}

#[tokio::test]
async fn upsert_existing_name_is_a_noop() {
  let s = store().await;
  let first = s
    .upsert_by_name(Sport::new("Rugby", 15))
    .await
    .unwrap()
    .unwrap();

  // Same name, different attributes: the original row wins.
  let second = s.upsert_by_name(Sport::new("Rugby", 13)).await.unwrap();
  assert!(second.is_none());

  let all = s.list_by_name().await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].id, first.id);
  assert_eq!(all[0].sport.players, 15);
}

#[tokio::test]
async fn list_is_sorted_by_name_for_any_insertion_order() {
  let s = store().await;
  for name in ["Volleyball", "Archery", "Ice Hockey", "Baseball", "Rugby"] {
    s.upsert_by_name(Sport::new(name, 1)).await.unwrap();
  }

  let all = s.list_by_name().await.unwrap();
  assert_eq!(
    names(&all),
    ["Archery", "Baseball", "Ice Hockey", "Rugby", "Volleyball"]
  );
}

#[tokio::test]
async fn clear_removes_everything() {
  let s = store().await;
  seed_all(&s, seed_set()).await.unwrap();

  assert_eq!(s.clear().await.unwrap(), 3);
  assert_eq!(s.count().await.unwrap(), 0);
}

#[tokio::test]
async fn connect_accepts_memory_url() {
  let s = SqliteStore::connect("sqlite://:memory:").await.unwrap();
  assert!(s.is_ready());
  assert_eq!(s.count().await.unwrap(), 0);
}

// ─── Disconnected ────────────────────────────────────────────────────────────

#[tokio::test]
async fn disconnected_store_is_not_ready() {
  let s = SqliteStore::disconnected();
  assert!(!s.is_ready());

  let err = s.count().await.unwrap_err();
  assert!(matches!(err, Error::NotConnected));

  let err = s.upsert_by_name(Sport::new("Rugby", 15)).await.unwrap_err();
  assert!(matches!(err, Error::NotConnected));
}

// ─── Seeding ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn seed_if_empty_inserts_seed_set_sorted() {
  let s = store().await;

  let inserted = seed_if_empty(&s, seed_set()).await.unwrap();
  assert_eq!(inserted, 3);

  let all = s.list_by_name().await.unwrap();
  assert_eq!(names(&all), ["Baseball", "Ice Hockey", "Rugby"]);
}

#[tokio::test]
async fn seed_if_empty_skips_non_empty_store() {
  let s = store().await;
  s.upsert_by_name(Sport::new("Curling", 4)).await.unwrap();

  let inserted = seed_if_empty(&s, seed_set()).await.unwrap();
  assert_eq!(inserted, 0);
  assert_eq!(s.count().await.unwrap(), 1);
}

#[tokio::test]
async fn seeding_twice_leaves_count_unchanged() {
  let s = store().await;
  seed_all(&s, seed_set()).await.unwrap();
  let before = s.list_by_name().await.unwrap();

  let inserted = seed_all(&s, seed_set()).await.unwrap();
  assert_eq!(inserted, 0);
  assert_eq!(s.list_by_name().await.unwrap(), before);
}

#[tokio::test]
async fn concurrent_first_seeds_do_not_duplicate() {
  let s = store().await;
  let (a, b) = tokio::join!(
    seed_if_empty(&s, seed_set()),
    seed_if_empty(&s, seed_set()),
  );

  // Both callers may have seen an empty store; together they insert each
  // name exactly once.
  assert_eq!(a.unwrap() + b.unwrap(), 3);
  assert_eq!(s.count().await.unwrap(), 3);
}
