//! Fixed data: the static catalog and the default seed set.

use crate::sport::Sport;

/// `(name, players)` pairs served by `GET /sports`, in response order.
const STATIC_CATALOG: &[(&str, u32)] = &[
  ("Cricket", 11),
  ("Football", 11),
  ("Basketball", 5),
  ("Tennis", 1),
  ("Volleyball", 6),
];

/// `(name, players)` pairs inserted into an empty store.
const SEED_SET: &[(&str, u32)] =
  &[("Rugby", 15), ("Baseball", 9), ("Ice Hockey", 6)];

/// The static catalog. Identical on every call and never persisted.
pub fn static_catalog() -> Vec<Sport> { to_sports(STATIC_CATALOG) }

/// The records written by auto-seed and by `sports-server --seed`.
pub fn seed_set() -> Vec<Sport> { to_sports(SEED_SET) }

fn to_sports(pairs: &[(&str, u32)]) -> Vec<Sport> {
  pairs
    .iter()
    .map(|&(name, players)| Sport::new(name, players))
    .collect()
}

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use super::*;

  #[test]
  fn static_catalog_is_stable() {
    let first = serde_json::to_vec(&static_catalog()).unwrap();
    let second = serde_json::to_vec(&static_catalog()).unwrap();
    assert_eq!(first, second);
    assert_eq!(static_catalog()[0], Sport::new("Cricket", 11));
    assert_eq!(static_catalog().len(), 5);
  }

  #[test]
  fn seed_set_names_are_unique() {
    let seed = seed_set();
    let names: HashSet<_> = seed.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names.len(), seed.len());
  }
}
