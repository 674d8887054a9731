//! SQL schema for the sports SQLite store.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Rows are only ever inserted (auto-seed, seed command) or wiped wholesale
-- by the seed command's reset. No UPDATE is ever issued.
CREATE TABLE IF NOT EXISTS sports (
    id       TEXT PRIMARY KEY,       -- hyphenated lowercase UUID
    name     TEXT NOT NULL UNIQUE,   -- upsert key
    players  INTEGER NOT NULL
);

PRAGMA user_version = 1;
";
