//! Core types and trait definitions for the sports catalog.
//!
//! This crate is deliberately free of HTTP and database dependencies. The
//! store backend, the API, the server and the dashboard all depend on it.

pub mod catalog;
pub mod health;
pub mod seed;
pub mod sport;
pub mod store;

pub use health::HealthReport;
pub use sport::{Sport, StoredSport};
pub use store::SportStore;
