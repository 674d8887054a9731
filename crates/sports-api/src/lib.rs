//! JSON REST API for the sports catalog.
//!
//! Exposes an axum [`Router`] backed by any [`sports_core::SportStore`].
//! Transport concerns (CORS, tracing, listening) are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! Router::new()
//!   .nest("/api", sports_api::api_router(store.clone()))
//!   .fallback(sports_api::not_found)
//! ```

pub mod error;
pub mod health;
pub mod sports;

use std::sync::Arc;

use axum::{Router, routing::get};
use sports_core::SportStore;

pub use error::{ApiError, not_found};

/// Build the API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: SportStore + 'static,
{
  Router::new()
    .route("/health", get(health::handler))
    .route("/sports", get(sports::catalog))
    .route("/sports/db", get(sports::stored::<S>))
    .with_state(store)
}
