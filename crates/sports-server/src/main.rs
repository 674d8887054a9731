//! sports-server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`) layered under
//! `SPORTS_*` environment variables, opens the SQLite store if one is
//! configured, and serves the JSON API over HTTP.
//!
//! # Seeding
//!
//! To write the default sports into the configured store without starting
//! the server:
//!
//! ```
//! cargo run -p sports-server -- --seed           # insert missing names
//! cargo run -p sports-server -- --seed --reset   # wipe, then insert
//! ```

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use sports_core::{SportStore, catalog::seed_set, seed::seed_all};
use sports_server::{ServerConfig, open_store, router, shutdown_signal};
use sports_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Sports catalog API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Seed the configured store with the default sports and exit.
  #[arg(long)]
  seed: bool,

  /// With `--seed`, delete every stored sport first.
  #[arg(long, requires = "seed")]
  reset: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("SPORTS"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  if cli.seed {
    return seed(&server_cfg, cli.reset).await;
  }

  let store = open_store(&server_cfg).await;
  let app = router(Arc::new(store), &server_cfg);
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;
  info!(
    "Listening on http://{address} (api prefix {:?})",
    server_cfg.api_prefix
  );

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

  info!("HTTP server closed");
  Ok(())
}

/// Helper mode: write the seed set into the configured store.
async fn seed(cfg: &ServerConfig, reset: bool) -> anyhow::Result<()> {
  let url = cfg
    .database_url()
    .context("database_url must be configured to seed")?;
  let store = SqliteStore::connect(url)
    .await
    .with_context(|| format!("failed to open store at {url:?}"))?;

  if reset {
    let removed = store.clear().await.context("failed to clear store")?;
    info!(removed, "cleared existing sports");
  }

  let inserted = seed_all(&store, seed_set())
    .await
    .context("failed to seed store")?;
  let total = store.count().await.context("failed to count sports")?;
  info!(inserted, total, "seeded successfully");
  Ok(())
}
