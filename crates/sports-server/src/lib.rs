//! HTTP server assembly for the sports catalog.
//!
//! Wraps [`sports_api::api_router`] with the outer concerns: mounting under a
//! path prefix, CORS, request tracing, the 404 fallback, store bootstrap and
//! graceful shutdown.

use std::sync::Arc;

use axum::{
  Router,
  http::{Method, header::CONTENT_TYPE},
};
use serde::Deserialize;
use sports_core::SportStore;
use sports_store_sqlite::SqliteStore;
use tokio::signal;
use tower_http::{
  cors::{Any, CorsLayer},
  trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{Level, error, info, warn};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `SPORTS_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:         String,
  #[serde(default = "default_port")]
  pub port:         u16,
  /// Path the API is mounted under. Empty or `/` mounts it at the root.
  #[serde(default = "default_api_prefix")]
  pub api_prefix:   String,
  /// Store connection string; see [`SqliteStore::connect`].
  #[serde(default)]
  pub database_url: Option<String>,
}

fn default_host() -> String { "0.0.0.0".to_string() }

fn default_port() -> u16 { 5000 }

fn default_api_prefix() -> String { "/api".to_string() }

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:         default_host(),
      port:         default_port(),
      api_prefix:   default_api_prefix(),
      database_url: None,
    }
  }
}

impl ServerConfig {
  /// The configured database URL, treating an empty string as unset.
  pub fn database_url(&self) -> Option<&str> {
    self.database_url.as_deref().filter(|url| !url.trim().is_empty())
  }

  /// `api_prefix` as an axum nest path, or `None` for the root.
  fn nest_path(&self) -> Option<String> {
    let trimmed = self.api_prefix.trim().trim_matches('/');
    (!trimmed.is_empty()).then(|| format!("/{trimmed}"))
  }
}

// ─── Store bootstrap ──────────────────────────────────────────────────────────

/// Connect to the configured store.
///
/// Never fails: a missing or unusable `database_url` yields a disconnected
/// store, which only degrades `/sports/db` to 503.
pub async fn open_store(config: &ServerConfig) -> SqliteStore {
  let Some(url) = config.database_url() else {
    warn!("no database_url configured; /sports/db will answer 503");
    return SqliteStore::disconnected();
  };

  match SqliteStore::connect(url).await {
    Ok(store) => store,
    Err(e) => {
      error!(error = %e, url, "failed to open store; continuing without it");
      SqliteStore::disconnected()
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

fn cors_layer() -> CorsLayer {
  CorsLayer::new()
    .allow_origin(Any)
    .allow_methods([Method::GET, Method::OPTIONS])
    .allow_headers([CONTENT_TYPE])
}

/// Build the full application router for `store`.
pub fn router<S>(store: Arc<S>, config: &ServerConfig) -> Router
where
  S: SportStore + 'static,
{
  let api = sports_api::api_router(store);
  let app = match config.nest_path() {
    Some(prefix) => Router::new().nest(&prefix, api),
    None => api,
  };

  // Request and response lines go out at INFO so the default filter shows them.
  let trace = TraceLayer::new_for_http()
    .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
    .on_request(DefaultOnRequest::new().level(Level::INFO))
    .on_response(DefaultOnResponse::new().level(Level::INFO));

  app
    .fallback(sports_api::not_found)
    .layer(cors_layer())
    .layer(trace)
}

// ─── Shutdown ─────────────────────────────────────────────────────────────────

/// Resolves on Ctrl-C, or SIGTERM on unix.
pub async fn shutdown_signal() {
  let ctrl_c = async {
    match signal::ctrl_c().await {
      Ok(()) => info!("received Ctrl+C, shutting down"),
      Err(e) => {
        error!(error = %e, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
      Ok(mut sig) => {
        sig.recv().await;
        info!("received SIGTERM, shutting down");
      }
      Err(e) => {
        error!(error = %e, "failed to install SIGTERM handler");
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    _ = ctrl_c => {},
    _ = terminate => {},
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
  };
  use tower::ServiceExt as _;

  fn config_with_prefix(prefix: &str) -> ServerConfig {
    ServerConfig { api_prefix: prefix.to_string(), ..ServerConfig::default() }
  }

  async fn oneshot(config: &ServerConfig, uri: &str) -> Response {
    let store = Arc::new(SqliteStore::open_in_memory().await.unwrap());
    let req = Request::builder()
      .uri(uri)
      .header(header::ORIGIN, "http://localhost:5173")
      .body(Body::empty())
      .unwrap();
    router(store, config).oneshot(req).await.unwrap()
  }

  async fn body_json(resp: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    serde_json::from_slice(&bytes).unwrap()
  }

  #[tokio::test]
  async fn api_is_served_under_prefix() {
    let config = ServerConfig::default();

    let resp = oneshot(&config, "/api/health").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = oneshot(&config, "/api/sports/db").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = oneshot(&config, "/health").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn empty_prefix_mounts_at_root() {
    for prefix in ["", "/"] {
      let config = config_with_prefix(prefix);
      let resp = oneshot(&config, "/sports").await;
      assert_eq!(resp.status(), StatusCode::OK, "prefix {prefix:?}");
    }
  }

  #[tokio::test]
  async fn prefix_slashes_are_normalised() {
    let config = config_with_prefix("api/");
    let resp = oneshot(&config, "/api/sports").await;
    assert_eq!(resp.status(), StatusCode::OK);
  }

  #[tokio::test]
  async fn unknown_route_returns_json_404() {
    let resp = oneshot(&ServerConfig::default(), "/api/nope").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
      body_json(resp).await,
      serde_json::json!({ "error": "Route not found" })
    );
  }

  #[tokio::test]
  async fn cors_allows_any_origin() {
    let resp = oneshot(&ServerConfig::default(), "/api/health").await;
    let allow = resp
      .headers()
      .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
      .unwrap();
    assert_eq!(allow, "*");
  }

  /// Shared buffer that a test subscriber writes formatted events into.
  #[derive(Clone, Default)]
  struct LogBuffer(Arc<std::sync::Mutex<Vec<u8>>>);

  impl std::io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
      self.0.lock().unwrap().extend_from_slice(buf);
      Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
  }

  #[tokio::test]
  async fn requests_are_logged_at_info() {
    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
      .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
      .with_ansi(false)
      .with_writer(move || writer.clone())
      .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let resp = oneshot(&ServerConfig::default(), "/api/sports").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("/api/sports"), "log: {output}");
    assert!(output.contains("finished processing request"), "log: {output}");
  }

  #[tokio::test]
  async fn open_store_without_url_is_disconnected() {
    let store = open_store(&ServerConfig::default()).await;
    assert!(!store.is_ready());

    let config = ServerConfig {
      database_url: Some("  ".to_string()),
      ..ServerConfig::default()
    };
    assert!(!open_store(&config).await.is_ready());
  }

  #[tokio::test]
  async fn open_store_with_memory_url_is_ready() {
    let config = ServerConfig {
      database_url: Some(":memory:".to_string()),
      ..ServerConfig::default()
    };
    assert!(open_store(&config).await.is_ready());
  }

  #[tokio::test]
  async fn unopenable_store_degrades_to_503() {
    let config = ServerConfig {
      database_url: Some("/nonexistent-dir/for/sure/sports.db".to_string()),
      ..ServerConfig::default()
    };
    let store = Arc::new(open_store(&config).await);
    assert!(!store.is_ready());

    let req = Request::builder()
      .uri("/api/sports/db")
      .body(Body::empty())
      .unwrap();
    let resp = router(store, &config).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
  }
}
