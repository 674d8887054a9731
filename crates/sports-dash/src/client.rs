//! Async HTTP client wrapping the sports JSON API.

use anyhow::{Context, Result, anyhow};
use reqwest::Client;
use serde::de::DeserializeOwned;
use sports_core::{HealthReport, Sport, StoredSport};
use std::time::Duration;
use tracing::warn;

use crate::fetch::{Fetch, HealthState};

/// Connection settings for the sports API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
}

/// Async HTTP client for the sports JSON REST API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!(
      "{}/api{}",
      self.config.base_url.trim_end_matches('/'),
      path
    )
  }

  async fn get_json(&self, path: &str) -> Result<serde_json::Value> {
    let resp = self
      .client
      .get(self.url(path))
      .send()
      .await
      .with_context(|| format!("GET {path} failed"))?;

    if !resp.status().is_success() {
      return Err(anyhow!("GET {path} → {}", resp.status()));
    }
    resp
      .json()
      .await
      .with_context(|| format!("GET {path}: body is not JSON"))
  }

  async fn fetch_list<T: DeserializeOwned>(&self, path: &str) -> Fetch<Vec<T>> {
    match self.get_json(path).await {
      Ok(body) => {
        let fetch = Fetch::from_json_array(body);
        if let Some(reason) = fetch.failure() {
          warn!(path, reason, "discarding malformed response");
        }
        fetch
      }
      Err(e) => {
        let reason = format!("{e:#}");
        warn!(path, error = %reason, "fetch failed");
        Fetch::Failed(reason)
      }
    }
  }

  // ── Endpoints ─────────────────────────────────────────────────────────────

  /// `GET /api/health`
  pub async fn health(&self) -> Result<HealthReport> {
    let body = self.get_json("/health").await?;
    serde_json::from_value(body).context("deserialising health report")
  }

  /// `GET /api/health`, collapsing every failure to [`HealthState::Down`].
  pub async fn health_state(&self) -> HealthState {
    match self.health().await {
      Ok(report) => HealthState::Reported(report),
      Err(e) => {
        warn!(error = ?e, "health check failed");
        HealthState::Down
      }
    }
  }

  /// `GET /api/sports`
  pub async fn static_sports(&self) -> Fetch<Vec<Sport>> {
    self.fetch_list("/sports").await
  }

  /// `GET /api/sports/db`
  pub async fn stored_sports(&self) -> Fetch<Vec<StoredSport>> {
    self.fetch_list("/sports/db").await
  }
}
