//! `sports-dash` — terminal dashboard for the sports catalog API.
//!
//! # Usage
//!
//! ```
//! sports-dash --url http://localhost:5000
//! sports-dash --config ~/.config/sports/dash.toml --log-file dash.log
//! ```

mod app;
mod client;
mod fetch;
mod ui;

use std::{io, path::PathBuf, sync::Mutex, time::Duration};

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use client::{ApiClient, ApiConfig};
use crossterm::{
  event::{self, Event, KeyEventKind},
  execute,
  terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "sports-dash", about = "Terminal dashboard for the sports catalog API")]
struct Args {
  /// Path to a TOML config file (url).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Base URL of the sports server (default: http://localhost:5000).
  /// Requests go to `<url>/api/...`.
  #[arg(long, env = "SPORTS_URL")]
  url: Option<String>,

  /// Write tracing output to this file; the terminal is taken by the UI.
  #[arg(long, value_name = "FILE")]
  log_file: Option<PathBuf>,
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  url: String,
}

// ─── Logging ──────────────────────────────────────────────────────────────────

/// `RUST_LOG` if set, otherwise INFO, so fetch warnings reach `--log-file`.
fn log_filter() -> EnvFilter {
  EnvFilter::builder()
    .with_default_directive(LevelFilter::INFO.into())
    .from_env_lossy()
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();

  if let Some(path) = &args.log_file {
    let file = std::fs::File::create(path)
      .with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
      .with_env_filter(log_filter())
      .with_ansi(false)
      .with_writer(Mutex::new(file))
      .init();
  }

  // Load config file if provided.
  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flags override config file, which overrides defaults.
  let api_config = ApiConfig {
    base_url: args
      .url
      .or_else(|| (!file_cfg.url.is_empty()).then(|| file_cfg.url.clone()))
      .unwrap_or_else(|| "http://localhost:5000".to_string()),
  };

  let client = ApiClient::new(api_config)?;
  let mut app = App::new(client);

  // Set up the terminal.
  enable_raw_mode().context("enabling raw mode")?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend).context("creating terminal")?;

  // Run the event loop; restore terminal even on error.
  let run_result = run_event_loop(&mut terminal, &mut app);

  disable_raw_mode().ok();
  execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
  terminal.show_cursor().ok();

  run_result
}

// ─── Event loop ───────────────────────────────────────────────────────────────

fn run_event_loop(
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
  app: &mut App,
) -> Result<()> {
  loop {
    terminal.draw(|f| ui::draw(f, app)).context("drawing frame")?;

    // Starts or collects a background refresh; never waits on the network.
    app.tick();

    // Poll for an event, yielding control to tokio while waiting.
    let maybe_event = tokio::task::block_in_place(|| {
      if event::poll(Duration::from_millis(50))? {
        Ok::<_, io::Error>(Some(event::read()?))
      } else {
        Ok(None)
      }
    })?;

    if let Some(Event::Key(key)) = maybe_event
      && key.kind == KeyEventKind::Press
      && !app.handle_key(key)
    {
      break;
    }
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_log_filter_keeps_warnings() {
    // An explicit RUST_LOG takes precedence over the default.
    if std::env::var_os("RUST_LOG").is_some() {
      return;
    }
    assert_eq!(log_filter().max_level_hint(), Some(LevelFilter::INFO));
  }
}
