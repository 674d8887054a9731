//! Application state and key dispatch.

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use sports_core::{Sport, StoredSport};
use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::warn;

use crate::{
  client::ApiClient,
  fetch::{Fetch, HealthState},
};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Outcome of one round of fetches, one field per section.
struct Snapshot {
  health:        HealthState,
  static_sports: Fetch<Vec<Sport>>,
  stored_sports: Fetch<Vec<StoredSport>>,
}

impl Snapshot {
  /// Fetch all three endpoints concurrently. Never fails: each section
  /// records its own outcome.
  async fn fetch(client: &ApiClient) -> Self {
    let (health, static_sports, stored_sports) = tokio::join!(
      client.health_state(),
      client.static_sports(),
      client.stored_sports(),
    );
    Self { health, static_sports, stored_sports }
  }
}

/// Top-level application state.
pub struct App {
  pub health: HealthState,

  /// Result of `GET /api/sports`.
  pub static_sports: Fetch<Vec<Sport>>,

  /// Result of `GET /api/sports/db`.
  pub stored_sports: Fetch<Vec<StoredSport>>,

  /// Set while a refresh is requested or in flight; drives the spinner.
  pub loading: bool,

  pub last_refreshed: Option<DateTime<Local>>,

  client: ApiClient,

  /// Receives the result of the background refresh, if one is running.
  pending: Option<oneshot::Receiver<Snapshot>>,

  /// Advances once per tick while loading.
  spinner: usize,
}

impl App {
  /// Create an [`App`] with empty sections and a refresh already requested.
  pub fn new(client: ApiClient) -> Self {
    Self {
      health: HealthState::Unknown,
      static_sports: Fetch::Loaded(Vec::new()),
      stored_sports: Fetch::Loaded(Vec::new()),
      loading: true,
      last_refreshed: None,
      client,
      pending: None,
      spinner: 0,
    }
  }

  // ── Data loading ──────────────────────────────────────────────────────────

  /// Drive a requested refresh without blocking the caller.
  ///
  /// Called once per event-loop iteration. Starts a background refresh when
  /// one is requested and none is running, and applies its result once it
  /// has arrived.
  pub fn tick(&mut self) {
    if !self.loading {
      return;
    }
    self.spinner = self.spinner.wrapping_add(1);

    let Some(rx) = self.pending.as_mut() else {
      let (tx, rx) = oneshot::channel();
      let client = self.client.clone();
      tokio::spawn(async move {
        // The receiver is gone if the dashboard quit mid-refresh.
        let _ = tx.send(Snapshot::fetch(&client).await);
      });
      self.pending = Some(rx);
      return;
    };

    match rx.try_recv() {
      Ok(snapshot) => {
        self.pending = None;
        self.apply(snapshot);
      }
      Err(TryRecvError::Empty) => {}
      Err(TryRecvError::Closed) => {
        warn!("refresh task ended without a result");
        self.pending = None;
        self.loading = false;
      }
    }
  }

  /// Current spinner glyph, or blank when idle.
  pub fn spinner_frame(&self) -> &'static str {
    if self.loading { SPINNER[self.spinner % SPINNER.len()] } else { " " }
  }

  fn apply(&mut self, snapshot: Snapshot) {
    self.health = snapshot.health;
    self.static_sports = snapshot.static_sports;
    self.stored_sports = snapshot.stored_sports;
    self.last_refreshed = Some(Local::now());
    self.loading = false;
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub fn handle_key(&mut self, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return false;
    }

    match key.code {
      KeyCode::Char('q') | KeyCode::Esc => return false,
      KeyCode::Char('r') | KeyCode::F(5) => self.loading = true,
      _ => {}
    }
    true
  }
}
