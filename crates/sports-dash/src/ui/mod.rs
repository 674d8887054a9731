//! TUI rendering — orchestrates all regions.

pub mod catalog;

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Paragraph},
};

use crate::app::App;

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, app: &App) {
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1),      // header
      Constraint::Percentage(50), // static catalog
      Constraint::Min(0),         // stored catalog
      Constraint::Length(1),      // status bar
    ])
    .split(f.area());

  draw_header(f, rows[0], app);
  catalog::draw_static(f, rows[1], &app.static_sports);
  catalog::draw_stored(f, rows[2], &app.stored_sports);
  draw_status(f, rows[3], app);
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
  let title = Span::styled(
    " Sports Analytics",
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );

  let badge_style = if app.health.is_ok() {
    Style::default().fg(Color::Black).bg(Color::Green)
  } else {
    Style::default().fg(Color::White).bg(Color::Red)
  };
  let badge = Span::styled(
    format!(" API Health: {} ", app.health.label()),
    badge_style.add_modifier(Modifier::BOLD),
  );

  let spinner = Span::styled(
    format!(" {} ", app.spinner_frame()),
    Style::default().fg(Color::Cyan),
  );

  // Title on the left, badge and spinner on the right.
  let left_width = title.content.chars().count() as u16;
  let right_width =
    (badge.content.chars().count() + spinner.content.chars().count()) as u16;
  let pad = area
    .width
    .saturating_sub(left_width)
    .saturating_sub(right_width);

  let line = Line::from(vec![
    title,
    Span::raw(" ".repeat(pad as usize)),
    badge,
    spinner,
  ]);

  let block = Block::default().style(Style::default().bg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(line), inner);
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let (mode_label, detail) = if app.loading {
    ("LOADING", "Fetching /api/health, /api/sports, /api/sports/db…".to_string())
  } else {
    let when = app
      .last_refreshed
      .map(|t| t.format("%H:%M:%S").to_string())
      .unwrap_or_else(|| "never".to_string());
    ("READY", format!("r refresh  q quit  last refresh {when}"))
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );
  let detail_span = Span::styled(
    format!("  {detail}"),
    Style::default().fg(Color::DarkGray),
  );

  f.render_widget(
    Paragraph::new(Line::from(vec![mode_span, detail_span]))
      .style(Style::default().bg(Color::Black)),
    area,
  );
}
