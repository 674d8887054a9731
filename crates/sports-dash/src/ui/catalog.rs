//! Catalog regions — the static list and the stored list.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use sports_core::{Sport, StoredSport};

use crate::fetch::Fetch;

/// Render the `GET /api/sports` region.
pub fn draw_static(f: &mut Frame, area: Rect, fetch: &Fetch<Vec<Sport>>) {
  draw_section(
    f,
    area,
    " Public Directory (Static) ",
    Color::Blue,
    fetch,
    "No static data available. Is /api/sports returning an array?",
    |sport| sport_line(sport, "static", Color::Blue, None),
  );
}

/// Render the `GET /api/sports/db` region.
pub fn draw_stored(f: &mut Frame, area: Rect, fetch: &Fetch<Vec<StoredSport>>) {
  draw_section(
    f,
    area,
    " Stored Records (Database) ",
    Color::Magenta,
    fetch,
    "Database empty / not loaded. Check the store and confirm /api/sports/db \
     returns an array.",
    |stored| {
      sport_line(&stored.sport, "stored", Color::Magenta, Some(stored.id.to_string()))
    },
  );
}

fn draw_section<T>(
  f: &mut Frame,
  area: Rect,
  title: &str,
  accent: Color,
  fetch: &Fetch<Vec<T>>,
  empty_text: &str,
  to_line: impl Fn(&T) -> Line<'static>,
) {
  let items = fetch.items();
  let block = Block::default()
    .title(format!("{title}({}) ", items.len()))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(accent));

  if items.is_empty() {
    let mut lines = vec![Line::from(Span::styled(
      empty_text.to_string(),
      Style::default().fg(Color::Red),
    ))];
    if let Some(reason) = fetch.failure() {
      lines.push(Line::from(Span::styled(
        reason.to_string(),
        Style::default().fg(Color::DarkGray),
      )));
    }
    f.render_widget(
      Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
      area,
    );
    return;
  }

  let list: Vec<ListItem> = items.iter().map(|item| ListItem::new(to_line(item))).collect();
  f.render_widget(List::new(list).block(block), area);
}

fn sport_line(
  sport: &Sport,
  tag: &'static str,
  accent: Color,
  id: Option<String>,
) -> Line<'static> {
  let mut spans = vec![
    Span::styled(
      format!(" {:<20}", sport.name),
      Style::default().add_modifier(Modifier::BOLD),
    ),
    Span::styled(
      format!("{:>3} players  ", sport.players),
      Style::default().fg(Color::Gray),
    ),
    Span::styled(format!("[{tag}]"), Style::default().fg(accent)),
  ];
  if let Some(id) = id {
    spans.push(Span::styled(
      format!("  id: {id}"),
      Style::default().fg(Color::DarkGray),
    ));
  }
  Line::from(spans)
}
