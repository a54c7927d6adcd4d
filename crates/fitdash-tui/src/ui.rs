//! Ratatui layout and widget rendering for the fitdash TUI.
//!
//! The layout is a single column: header, tab bar, resource body, status bar.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │ fitdash  │  Teams                                                │ header
//! │ 1 Teams │ 2 Users │ 3 Activities │ 4 Leaderboard │ 5 Workouts    │ tabs
//! ├──────────────────────────────────────────────────────────────────┤
//! │ NAME    DESCRIPTION       MEMBERS  CREATED                       │
//! │ Alpha   morning runners   3        2024-01-05                    │ body
//! │ ...                                                              │
//! ├──────────────────────────────────────────────────────────────────┤
//! │ q: quit  Tab: switch  1-5: jump  r: reload  ↑↓: row  server: ..  │ status
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The body is a straight mapping of the core's rendered representation:
//! loading and error states become styled paragraphs, a resolved table
//! becomes a [`Table`] widget with the row cursor highlighted. No cell value
//! is derived here.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState, Tabs},
};

use fitdash_core::lifecycle::LifecycleState;
use fitdash_core::render::{RenderedView, render};

use crate::app::App;

/// Longest cell width the table will allocate to a single column.
const MAX_COLUMN_WIDTH: usize = 40;

/// Render the full TUI frame from current [`App`] state.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(1), // tab bar
            Constraint::Min(0),    // body
            Constraint::Length(1), // status bar
        ])
        .split(area);

    draw_header(frame, outer[0], app);
    draw_tabs(frame, outer[1], app);
    draw_body(frame, outer[2], app);
    draw_status_bar(frame, outer[3], app);
}

// ── Header ────────────────────────────────────────────────────────────────────

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let text = Line::from(vec![
        Span::styled(
            " fitdash ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" {}", app.active().resource.title)),
    ]);
    frame.render_widget(Paragraph::new(text), area);
}

// ── Tab bar ───────────────────────────────────────────────────────────────────

fn draw_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = app
        .tabs
        .iter()
        .enumerate()
        .map(|(idx, tab)| Line::from(format!(" {} {} ", idx + 1, tab.resource.title)))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.active_tab)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

// ── Body ──────────────────────────────────────────────────────────────────────

fn draw_body(frame: &mut Frame, area: Rect, app: &App) {
    let tab = app.active();
    // A not-yet-activated tab is about to activate on this very tick; it
    // renders exactly like a fresh Loading state.
    let rendered = match tab.view.as_ref() {
        Some(view) => render(view.resource(), view.state()),
        None => render(tab.resource, &LifecycleState::Loading),
    };

    let block = Block::default()
        .title(format!(" {} ", tab.resource.title))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    match rendered {
        RenderedView::Loading { message } => {
            frame.render_widget(
                Paragraph::new(message)
                    .block(block)
                    .style(Style::default().fg(Color::DarkGray)),
                area,
            );
        }
        RenderedView::Failed { message } => {
            frame.render_widget(
                Paragraph::new(message)
                    .block(block)
                    .style(Style::default().fg(Color::Red)),
                area,
            );
        }
        RenderedView::Table { headers, rows } => {
            if rows.is_empty() {
                frame.render_widget(
                    Paragraph::new("(no records)")
                        .block(block)
                        .style(Style::default().fg(Color::DarkGray)),
                    area,
                );
                return;
            }

            let header = Row::new(headers.iter().map(|h| Cell::from(*h)))
                .style(Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED));
            let body: Vec<Row> = rows
                .iter()
                .map(|cells| Row::new(cells.iter().map(|c| Cell::from(c.as_str()))))
                .collect();

            let table = Table::new(body, column_widths(&headers, &rows))
                .header(header)
                .block(block)
                .row_highlight_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                );

            let mut state = TableState::default();
            state.select(Some(tab.cursor));
            frame.render_stateful_widget(table, area, &mut state);
        }
    }
}

/// One length constraint per column: widest of header and cells, capped.
fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<Constraint> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            let widest_cell = rows
                .iter()
                .map(|row| row.get(idx).map_or(0, |cell| cell.chars().count()))
                .max()
                .unwrap_or(0);
            let width = header.chars().count().max(widest_cell).min(MAX_COLUMN_WIDTH);
            Constraint::Length(width.max(1) as u16)
        })
        .collect()
}

// ── Status bar ────────────────────────────────────────────────────────────────

fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let key_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let text = if let Some(ref msg) = app.status_message {
        Line::from(vec![
            Span::styled(" • ", Style::default().fg(Color::Yellow)),
            Span::raw(msg.as_str()),
        ])
    } else {
        Line::from(vec![
            Span::styled(" q", key_style),
            Span::raw(": quit  "),
            Span::styled("Tab", key_style),
            Span::raw(": switch  "),
            Span::styled("1-5", key_style),
            Span::raw(": jump  "),
            Span::styled("r", key_style),
            Span::raw(": reload  "),
            Span::styled("↑↓", key_style),
            Span::raw(": row  "),
            Span::raw(format!("server: {}", app.server)),
        ])
    };
    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(Color::DarkGray)),
        area,
    );
}
