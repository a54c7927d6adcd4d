//! Pure rendering of lifecycle state.
//!
//! [`render`] maps a view's current state onto a plain display value with no
//! side effects. The terminal dashboard and the CLI take that value and draw
//! it with their own widgets or stdout formatting; neither re-derives a cell.

use chrono::{DateTime, Local, NaiveDate};
use serde_json::Value;

use crate::lifecycle::LifecycleState;
use crate::normalize::Record;
use crate::resource::{CellKind, ColumnSpec, ResourceSpec};

/// What one view displays right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedView {
    /// Retrieval still in progress.
    Loading { message: String },
    /// Retrieval failed; the message is surfaced verbatim after a fixed
    /// error prefix.
    Failed { message: String },
    /// Rows ready for tabular display, one cell per column per record.
    Table { headers: Vec<&'static str>, rows: Vec<Vec<String>> },
}

/// Map a lifecycle state onto its display form.
///
/// Idempotent: the same state renders the same value every time.
pub fn render(resource: &ResourceSpec, state: &LifecycleState) -> RenderedView {
    match state {
        LifecycleState::Loading => RenderedView::Loading {
            message: format!("Loading {}...", resource.name),
        },
        LifecycleState::Error { message } => RenderedView::Failed {
            message: format!("Error: {message}"),
        },
        LifecycleState::Success { records } => RenderedView::Table {
            headers: resource.columns.iter().map(|column| column.header).collect(),
            rows: records.iter().map(|record| row_cells(resource, record)).collect(),
        },
    }
}

/// Cells for one record, one per column, with fallbacks applied.
fn row_cells(resource: &ResourceSpec, record: &Record) -> Vec<String> {
    resource.columns.iter().map(|column| cell_text(record, column)).collect()
}

/// Render one field of one record per the column's kind.
///
/// `Record::get` returns `None` for non-object records, so malformed list
/// members degrade to a row of fallbacks rather than a failure.
fn cell_text(record: &Record, column: &ColumnSpec) -> String {
    let value = record.get(column.field);
    match (column.kind, value) {
        (CellKind::Text { fallback }, None | Some(Value::Null)) => fallback.to_string(),
        (CellKind::Text { .. }, Some(Value::String(text))) => text.clone(),
        (CellKind::Text { .. }, Some(other)) => other.to_string(),

        (CellKind::Number, None | Some(Value::Null)) => "0".to_string(),
        (CellKind::Number, Some(Value::Number(number))) => number.to_string(),
        (CellKind::Number, Some(Value::String(text))) => text.clone(),
        (CellKind::Number, Some(other)) => other.to_string(),

        (CellKind::Date, None | Some(Value::Null)) => String::new(),
        (CellKind::Date, Some(Value::String(raw))) => local_date(raw),
        (CellKind::Date, Some(other)) => other.to_string(),
    }
}

/// Format an ISO-8601 instant (or bare date) as a local calendar date.
///
/// Instants are converted to the viewer's timezone before the date is taken.
/// Values that parse as neither render verbatim.
fn local_date(raw: &str) -> String {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return instant.with_timezone(&Local).format("%Y-%m-%d").to_string();
    }
    if let Ok(day) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return day.format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}
