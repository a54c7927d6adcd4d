//! Generic resource listing: one fetch, one render, one print.
//!
//! Every subcommand shares this implementation; the dispatching code supplies
//! the resource spec that names the endpoint path and the column schema.

use anyhow::{Context, Result};
use clap::Args;

use fitdash_core::ResourceEndpoint;
use fitdash_core::config::server_base_url;
use fitdash_core::fetch::{self, DEFAULT_TIMEOUT_SECS};
use fitdash_core::lifecycle::LifecycleState;
use fitdash_core::render::{RenderedView, render};
use fitdash_core::resource::ResourceSpec;

/// Common arguments for every resource subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Base URL of the API host (overrides `FITDASH_SERVER`)
    #[arg(short, long)]
    server: Option<String>,

    /// Output the normalized records as pretty JSON
    #[arg(long)]
    json: bool,
}

/// Fetch one resource collection and print it.
///
/// A view lifetime in miniature: one activation, one fetch, one rendering.
/// A failed fetch propagates with context, which the caller prints to stderr
/// before exiting non-zero.
pub fn execute(spec: &'static ResourceSpec, args: ListArgs) -> Result<()> {
    let base = server_base_url(args.server.as_deref());
    let endpoint = ResourceEndpoint::new(base, spec.path);
    let client = fetch::blocking_client(DEFAULT_TIMEOUT_SECS).context("build HTTP client")?;

    let records = fetch::fetch_records_blocking(&client, &endpoint.url())
        .with_context(|| format!("fetch {}", spec.name))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    // A successful fetch always renders as a table.
    let state = LifecycleState::Success { records };
    if let RenderedView::Table { headers, rows } = render(spec, &state) {
        if rows.is_empty() {
            println!("No {} found", spec.name);
        } else {
            print_table(&headers, &rows);
        }
    }

    Ok(())
}

/// Print headers and rows as aligned plain-text columns.
fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let widths = column_widths(headers, rows);
    println!("{}", format_row(headers, &widths));
    for row in rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        println!("{}", format_row(&cells, &widths));
    }
}

/// Per-column width: widest of the header and every cell in that column.
fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            rows.iter()
                .map(|row| row.get(idx).map_or(0, |cell| cell.chars().count()))
                .max()
                .unwrap_or(0)
                .max(header.chars().count())
        })
        .collect()
}

/// One aligned line: cells padded to their column width, two spaces between
/// columns, last column unpadded.
fn format_row(cells: &[&str], widths: &[usize]) -> String {
    let mut line = String::new();
    for (idx, cell) in cells.iter().enumerate() {
        if idx + 1 == cells.len() {
            line.push_str(cell);
        } else {
            let width = widths[idx];
            line.push_str(&format!("{cell:<width$}"));
            line.push_str("  ");
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_widths_cover_headers_and_cells() {
        let headers = ["Name", "N"];
        let rows = vec![
            vec!["Alpha Team".to_string(), "3".to_string()],
            vec!["B".to_string(), "12".to_string()],
        ];
        assert_eq!(column_widths(&headers, &rows), vec![10, 2]);
    }

    #[test]
    fn test_column_widths_empty_rows_use_headers() {
        let headers = ["Name", "Members"];
        assert_eq!(column_widths(&headers, &[]), vec![4, 7]);
    }

    #[test]
    fn test_format_row_pads_all_but_last() {
        let widths = vec![5, 3];
        assert_eq!(format_row(&["ab", "c"], &widths), "ab     c");
    }

    #[test]
    fn test_format_row_single_cell_unpadded() {
        let widths = vec![5];
        assert_eq!(format_row(&["ab"], &widths), "ab");
    }
}
