//! Tabbed terminal dashboard for team fitness resources.
//!
//! # Usage
//!
//! ```text
//! FITDASH_SERVER=http://localhost:8000 fitdash-tui
//! fitdash-tui --server http://localhost:8000
//! ```
//!
//! # Key bindings
//!
//! | Key | Action |
//! |-----|--------|
//! | `q` / `Esc` / `Ctrl-C` | Quit |
//! | `Tab` / `BackTab` | Next / previous resource tab |
//! | `1`–`5` | Jump to tab |
//! | `r` | Reload the current tab |
//! | `↑` / `↓` | Move the row cursor |
//!
//! # Architecture
//!
//! The main loop drives a 100 ms ticker. On every iteration it:
//! 1. Redraws the terminal frame from current [`App`] state.
//! 2. Activates the visible tab's view on its first visit (each view
//!    instance fetches exactly once over its lifetime).
//! 3. Replaces the active view when a reload was requested; the old
//!    instance's pending outcome, if any, is discarded with it.
//! 4. Polls every in-flight view for its single lifecycle transition.
//! 5. Handles any pending input event with a non-blocking poll.

mod app;
mod config;
mod events;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::time::interval;

use fitdash_core::{config::server_base_url, fetch, logging};

use app::App;
use config::{TuiConfig, load_tui_config};

// ── CLI ───────────────────────────────────────────────────────────────────────

/// Tabbed live dashboard over the team fitness API.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Base URL of the API host (overrides `FITDASH_SERVER`).
    #[arg(short, long)]
    pub server: Option<String>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();
    let server = server_base_url(cli.server.as_deref());

    // Load user preferences before terminal setup so parse warnings go to stderr.
    let config = load_tui_config();

    // Set up terminal
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let result = run_app(&mut terminal, server, config).await;

    // Restore terminal on exit (even on error)
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    if let Err(ref e) = result {
        eprintln!("fitdash-tui error: {e:#}");
    }

    result
}

// ── Application loop ──────────────────────────────────────────────────────────

/// Run the TUI until the user quits.
///
/// # Errors
///
/// Returns an error on unrecoverable terminal I/O failures.
async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    server: String,
    config: TuiConfig,
) -> Result<()> {
    let client = fetch::async_client(config.request_timeout_secs).context("build HTTP client")?;
    let mut app = App::new(server, config, client);
    if app.config.eager_load {
        app.activate_all();
    }

    let mut tick = interval(Duration::from_millis(100));

    loop {
        // ── Draw ──────────────────────────────────────────────────────────────
        terminal.draw(|f| ui::draw(f, &app))?;

        // ── View activation / reload ──────────────────────────────────────────
        app.ensure_active_view();
        if app.take_reload_request() {
            app.reload_active();
        }

        // ── Pending resolutions ───────────────────────────────────────────────
        app.poll_views();

        // ── Input event handling ──────────────────────────────────────────────
        if event::poll(Duration::from_millis(0))? {
            let ev = event::read()?;
            if events::handle_event(&ev, &mut app) || app.should_quit {
                break;
            }
        }

        // ── Tick ──────────────────────────────────────────────────────────────
        tick.tick().await;
    }

    Ok(())
}
