//! Application state for the fitdash TUI.
//!
//! [`App`] is the single source of mutable state: one [`TabState`] per
//! resource, the active tab index, and transient status. The event handler
//! mutates it; the main loop drives activation and polling; `ui` renders it.

use fitdash_core::lifecycle::LifecycleState;
use fitdash_core::resource::{self, ResourceSpec};
use fitdash_core::view::CollectionView;
use fitdash_core::ResourceEndpoint;

use crate::config::TuiConfig;

/// One dashboard tab: a resource plus its (lazily created) view instance.
pub struct TabState {
    /// Static schema for the resource shown in this tab.
    pub resource: &'static ResourceSpec,
    /// Live view instance. `None` until the tab is first visited (or until
    /// startup when `eager_load` is set).
    pub view: Option<CollectionView>,
    /// Row cursor within the rendered table. Reset on (re)activation and
    /// clamped whenever the view resolves.
    pub cursor: usize,
}

/// Top-level application state.
///
/// Owned by the main event loop. Access is single-threaded; view resolution
/// arrives through each view's own channel and is applied by [`poll_views`].
///
/// [`poll_views`]: App::poll_views
pub struct App {
    /// Base URL of the API host (already resolved from flag/environment).
    pub server: String,
    /// One tab per resource, in [`resource::ALL`] order.
    pub tabs: Vec<TabState>,
    /// Index into [`tabs`](Self::tabs) of the tab currently shown.
    pub active_tab: usize,
    /// Set to `true` to exit the event loop on the next iteration.
    pub should_quit: bool,
    /// Set by the event handler; consumed by the main loop, which replaces
    /// the active tab's view with a fresh activation.
    pub reload_requested: bool,
    /// Transient message shown in the status bar; cleared when the active
    /// tab's view resolves.
    pub status_message: Option<String>,
    /// User preferences loaded from `~/.config/fitdash/tui.toml` at startup.
    pub config: TuiConfig,
    client: reqwest::Client,
}

impl App {
    /// Create an [`App`] with one unactivated tab per resource.
    pub fn new(server: String, config: TuiConfig, client: reqwest::Client) -> Self {
        let tabs = resource::ALL
            .iter()
            .copied()
            .map(|spec| TabState { resource: spec, view: None, cursor: 0 })
            .collect();
        Self {
            server,
            tabs,
            active_tab: 0,
            should_quit: false,
            reload_requested: false,
            status_message: None,
            config,
            client,
        }
    }

    /// The tab currently shown.
    pub fn active(&self) -> &TabState {
        &self.tabs[self.active_tab]
    }

    // ── Tab navigation ────────────────────────────────────────────────────────

    /// Switch to the next tab (wraps).
    pub fn next_tab(&mut self) {
        self.active_tab = (self.active_tab + 1) % self.tabs.len();
    }

    /// Switch to the previous tab (wraps).
    pub fn previous_tab(&mut self) {
        if self.active_tab == 0 {
            self.active_tab = self.tabs.len() - 1;
        } else {
            self.active_tab -= 1;
        }
    }

    /// Switch directly to the tab at `index`. Out-of-range indices are ignored.
    pub fn jump_to_tab(&mut self, index: usize) {
        if index < self.tabs.len() {
            self.active_tab = index;
        }
    }

    // ── View activation ───────────────────────────────────────────────────────

    /// Activate the active tab's view if it has not been activated yet.
    ///
    /// Called once per loop iteration, so a tab fetches on first visit and
    /// never again for the lifetime of that view instance.
    pub fn ensure_active_view(&mut self) {
        if self.tabs[self.active_tab].view.is_none() {
            self.activate_tab(self.active_tab);
        }
    }

    /// Activate every tab that has no view yet. Used at startup when
    /// `eager_load` is enabled.
    pub fn activate_all(&mut self) {
        for index in 0..self.tabs.len() {
            if self.tabs[index].view.is_none() {
                self.activate_tab(index);
            }
        }
    }

    /// Replace the active tab's view with a fresh activation.
    ///
    /// Dropping the old instance discards any outcome still in flight for it.
    pub fn reload_active(&mut self) {
        self.activate_tab(self.active_tab);
        self.status_message =
            Some(format!("Reloading {}...", self.tabs[self.active_tab].resource.name));
    }

    fn activate_tab(&mut self, index: usize) {
        let tab = &mut self.tabs[index];
        let endpoint = ResourceEndpoint::new(self.server.as_str(), tab.resource.path);
        tab.view = Some(CollectionView::activate(tab.resource, endpoint, self.client.clone()));
        tab.cursor = 0;
    }

    /// Consume a pending reload request, if any.
    pub fn take_reload_request(&mut self) -> bool {
        std::mem::take(&mut self.reload_requested)
    }

    // ── Per-tick resolution ───────────────────────────────────────────────────

    /// Poll every in-flight view once and apply any resolutions that landed.
    ///
    /// When a view resolves, its tab's cursor is clamped to the new row count,
    /// and the status message is cleared if it was the active tab.
    pub fn poll_views(&mut self) {
        for index in 0..self.tabs.len() {
            let Some(view) = self.tabs[index].view.as_mut() else {
                continue;
            };
            if !view.poll() {
                continue;
            }
            let rows = match view.state() {
                LifecycleState::Success { records } => records.len(),
                _ => 0,
            };
            let tab = &mut self.tabs[index];
            tab.cursor = if rows == 0 { 0 } else { tab.cursor.min(rows - 1) };
            if index == self.active_tab {
                self.status_message = None;
            }
        }
    }

    // ── Row cursor ────────────────────────────────────────────────────────────

    /// Number of rows in the active tab's resolved table (0 unless Success).
    pub fn active_row_count(&self) -> usize {
        match self.active().view.as_ref().map(CollectionView::state) {
            Some(LifecycleState::Success { records }) => records.len(),
            _ => 0,
        }
    }

    /// Move the row cursor up one row (wraps). No-op without rows.
    pub fn cursor_up(&mut self) {
        let rows = self.active_row_count();
        if rows == 0 {
            return;
        }
        let tab = &mut self.tabs[self.active_tab];
        tab.cursor = if tab.cursor == 0 { rows - 1 } else { tab.cursor - 1 };
    }

    /// Move the row cursor down one row (wraps). No-op without rows.
    pub fn cursor_down(&mut self) {
        let rows = self.active_row_count();
        if rows == 0 {
            return;
        }
        let tab = &mut self.tabs[self.active_tab];
        tab.cursor = (tab.cursor + 1) % rows;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitdash_core::resource::TEAMS;
    use serde_json::json;

    fn new_app() -> App {
        App::new(
            "http://127.0.0.1:1".to_string(),
            TuiConfig::default(),
            reqwest::Client::new(),
        )
    }

    /// Drive a controlled view through its transition.
    async fn resolved_view(records: Vec<serde_json::Value>) -> CollectionView {
        let mut view = CollectionView::activate_with(&TEAMS, async move { Ok(records) });
        for _ in 0..1000 {
            if view.poll() {
                return view;
            }
            tokio::task::yield_now().await;
        }
        panic!("controlled view never resolved");
    }

    #[test]
    fn test_tabs_cover_every_resource() {
        let app = new_app();
        assert_eq!(app.tabs.len(), 5);
        assert_eq!(app.tabs[0].resource.name, "teams");
        assert_eq!(app.tabs[1].resource.name, "users");
    }

    #[test]
    fn test_next_tab_wraps() {
        let mut app = new_app();
        app.active_tab = app.tabs.len() - 1;
        app.next_tab();
        assert_eq!(app.active_tab, 0);
    }

    #[test]
    fn test_previous_tab_wraps() {
        let mut app = new_app();
        app.previous_tab();
        assert_eq!(app.active_tab, app.tabs.len() - 1);
    }

    #[test]
    fn test_jump_to_tab_ignores_out_of_range() {
        let mut app = new_app();
        app.jump_to_tab(1);
        assert_eq!(app.active_tab, 1);
        app.jump_to_tab(99);
        assert_eq!(app.active_tab, 1);
    }

    #[test]
    fn test_cursor_noop_without_view() {
        let mut app = new_app();
        app.cursor_down();
        app.cursor_up();
        assert_eq!(app.active().cursor, 0);
    }

    #[tokio::test]
    async fn test_ensure_active_view_activates_once() {
        let mut app = new_app();
        assert!(app.active().view.is_none());

        app.ensure_active_view();
        assert!(app.active().view.is_some(), "first visit must activate");

        // Park a resolved view in the slot. Later visits must leave it
        // untouched: a re-activation would reset the state to Loading.
        app.tabs[0].view = Some(resolved_view(vec![json!({"name": "Alpha"})]).await);
        app.ensure_active_view();
        app.next_tab();
        app.previous_tab();
        app.ensure_active_view();

        match app.active().view.as_ref().unwrap().state() {
            LifecycleState::Success { records } => assert_eq!(records.len(), 1),
            other => panic!("repeated visits must not re-activate, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_tab_switch_activates_lazily() {
        let mut app = new_app();
        app.ensure_active_view();
        assert!(app.tabs[1].view.is_none(), "unvisited tab must stay unactivated");

        app.next_tab();
        app.ensure_active_view();
        assert!(app.tabs[1].view.is_some());
    }

    #[tokio::test]
    async fn test_activate_all_covers_every_tab() {
        let mut app = new_app();
        app.activate_all();
        assert!(app.tabs.iter().all(|t| t.view.is_some()));
    }

    #[tokio::test]
    async fn test_reload_replaces_view_instance() {
        let mut app = new_app();
        app.tabs[0].view =
            Some(resolved_view(vec![json!({"name": "a"}), json!({"name": "b"})]).await);
        app.tabs[0].cursor = 1;

        app.reload_active();

        // A terminal state never reverts within one activation, so observing
        // Loading with a pending fetch proves a fresh instance took the slot.
        let view = app.active().view.as_ref().unwrap();
        assert_eq!(*view.state(), LifecycleState::Loading);
        assert!(view.in_flight());
        assert_eq!(app.active().cursor, 0, "reload must reset the cursor");
        assert!(app.status_message.is_some());
    }

    #[tokio::test]
    async fn test_poll_views_clamps_cursor_to_row_count() {
        let mut app = new_app();
        app.tabs[0].view = Some(
            CollectionView::activate_with(&TEAMS, async {
                Ok(vec![json!({"name": "Alpha"}), json!({"name": "Beta"})])
            }),
        );
        app.tabs[0].cursor = 7;

        for _ in 0..1000 {
            app.poll_views();
            if !app.tabs[0].view.as_ref().unwrap().in_flight() {
                break;
            }
            tokio::task::yield_now().await;
        }

        assert_eq!(app.tabs[0].cursor, 1, "cursor must clamp to the last row");
    }

    #[tokio::test]
    async fn test_poll_views_clears_status_on_active_resolution() {
        let mut app = new_app();
        app.status_message = Some("Reloading teams...".to_string());
        app.tabs[0].view =
            Some(CollectionView::activate_with(&TEAMS, async { Ok(Vec::new()) }));

        for _ in 0..1000 {
            app.poll_views();
            if !app.tabs[0].view.as_ref().unwrap().in_flight() {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert!(app.status_message.is_none(), "resolution must clear the status");
    }

    #[tokio::test]
    async fn test_cursor_wraps_over_resolved_rows() {
        let mut app = new_app();
        app.tabs[0].view = Some(
            resolved_view(vec![json!({"name": "a"}), json!({"name": "b"}), json!({"name": "c"})])
                .await,
        );

        assert_eq!(app.active_row_count(), 3);
        app.cursor_up();
        assert_eq!(app.active().cursor, 2, "up from the first row wraps to the last");
        app.cursor_down();
        assert_eq!(app.active().cursor, 0);
    }
}
