//! Keyboard input event handling for the fitdash TUI.
//!
//! Events are consumed in the main loop. The handler mutates [`App`] state
//! directly; view activation and polling happen separately in the loop so
//! this module stays free of spawned work.
//!
//! # Key bindings
//!
//! | Key | Action |
//! |-----|--------|
//! | `q` / `Esc` / `Ctrl-C` | Quit |
//! | `Tab` / `BackTab` | Next / previous resource tab |
//! | `1`–`5` | Jump to tab |
//! | `r` | Reload the current tab (fresh view instance) |
//! | `↑` / `↓` | Move the row cursor |

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

/// Process a single terminal input event and update [`App`] state accordingly.
///
/// Returns `true` if the application should quit after this event.
pub fn handle_event(event: &Event, app: &mut App) -> bool {
    if let Event::Key(KeyEvent { code, modifiers, .. }) = event {
        match (code, modifiers) {
            (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => {
                app.should_quit = true;
                return true;
            }
            (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => {
                app.should_quit = true;
                return true;
            }
            (KeyCode::Tab, _) => app.next_tab(),
            (KeyCode::BackTab, _) => app.previous_tab(),
            (KeyCode::Char('r'), _) => app.reload_requested = true,
            (KeyCode::Up, _) => app.cursor_up(),
            (KeyCode::Down, _) => app.cursor_down(),
            (KeyCode::Char(c), _) if c.is_ascii_digit() => {
                if let Some(digit) = c.to_digit(10)
                    && digit >= 1
                {
                    app.jump_to_tab(digit as usize - 1);
                }
            }
            _ => {}
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key_event(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn new_app() -> App {
        App::new(
            "http://127.0.0.1:1".to_string(),
            TuiConfig::default(),
            reqwest::Client::new(),
        )
    }

    #[test]
    fn test_q_quits() {
        let mut app = new_app();
        let quit = handle_event(&key_event(KeyCode::Char('q'), KeyModifiers::NONE), &mut app);
        assert!(quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_esc_quits() {
        let mut app = new_app();
        let quit = handle_event(&key_event(KeyCode::Esc, KeyModifiers::NONE), &mut app);
        assert!(quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = new_app();
        let quit = handle_event(&key_event(KeyCode::Char('c'), KeyModifiers::CONTROL), &mut app);
        assert!(quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_tab_advances_active_tab() {
        let mut app = new_app();
        handle_event(&key_event(KeyCode::Tab, KeyModifiers::NONE), &mut app);
        assert_eq!(app.active_tab, 1);
    }

    #[test]
    fn test_backtab_wraps_to_last_tab() {
        let mut app = new_app();
        handle_event(&key_event(KeyCode::BackTab, KeyModifiers::SHIFT), &mut app);
        assert_eq!(app.active_tab, app.tabs.len() - 1);
    }

    #[test]
    fn test_digit_jumps_to_tab() {
        let mut app = new_app();
        handle_event(&key_event(KeyCode::Char('3'), KeyModifiers::NONE), &mut app);
        assert_eq!(app.active_tab, 2);
    }

    #[test]
    fn test_digit_out_of_range_ignored() {
        let mut app = new_app();
        handle_event(&key_event(KeyCode::Char('9'), KeyModifiers::NONE), &mut app);
        assert_eq!(app.active_tab, 0);
        handle_event(&key_event(KeyCode::Char('0'), KeyModifiers::NONE), &mut app);
        assert_eq!(app.active_tab, 0);
    }

    #[test]
    fn test_r_requests_reload() {
        let mut app = new_app();
        handle_event(&key_event(KeyCode::Char('r'), KeyModifiers::NONE), &mut app);
        assert!(app.reload_requested);
        assert!(app.take_reload_request());
        assert!(!app.reload_requested, "take must consume the request");
    }

    #[test]
    fn test_cursor_keys_without_rows_are_noops() {
        let mut app = new_app();
        handle_event(&key_event(KeyCode::Down, KeyModifiers::NONE), &mut app);
        handle_event(&key_event(KeyCode::Up, KeyModifiers::NONE), &mut app);
        assert_eq!(app.active().cursor, 0);
    }

    #[test]
    fn test_other_key_ignored() {
        let mut app = new_app();
        let quit = handle_event(&key_event(KeyCode::Char('x'), KeyModifiers::NONE), &mut app);
        assert!(!quit);
        assert!(!app.should_quit);
    }
}
