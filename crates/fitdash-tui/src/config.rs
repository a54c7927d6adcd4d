//! Per-user TUI preferences loaded from `{home}/.config/fitdash/tui.toml`.
//!
//! The config file is optional. If it is absent or cannot be parsed, all
//! fields fall back to [`TuiConfig::default()`]. Parse errors are reported to
//! stderr so the user can diagnose formatting mistakes without crashing the
//! TUI.
//!
//! # File location
//!
//! ```text
//! ~/.config/fitdash/tui.toml
//! ```
//!
//! Override the base directory with `FITDASH_HOME`:
//!
//! ```text
//! FITDASH_HOME=/custom/home fitdash-tui
//! # loads: /custom/home/.config/fitdash/tui.toml
//! ```
//!
//! # Example configuration
//!
//! ```toml
//! # ~/.config/fitdash/tui.toml
//! eager_load = true           # fetch every tab at startup instead of on visit
//! request_timeout_secs = 10   # per-request HTTP timeout
//! ```

use std::path::PathBuf;

use serde::Deserialize;

use fitdash_core::fetch::DEFAULT_TIMEOUT_SECS;

/// TUI runtime preferences.
///
/// Loaded once at startup. All fields have defaults that are used when the
/// file is absent or when individual fields are omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct TuiConfig {
    /// When `true`, every tab activates (and fetches) at startup. When
    /// `false` (default), a tab activates on its first visit.
    #[serde(default)]
    pub eager_load: bool,

    /// Per-request HTTP timeout in seconds. Defaults to
    /// [`DEFAULT_TIMEOUT_SECS`].
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            eager_load: false,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

// ── Config loader ─────────────────────────────────────────────────────────────

/// Base directory under which `.config/fitdash/tui.toml` is resolved.
///
/// `FITDASH_HOME` (set and non-empty) takes precedence over the platform
/// home directory, which keeps tests and custom deployments hermetic.
fn config_home() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("FITDASH_HOME") {
        let trimmed = home.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir()
}

/// Load TUI configuration from `{home}/.config/fitdash/tui.toml`.
///
/// Returns [`TuiConfig::default()`] if:
/// - The file does not exist (expected for first-time users).
/// - The home directory cannot be determined.
/// - The file cannot be read (permissions, I/O error).
/// - The TOML is malformed.
pub fn load_tui_config() -> TuiConfig {
    let Some(home) = config_home() else {
        return TuiConfig::default();
    };

    let path = home.join(".config/fitdash/tui.toml");

    if !path.exists() {
        return TuiConfig::default();
    }

    let content = match std::fs::read_to_string(&path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("fitdash-tui: warning: could not read {}: {e}", path.display());
            return TuiConfig::default();
        }
    };

    match toml::from_str::<TuiConfig>(&content) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!(
                "fitdash-tui: warning: could not parse {}: {e}. Using defaults.",
                path.display()
            );
            TuiConfig::default()
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
