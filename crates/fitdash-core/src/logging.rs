//! Shared logging initialization for fitdash binaries.
//!
//! Both binaries treat stdout as data (aligned tables, `--json` output, the
//! dashboard's alternate screen), so log lines always go to stderr.

use std::sync::OnceLock;

static INIT: OnceLock<()> = OnceLock::new();

/// `None` disables logging entirely; useful under the dashboard, where even
/// stderr writes can smear the terminal on exit.
fn parse_level() -> Option<tracing::Level> {
    match std::env::var("FITDASH_LOG")
        .unwrap_or_else(|_| "warn".to_string())
        .to_ascii_lowercase()
        .as_str()
    {
        "off" | "none" => None,
        "trace" => Some(tracing::Level::TRACE),
        "debug" => Some(tracing::Level::DEBUG),
        "info" => Some(tracing::Level::INFO),
        "error" => Some(tracing::Level::ERROR),
        _ => Some(tracing::Level::WARN),
    }
}

/// Initialize process-level tracing output from `FITDASH_LOG`.
///
/// This is safe to call multiple times; only the first call initializes the
/// subscriber. It is intentionally best-effort and never returns an error.
pub fn init() {
    if INIT.get().is_some() {
        return;
    }
    if let Some(level) = parse_level() {
        let _ = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(level)
            .with_target(false)
            .try_init();
    }
    let _ = INIT.set(());
}
