//! Server location configuration.
//!
//! The API base URL comes from the `FITDASH_SERVER` environment variable and
//! can be overridden per invocation with a `--server` flag. Absence is not
//! validated: an empty base composes a URL the transport layer rejects, and
//! that rejection surfaces through the ordinary fetch error path rather than
//! failing at startup.

/// Environment variable naming the API host, e.g. `http://localhost:8000`.
pub const SERVER_ENV: &str = "FITDASH_SERVER";

/// Resolve the server base URL.
///
/// The flag wins over the environment; when neither is set the base is empty
/// and every fetch against it fails with a transport error.
pub fn server_base_url(flag: Option<&str>) -> String {
    match flag {
        Some(server) => server.to_string(),
        None => std::env::var(SERVER_ENV).unwrap_or_default(),
    }
}
