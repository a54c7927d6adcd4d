//! HTTP retrieval of resource collections.
//!
//! One GET per call, no request body, no custom headers. The status/parse
//! classification is a pure function over the received status code and body
//! text so the async client (dashboard) and the blocking client (one-shot
//! CLI) share a single error taxonomy.

use std::time::Duration;

use serde_json::Value;

use crate::error::FetchError;
use crate::lifecycle::FetchOutcome;
use crate::normalize::{normalize, records_of};

/// Default request timeout in seconds, used when no user preference applies.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Build the async HTTP client used by the dashboard.
///
/// # Errors
///
/// Returns [`FetchError::Transport`] when the underlying client cannot be
/// constructed (e.g. no TLS backend available).
pub fn async_client(timeout_secs: u64) -> Result<reqwest::Client, FetchError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(transport)
}

/// Build the blocking HTTP client used by the one-shot CLI.
///
/// # Errors
///
/// Returns [`FetchError::Transport`] when the underlying client cannot be
/// constructed.
pub fn blocking_client(timeout_secs: u64) -> Result<reqwest::blocking::Client, FetchError> {
    reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(transport)
}

/// Fetch one collection and reduce it to renderable records.
///
/// # Errors
///
/// - [`FetchError::Transport`] when no response arrives (unreachable host,
///   refused connection, invalid URL, timeout).
/// - [`FetchError::HttpStatus`] when the response status is not a success.
/// - [`FetchError::Parse`] when a successful response body is not JSON.
pub async fn fetch_records(client: &reqwest::Client, url: &str) -> FetchOutcome {
    tracing::debug!(url, "fetching collection");
    let response = client.get(url).send().await.map_err(transport)?;
    let status = response.status().as_u16();
    tracing::debug!(url, status, "response received");
    let body = response.text().await.map_err(transport)?;
    let payload = classify_response(status, &body)?;
    let records = records_of(normalize(payload));
    tracing::debug!(url, count = records.len(), "collection fetched");
    Ok(records)
}

/// Blocking twin of [`fetch_records`], for callers without a runtime.
///
/// # Errors
///
/// Same taxonomy as [`fetch_records`].
pub fn fetch_records_blocking(
    client: &reqwest::blocking::Client,
    url: &str,
) -> FetchOutcome {
    tracing::debug!(url, "fetching collection");
    let response = client.get(url).send().map_err(transport)?;
    let status = response.status().as_u16();
    tracing::debug!(url, status, "response received");
    let body = response.text().map_err(transport)?;
    let payload = classify_response(status, &body)?;
    let records = records_of(normalize(payload));
    tracing::debug!(url, count = records.len(), "collection fetched");
    Ok(records)
}

/// Classify a received response by status code first, body second.
///
/// A non-success status wins regardless of what the body holds; a success
/// status with an unparseable body is a parse failure.
fn classify_response(status: u16, body: &str) -> Result<Value, FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::HttpStatus { status });
    }
    serde_json::from_str(body).map_err(|err| FetchError::Parse { message: err.to_string() })
}

fn transport(err: reqwest::Error) -> FetchError {
    FetchError::Transport { message: err.to_string() }
}
