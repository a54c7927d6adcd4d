//! Fetch failure taxonomy.

use thiserror::Error;

/// Why a collection fetch failed.
///
/// Every variant takes the same road at the propagation boundary: its Display
/// text becomes the lifecycle `Error` message shown to the user. No variant
/// aborts the process and none are retried automatically.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response: unreachable host, refused
    /// connection, invalid URL, or a timeout.
    #[error("{message}")]
    Transport { message: String },

    /// The server answered with a non-success status code.
    #[error("server returned HTTP {status}")]
    HttpStatus { status: u16 },

    /// The server answered successfully but the body was not valid JSON.
    #[error("invalid JSON in response body: {message}")]
    Parse { message: String },
}
