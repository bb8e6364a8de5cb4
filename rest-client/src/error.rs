//! Error types for the REST transport

use thiserror::Error;

/// Errors that can occur while executing a single HTTP request
#[derive(Debug, Error)]
pub enum RestError {
    /// The server could not be reached (connection refused, DNS failure, timeout)
    #[error("transport error: {0}")]
    Transport(String),

    /// The server responded with a non-success status code
    #[error("HTTP {code}: {body}")]
    Status { code: u16, body: String },
}

impl RestError {
    /// Whether this error means the server answered but rejected the request
    pub fn is_status(&self) -> bool {
        matches!(self, RestError::Status { .. })
    }
}
