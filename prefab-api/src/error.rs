//! Error types for Prefab API operations

use rest_client::RestError;
use thiserror::Error;

/// Errors surfaced by Prefab API operations
///
/// Every public façade method either returns a fully populated result or one
/// of these kinds. The kind is preserved through the façade so callers can
/// branch on it: `Transport` means the server was never reached, `Status`
/// means it answered and rejected the request, `Mapping` means it answered
/// with a payload the client could not decode, and `NotFound` is a logical
/// lookup miss on the client side.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server could not be reached (refused, timeout, DNS failure)
    #[error("transport error: {0}")]
    Transport(String),

    /// The server responded with a non-success status
    #[error("HTTP {code}: {body}")]
    Status { code: u16, body: String },

    /// A response payload was missing required fields or had the wrong shape
    #[error("mapping error: {0}")]
    Mapping(String),

    /// A logical lookup found nothing (e.g. an unmatched characteristic type)
    #[error("not found: {0}")]
    NotFound(String),
}

impl ApiError {
    /// HTTP status code when the server rejected the request
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Status { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Convert a transport error, attaching the path being requested
    pub(crate) fn from_rest(error: RestError, path: &str) -> Self {
        match error {
            RestError::Transport(msg) => ApiError::Transport(format!("{}: {}", path, msg)),
            RestError::Status { code, body } => ApiError::Status { code, body },
        }
    }
}

impl From<RestError> for ApiError {
    fn from(error: RestError) -> Self {
        match error {
            RestError::Transport(msg) => ApiError::Transport(msg),
            RestError::Status { code, body } => ApiError::Status { code, body },
        }
    }
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;
