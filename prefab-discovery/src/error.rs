//! Error types for the discovery system.

use thiserror::Error;

/// Error type for discovery operations.
///
/// Discovery failures are never fatal to callers: every public entry point
/// reports "not found" rather than propagating one of these. The type exists
/// for the internal plumbing between the browse worker and its logging.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The mDNS backend could not be initialized or the browse request failed
    #[error("mDNS backend error: {0}")]
    Backend(String),
}

/// Convenience Result type alias for discovery operations.
pub type Result<T> = std::result::Result<T, DiscoveryError>;
