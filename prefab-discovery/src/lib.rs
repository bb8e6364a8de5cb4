//! Prefab server discovery library
//!
//! This crate locates a Prefab home-automation server on the local network
//! without prior configuration, using mDNS/DNS-SD service browsing with a
//! sequential probe fallback for hosts where multicast DNS is unavailable.
//!
//! # Quick Start
//!
//! ```no_run
//! use prefab_discovery::locate;
//!
//! if let Some(server) = locate() {
//!     println!("Found Prefab server at {}", server.base_url());
//! }
//! ```
//!
//! # Strategies
//!
//! Discovery backends are interchangeable behind [`DiscoveryStrategy`]:
//!
//! ```no_run
//! use std::time::Duration;
//! use prefab_discovery::{DiscoveryStrategy, MdnsDiscovery};
//!
//! let strategy = MdnsDiscovery::new("_prefab._tcp.local.");
//! let server = strategy.locate(Duration::from_millis(5000));
//! ```
//!
//! Every `locate` call is bounded: the browse runs on a worker that is
//! cancelled, torn down, and joined before the call returns, so no background
//! activity survives a timeout.

mod error;
mod mdns;
mod probe;
mod strategy;
mod task;

pub use error::{DiscoveryError, Result};
pub use mdns::MdnsDiscovery;
pub use probe::ProbeDiscovery;
pub use strategy::{strategy_for, DisabledDiscovery, DiscoveryMode, DiscoveryStrategy};

use serde::Serialize;
use std::time::Duration;

/// Service type Prefab servers advertise under
pub const DEFAULT_SERVICE_TYPE: &str = "_prefab._tcp.local.";

/// Default bound on a discovery pass
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// A server location yielded by discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerAddress {
    /// Host or literal IP address the advertisement resolved to
    pub host: String,
    /// TCP port the server listens on
    pub port: u16,
}

impl ServerAddress {
    /// HTTP base URL for this address
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// Locate a Prefab server with the default service type and timeout.
///
/// Convenience wrapper over [`MdnsDiscovery`]. Returns the first server that
/// resolves, or `None` when nothing was found within the timeout (including
/// when the mDNS backend is unavailable on this host).
pub fn locate() -> Option<ServerAddress> {
    locate_with_timeout(DEFAULT_TIMEOUT)
}

/// Locate a Prefab server with the default service type and a custom timeout.
pub fn locate_with_timeout(timeout: Duration) -> Option<ServerAddress> {
    MdnsDiscovery::default().locate(timeout)
}
