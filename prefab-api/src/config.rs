//! Client configuration

use prefab_discovery::DiscoveryMode;
use std::time::Duration;

/// Configuration for a [`PrefabClient`](crate::PrefabClient)
///
/// The defaults match a server running locally with discovery turned on:
/// connect to `http://localhost:8080`, 30 second request timeout, and a
/// single 5 second mDNS pass to replace the default base URL when a server
/// advertises itself on the network.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL requests are issued against until discovery replaces it
    pub base_url: String,

    /// Overall timeout applied to every HTTP request
    pub timeout: Duration,

    /// Which discovery backend to run on construction
    pub discovery: DiscoveryMode,

    /// DNS-SD service type the server advertises under
    pub service_name: String,

    /// Bound on the discovery pass run at construction
    pub discovery_timeout: Duration,
}

impl ClientConfig {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8080";

    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration pointing at a known server, with discovery off
    pub fn for_server(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            discovery: DiscoveryMode::Disabled,
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_discovery(mut self, mode: DiscoveryMode) -> Self {
        self.discovery = mode;
        self
    }

    pub fn with_service_name(mut self, service_name: impl Into<String>) -> Self {
        self.service_name = service_name.into();
        self
    }

    pub fn with_discovery_timeout(mut self, timeout: Duration) -> Self {
        self.discovery_timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            discovery: DiscoveryMode::default(),
            service_name: prefab_discovery::DEFAULT_SERVICE_TYPE.to_string(),
            discovery_timeout: prefab_discovery::DEFAULT_TIMEOUT,
        }
    }
}
