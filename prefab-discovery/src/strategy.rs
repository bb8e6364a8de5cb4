//! Strategy selection for locating a server.
//!
//! Discovery backends are interchangeable behind a single trait; which one
//! runs is decided by configuration, not by platform conditionals.

use std::time::Duration;

use crate::mdns::MdnsDiscovery;
use crate::probe::ProbeDiscovery;
use crate::ServerAddress;

/// A way of locating a Prefab server on the network.
///
/// Implementations report "nothing found" as `None`; discovery is never a
/// hard failure, since callers always have a manual-configuration fallback.
pub trait DiscoveryStrategy {
    /// Attempt to locate a server, blocking the caller for at most `timeout`
    /// (strategies bounded by their own per-step timeouts may ignore it).
    /// Each call is independent of any previous one.
    fn locate(&self, timeout: Duration) -> Option<ServerAddress>;
}

/// Which discovery backend a client should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiscoveryMode {
    /// Browse for the server's DNS-SD advertisement (default)
    #[default]
    Mdns,
    /// Sequentially probe a fixed candidate address list
    Probe,
    /// Never discover; the configured base address is used as-is
    Disabled,
}

/// No-op strategy for clients with discovery turned off.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledDiscovery;

impl DiscoveryStrategy for DisabledDiscovery {
    fn locate(&self, _timeout: Duration) -> Option<ServerAddress> {
        None
    }
}

/// Build the strategy for a configured mode and service type.
pub fn strategy_for(mode: DiscoveryMode, service_type: &str) -> Box<dyn DiscoveryStrategy> {
    match mode {
        DiscoveryMode::Mdns => Box::new(MdnsDiscovery::new(service_type)),
        DiscoveryMode::Probe => Box::new(ProbeDiscovery::default()),
        DiscoveryMode::Disabled => Box::new(DisabledDiscovery),
    }
}
