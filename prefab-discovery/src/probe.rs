//! Sequential probe fallback.
//!
//! When the mDNS protocol is unavailable or disabled, a fixed ordered list of
//! candidate addresses is checked one at a time with a lightweight
//! connectivity request. The first candidate that answers successfully wins;
//! later candidates are never contacted.

use std::time::Duration;

use rest_client::{Method, RestClient};
use tracing::debug;

use crate::strategy::DiscoveryStrategy;
use crate::ServerAddress;

/// Hosts tried by the default candidate list, in order
const DEFAULT_CANDIDATE_HOSTS: &[&str] = &[
    "localhost",
    "127.0.0.1",
    "192.168.1.100",
    "192.168.1.101",
    "192.168.1.102",
    "192.168.0.100",
    "192.168.0.101",
    "192.168.0.102",
];

/// Port the default candidates are probed on
const DEFAULT_CANDIDATE_PORT: u16 = 8080;

/// Per-candidate connection timeout; the probe pass as a whole has no
/// timeout of its own
const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Locates a server by probing a fixed candidate list sequentially.
#[derive(Debug, Clone)]
pub struct ProbeDiscovery {
    candidates: Vec<ServerAddress>,
    client: RestClient,
}

impl ProbeDiscovery {
    /// Create a probe strategy over an explicit ordered candidate list
    pub fn new(candidates: Vec<ServerAddress>) -> Self {
        Self {
            candidates,
            client: RestClient::new(PROBE_TIMEOUT),
        }
    }

    /// Whether a candidate answers the connectivity check.
    /// Any failure, transport or status, counts as unreachable.
    fn reachable(&self, candidate: &ServerAddress) -> bool {
        self.client
            .execute(Method::Get, &candidate.base_url(), "/homes", None)
            .is_ok()
    }
}

impl Default for ProbeDiscovery {
    fn default() -> Self {
        Self::new(
            DEFAULT_CANDIDATE_HOSTS
                .iter()
                .map(|host| ServerAddress {
                    host: (*host).to_string(),
                    port: DEFAULT_CANDIDATE_PORT,
                })
                .collect(),
        )
    }
}

impl DiscoveryStrategy for ProbeDiscovery {
    fn locate(&self, _timeout: Duration) -> Option<ServerAddress> {
        for candidate in &self.candidates {
            debug!("probing {}", candidate.base_url());
            if self.reachable(candidate) {
                debug!("probe succeeded for {}", candidate.base_url());
                return Some(candidate.clone());
            }
        }
        None
    }
}
