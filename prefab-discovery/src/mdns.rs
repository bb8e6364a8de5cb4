//! mDNS/DNS-SD browse strategy.
//!
//! Browses for the server's service advertisement on a dedicated worker that
//! owns the mDNS daemon. The first advertisement that resolves to a concrete
//! address wins; the waiting caller never blocks longer than its timeout, and
//! the worker (daemon included) is fully stopped before `locate` returns.

use std::thread;
use std::time::Duration;

use mdns_sd::{ServiceDaemon, ServiceEvent};
use tracing::{debug, warn};

use crate::error::{DiscoveryError, Result};
use crate::strategy::DiscoveryStrategy;
use crate::task::{BoundedTask, TaskContext};
use crate::ServerAddress;

/// How long the worker blocks between cancellation checks
const EVENT_POLL_SLICE: Duration = Duration::from_millis(100);

/// Locates a server by browsing for its DNS-SD advertisement.
#[derive(Debug, Clone)]
pub struct MdnsDiscovery {
    service_type: String,
}

impl MdnsDiscovery {
    /// Create a strategy browsing for `service_type`
    /// (e.g. `_prefab._tcp.local.`).
    pub fn new(service_type: impl Into<String>) -> Self {
        Self {
            service_type: service_type.into(),
        }
    }
}

impl Default for MdnsDiscovery {
    fn default() -> Self {
        Self::new(crate::DEFAULT_SERVICE_TYPE)
    }
}

impl DiscoveryStrategy for MdnsDiscovery {
    fn locate(&self, timeout: Duration) -> Option<ServerAddress> {
        let service_type = self.service_type.clone();
        let task = BoundedTask::spawn(move |ctx| {
            if let Err(e) = browse(&service_type, &ctx) {
                // Backend failure is reported as "not found", never an error
                warn!("mDNS discovery unavailable: {}", e);
            }
        });
        task.wait(timeout)
    }
}

/// Browse loop run on the worker thread.
///
/// Delivers the first resolved advertisement carrying a usable address, then
/// tears the daemon down. Also runs the teardown on cancellation and on
/// channel loss, so no daemon outlives the call that started it.
fn browse(service_type: &str, ctx: &TaskContext<ServerAddress>) -> Result<()> {
    let daemon =
        ServiceDaemon::new().map_err(|e| DiscoveryError::Backend(e.to_string()))?;

    let events = match daemon.browse(service_type) {
        Ok(events) => events,
        Err(e) => {
            let _ = daemon.shutdown();
            return Err(DiscoveryError::Backend(e.to_string()));
        }
    };

    while !ctx.is_cancelled() {
        match events.try_recv() {
            Ok(ServiceEvent::ServiceResolved(info)) => {
                if let Some(address) = info.get_addresses().iter().next() {
                    let found = ServerAddress {
                        host: address.to_string(),
                        port: info.get_port(),
                    };
                    debug!(
                        "resolved {} at {}:{}",
                        info.get_fullname(),
                        found.host,
                        found.port
                    );
                    ctx.deliver(found);
                    break;
                }
            }
            Ok(event) => {
                debug!("mDNS event: {:?}", event);
            }
            Err(_) => {
                // Nothing queued yet; sleep a slice and re-check cancellation
                thread::sleep(EVENT_POLL_SLICE);
            }
        }
    }

    let _ = daemon.stop_browse(service_type);
    let _ = daemon.shutdown();
    Ok(())
}
