//! Typed client for the Prefab HomeKit REST API
//!
//! This crate exposes a Prefab home-automation server as a typed local
//! interface: homes, rooms, accessories with their service/characteristic
//! trees, scenes, and accessory groups. The server can be located
//! automatically on the local network via mDNS/DNS-SD, or configured with an
//! explicit base URL.
//!
//! # Quick Start
//!
//! ```no_run
//! use prefab_api::PrefabClient;
//!
//! // Discovers a server on the network, or falls back to localhost:8080
//! let client = PrefabClient::new();
//!
//! for home in client.get_homes()? {
//!     println!("Home: {}", home.name);
//!     for room in client.get_rooms(&home.name)? {
//!         println!("  Room: {}", room.name);
//!     }
//! }
//! # Ok::<(), prefab_api::ApiError>(())
//! ```
//!
//! # Updating a characteristic by type
//!
//! The server's update endpoint wants opaque service/characteristic ids;
//! [`PrefabClient::update_characteristic_by_type`] resolves a HomeKit type
//! UUID to that id pair and issues the write in one call:
//!
//! ```no_run
//! use prefab_api::{ClientConfig, PrefabClient};
//!
//! const POWER_STATE: &str = "00000025-0000-1000-8000-0026BB765291";
//!
//! let client = PrefabClient::with_config(
//!     ClientConfig::for_server("http://192.168.1.40:8080"),
//! );
//! client.update_characteristic_by_type("Home1", "Den", "Lamp", POWER_STATE, "1")?;
//! # Ok::<(), prefab_api::ApiError>(())
//! ```
//!
//! All façade calls are synchronous and single-shot: one request per call, no
//! retries, no caching. Only discovery uses background concurrency, and it is
//! fully torn down before the call that started it returns.

mod client;
mod config;
mod error;
pub mod model;
mod resolver;

pub use client::PrefabClient;
pub use config::ClientConfig;
pub use error::{ApiError, Result};

// Re-exported so callers can configure discovery without a direct dependency
pub use prefab_discovery::{DiscoveryMode, ServerAddress};
