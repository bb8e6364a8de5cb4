//! The Prefab API façade.
//!
//! One method per server operation. Each call builds a path from
//! percent-encoded segments, executes a single blocking request through the
//! transport, and decodes the response into the domain model. Errors keep
//! their kind on the way up so callers can tell "unreachable" from
//! "rejected" from "malformed payload".

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use prefab_discovery::DiscoveryMode;
use rest_client::{Method, RestClient};
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::model::{
    Accessory, AccessoryGroup, AccessoryGroupDetail, Home, HomeKitScene, Room, SceneDetail,
    UpdateAccessoryInput, UpdateGroupInput,
};
use crate::resolver::find_characteristic;

/// Percent-encode a single path segment
fn seg(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Client for the Prefab HomeKit REST API
///
/// A client instance holds the current base address and a configured
/// transport. Discovery and `set_base_url` both rewrite the base address;
/// instances are meant for single-threaded use, so share one across threads
/// only behind external synchronization.
#[derive(Debug)]
pub struct PrefabClient {
    config: ClientConfig,
    rest: RestClient,
    base_url: String,
}

impl PrefabClient {
    /// Create a client with the default configuration
    ///
    /// With discovery enabled (the default) this runs one bounded discovery
    /// pass and, if a server advertises itself, replaces the default base
    /// URL. Discovery failure is non-fatal; the client falls back to the
    /// configured address.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client from an explicit configuration
    pub fn with_config(config: ClientConfig) -> Self {
        let rest = RestClient::new(config.timeout);
        let base_url = config.base_url.clone();
        let mut client = Self {
            config,
            rest,
            base_url,
        };

        // Only auto-discover when nobody pointed us at a concrete server
        if client.config.discovery != DiscoveryMode::Disabled
            && client.base_url == ClientConfig::DEFAULT_BASE_URL
        {
            client.discover(client.config.discovery_timeout);
        }
        client
    }

    /// Run one discovery pass and adopt the result as the base address.
    ///
    /// Blocks for at most `timeout` (the probe fallback is bounded by its
    /// per-candidate timeouts instead). Returns whether a server was found.
    /// Each invocation is independent of any previous one.
    pub fn discover(&mut self, timeout: Duration) -> bool {
        let strategy =
            prefab_discovery::strategy_for(self.config.discovery, &self.config.service_name);
        match strategy.locate(timeout) {
            Some(address) => {
                debug!("discovered server at {}", address.base_url());
                self.base_url = address.base_url();
                true
            }
            None => {
                debug!("discovery found no server");
                false
            }
        }
    }

    /// The base URL requests are currently issued against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Point the client at a specific server
    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    /// Lightweight connectivity check against the homes endpoint.
    /// Failures of any kind are reported as `false`; this never errors.
    pub fn test_connection(&self) -> bool {
        self.get("/homes").is_ok()
    }

    // ---- Homes ----

    pub fn get_homes(&self) -> Result<Vec<Home>> {
        let body = self.get("/homes")?;
        decode(&body, "homes list")
    }

    pub fn get_home(&self, name: &str) -> Result<Home> {
        let body = self.get(&format!("/homes/{}", seg(name)))?;
        decode(&body, "home")
    }

    // ---- Rooms ----

    pub fn get_rooms(&self, home: &str) -> Result<Vec<Room>> {
        let body = self.get(&format!("/rooms/{}", seg(home)))?;
        decode(&body, "rooms list")
    }

    pub fn get_room(&self, home: &str, name: &str) -> Result<Room> {
        let body = self.get(&format!("/rooms/{}/{}", seg(home), seg(name)))?;
        decode(&body, "room")
    }

    // ---- Accessories ----

    /// List accessories in a room (summary view, no services)
    pub fn get_accessories(&self, home: &str, room: &str) -> Result<Vec<Accessory>> {
        let body = self.get(&format!("/accessories/{}/{}", seg(home), seg(room)))?;
        decode(&body, "accessories list")
    }

    /// Fetch one accessory in detail, services included
    pub fn get_accessory(&self, home: &str, room: &str, name: &str) -> Result<Accessory> {
        let body = self.get(&format!(
            "/accessories/{}/{}/{}",
            seg(home),
            seg(room),
            seg(name)
        ))?;
        decode(&body, "accessory")
    }

    /// Write a characteristic value addressed by its opaque id pair.
    /// Returns the server's raw response body.
    pub fn update_accessory(
        &self,
        home: &str,
        room: &str,
        name: &str,
        update: &UpdateAccessoryInput,
    ) -> Result<String> {
        let path = format!("/accessories/{}/{}/{}", seg(home), seg(room), seg(name));
        self.put(&path, update)
    }

    /// Write a characteristic value addressed by its type UUID.
    ///
    /// Fetches the accessory detail, resolves the first characteristic of
    /// `characteristic_type` in service-major order, then issues the update
    /// with the resolved id pair. Two sequential round trips; the accessory
    /// may change in between, and no concurrency check is performed.
    ///
    /// Fails with [`ApiError::NotFound`] when the detail carries no services
    /// collection, or when no characteristic of that type exists — in the
    /// latter case (including a present-but-empty services collection) no
    /// update request is issued.
    pub fn update_characteristic_by_type(
        &self,
        home: &str,
        room: &str,
        name: &str,
        characteristic_type: &str,
        value: &str,
    ) -> Result<String> {
        let accessory = self.get_accessory(home, room, name)?;

        let services = accessory
            .services
            .as_deref()
            .ok_or_else(|| ApiError::NotFound(format!("accessory {} has no services", name)))?;

        let (service, characteristic) = find_characteristic(services, characteristic_type)
            .ok_or_else(|| {
                ApiError::NotFound(format!(
                    "characteristic type {} not found on {}",
                    characteristic_type, name
                ))
            })?;

        let update = UpdateAccessoryInput {
            service_id: service.unique_identifier.clone(),
            characteristic_id: characteristic.unique_identifier.clone(),
            value: value.to_string(),
        };
        self.update_accessory(home, room, name, &update)
    }

    // ---- Scenes ----

    pub fn get_scenes(&self, home: &str) -> Result<Vec<HomeKitScene>> {
        let body = self.get(&format!("/scenes/{}", seg(home)))?;
        decode(&body, "scenes list")
    }

    pub fn get_scene(&self, home: &str, scene_id: &str) -> Result<SceneDetail> {
        let body = self.get(&format!("/scenes/{}/{}", seg(home), seg(scene_id)))?;
        decode(&body, "scene")
    }

    /// Execute a scene. Returns the server's raw response body.
    pub fn execute_scene(&self, home: &str, scene_id: &str) -> Result<String> {
        self.post(&format!(
            "/scenes/{}/{}/execute",
            seg(home),
            seg(scene_id)
        ))
    }

    // ---- Groups ----

    pub fn get_groups(&self, home: &str) -> Result<Vec<AccessoryGroup>> {
        let body = self.get(&format!("/groups/{}", seg(home)))?;
        decode(&body, "groups list")
    }

    pub fn get_group(&self, home: &str, group_id: &str) -> Result<AccessoryGroupDetail> {
        let body = self.get(&format!("/groups/{}/{}", seg(home), seg(group_id)))?;
        decode(&body, "group")
    }

    /// Write a characteristic value across a group, addressed by type.
    /// Returns the server's raw response body.
    pub fn update_group(
        &self,
        home: &str,
        group_id: &str,
        update: &UpdateGroupInput,
    ) -> Result<String> {
        let path = format!("/groups/{}/{}", seg(home), seg(group_id));
        self.put(&path, update)
    }

    // ---- Transport plumbing ----

    fn get(&self, path: &str) -> Result<String> {
        self.request(Method::Get, path, None)
    }

    fn post(&self, path: &str) -> Result<String> {
        self.request(Method::Post, path, None)
    }

    fn put(&self, path: &str, body: &impl Serialize) -> Result<String> {
        let body = serde_json::to_string(body)
            .map_err(|e| ApiError::Mapping(format!("failed to encode request body: {}", e)))?;
        self.request(Method::Put, path, Some(&body))
    }

    fn request(&self, method: Method, path: &str, body: Option<&str>) -> Result<String> {
        debug!("{} {}", method.as_str(), path);
        self.rest
            .execute(method, &self.base_url, path, body)
            .map_err(|e| ApiError::from_rest(e, path))
    }
}

impl Default for PrefabClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a response body, naming what was being decoded on failure
fn decode<T: DeserializeOwned>(body: &str, what: &str) -> Result<T> {
    serde_json::from_str(body)
        .map_err(|e| ApiError::Mapping(format!("failed to decode {}: {}", what, e)))
}
