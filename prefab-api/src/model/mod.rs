//! Domain model for the Prefab REST API
//!
//! Entities mirror the server's wire contract exactly. The containment
//! hierarchy is strictly tree-shaped (Home → Room → Accessory → Service →
//! Characteristic); parents are referenced by name, never by pointer, and
//! every value is a transient snapshot constructed fresh per response.
//!
//! Optional fields exist only when the server included them: a summary view
//! omits what a detail view carries, and the distinction must survive a
//! decode/encode round trip. `Option::None` therefore always means "key not
//! present" — decoding treats `null` the same as absence, and encoding skips
//! absent fields entirely.

mod accessory;
mod group;
mod scene;

pub use accessory::{
    Accessory, Characteristic, CharacteristicMetadata, Service, UpdateAccessoryInput,
};
pub use group::{AccessoryGroup, AccessoryGroupDetail, GroupService, UpdateGroupInput};
pub use scene::{HomeKitScene, SceneAction, SceneDetail};

use serde::{Deserialize, Serialize};

/// A HomeKit home known to the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Home {
    pub name: String,
}

/// A room within a home; `home` is a name reference, not an owning link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub home: String,
    pub name: String,
}
