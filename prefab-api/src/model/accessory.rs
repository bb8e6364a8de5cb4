//! Accessories and their service/characteristic tree

use serde::{Deserialize, Serialize};

/// A HomeKit accessory
///
/// The server returns two views of the same entity: a summary (list
/// endpoints, only the required name fields) and a detail (single-accessory
/// endpoint, optional fields populated, `services` included). Absent optional
/// fields stay absent through a round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accessory {
    pub home: String,
    pub room: String,
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_reachable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_identify: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_bridged: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<Service>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firmware_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// A service exposed by an accessory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub unique_identifier: String,
    pub name: String,
    pub type_name: String,
    /// Service type identifier (HomeKit UUID), distinct from the
    /// server-assigned `unique_identifier`
    #[serde(rename = "type")]
    pub service_type: String,
    pub is_primary: bool,
    pub is_user_interactive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associated_type: Option<String>,
    pub characteristics: Vec<Characteristic>,
}

/// A characteristic within a service
///
/// `value` is transported as a string no matter the underlying HomeKit value
/// type; the client preserves that representation rather than reinterpreting
/// it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Characteristic {
    pub unique_identifier: String,
    pub description: String,
    pub properties: Vec<String>,
    pub type_name: String,
    /// Characteristic type identifier (HomeKit UUID), the key used by
    /// type-based updates
    #[serde(rename = "type")]
    pub characteristic_type: String,
    pub metadata: CharacteristicMetadata,
    pub value: String,
}

/// Characteristic metadata; every field is independently optional
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacteristicMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_values: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
}

/// Wire contract for a characteristic write
///
/// Identifiers are the opaque server-assigned ids of the matched service and
/// characteristic, not their type UUIDs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccessoryInput {
    pub service_id: String,
    pub characteristic_id: String,
    pub value: String,
}
