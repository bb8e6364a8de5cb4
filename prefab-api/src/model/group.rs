//! Accessory groups (HomeKit service groups)

use serde::{Deserialize, Serialize};

/// Basic group info returned by the list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessoryGroup {
    pub home: String,
    pub unique_identifier: String,
    pub name: String,
    pub service_count: u32,
}

/// A service that belongs to a group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupService {
    pub accessory_name: String,
    pub service_name: String,
    pub service_type: String,
    pub unique_identifier: String,
}

/// Detailed group info including its services
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessoryGroupDetail {
    pub home: String,
    pub unique_identifier: String,
    pub name: String,
    pub services: Vec<GroupService>,
}

/// Wire contract for a group-wide characteristic write
///
/// Unlike the accessory update, a group update addresses characteristics by
/// their type: the server writes every characteristic of that type across the
/// group's services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGroupInput {
    pub characteristic_type: String,
    pub value: String,
}
