//! Scenes (HomeKit action sets)

use serde::{Deserialize, Serialize};

/// Basic scene info returned by the list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeKitScene {
    pub home: String,
    pub unique_identifier: String,
    pub name: String,
    pub is_built_in: bool,
}

/// A single characteristic write performed when a scene executes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneAction {
    pub accessory_name: String,
    pub service_name: String,
    pub characteristic_type: String,
    pub target_value: String,
}

/// Detailed scene info including its actions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDetail {
    pub home: String,
    pub unique_identifier: String,
    pub name: String,
    pub is_built_in: bool,
    pub actions: Vec<SceneAction>,
}
