// Wire types for the runtime's HTTP API.
//
// Shapes follow what the runtime actually serves; everything the widget
// does not strictly need is `Option` + `#[serde(default)]` so partial
// payloads from older runtime versions still deserialize.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One row of the entity registry listing.
///
/// `device_id` groups sibling entities that belong to the same physical
/// device (the vehicle integration registers dozens of sensors under one
/// device).
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryEntry {
    pub entity_id: String,
    #[serde(default)]
    pub device_id: Option<String>,
}

/// Full registry record for a single entity.
///
/// Only `original_name` is of interest here: the name the integration gave
/// the entity before any user rename.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryEntryDetail {
    pub entity_id: String,
    #[serde(default)]
    pub original_name: Option<String>,
}

/// Live state of a single entity.
#[derive(Debug, Clone, Deserialize)]
pub struct StatePayload {
    pub entity_id: String,
    pub state: String,
    #[serde(default)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub last_changed: Option<DateTime<Utc>>,
}
