// ── Core identity and state types ──
//
// EntityId is the foundation of every lookup in this crate. It wraps the
// runtime's dotted identifier string; an empty identifier is the
// "unresolved" placeholder sentinel, never an error.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── EntityId ────────────────────────────────────────────────────────

/// Canonical identifier for a runtime entity, e.g. `sensor.car_fuellevel`.
///
/// The part before the first dot is the entity's domain (`sensor`,
/// `binary_sensor`, `lock`, ...). The empty identifier is reserved for
/// unresolved placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the unresolved-placeholder identifier.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The domain prefix, e.g. `"sensor"` for `sensor.car_fuellevel`.
    pub fn domain(&self) -> &str {
        self.0.split('.').next().unwrap_or("")
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EntityId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_owned()))
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ── ResolvedEntity ──────────────────────────────────────────────────

/// The outcome of matching one semantic role against the registry.
///
/// Every role always resolves to one of these; when nothing matched, both
/// fields are empty (the placeholder). Replaced wholesale on
/// re-resolution, never mutated field-by-field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedEntity {
    pub entity_id: EntityId,
    pub original_name: String,
}

impl ResolvedEntity {
    pub fn new(entity_id: impl Into<EntityId>, original_name: impl Into<String>) -> Self {
        Self {
            entity_id: entity_id.into(),
            original_name: original_name.into(),
        }
    }

    /// The empty placeholder for roles with no matching entity.
    pub fn placeholder() -> Self {
        Self::default()
    }

    /// True when a concrete entity was matched (identifier non-empty).
    pub fn is_resolved(&self) -> bool {
        !self.entity_id.is_empty()
    }
}

// ── EntityState ─────────────────────────────────────────────────────

/// A live state-store row: the raw state string plus its attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityState {
    pub value: String,
    #[serde(default)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub last_changed: Option<DateTime<Utc>>,
}

impl EntityState {
    /// Look up a raw attribute value.
    pub fn attribute(&self, key: &str) -> Option<&serde_json::Value> {
        self.attributes.get(key)
    }

    /// A string attribute, or `None` when absent or not a string.
    pub fn str_attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(|v| v.as_str())
    }

    /// The `unit_of_measurement` attribute, empty when absent.
    pub fn unit(&self) -> &str {
        self.str_attribute("unit_of_measurement").unwrap_or("")
    }

    /// The `icon` attribute (`mdi:...`), when the integration set one.
    pub fn icon(&self) -> Option<&str> {
        self.str_attribute("icon")
    }

    /// True when the raw state is the binary-sensor "on" value.
    pub fn is_on(&self) -> bool {
        self.value == "on"
    }

    /// The state parsed as a number, when it is one.
    pub fn numeric(&self) -> Option<f64> {
        self.value.trim().parse().ok()
    }
}

impl From<carsense_api::StatePayload> for EntityState {
    fn from(payload: carsense_api::StatePayload) -> Self {
        Self {
            value: payload.state,
            attributes: payload.attributes,
            last_changed: payload.last_changed,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn entity_id_domain() {
        let id = EntityId::from("binary_sensor.car_parkbrakestatus");
        assert_eq!(id.domain(), "binary_sensor");
    }

    #[test]
    fn entity_id_display_roundtrip() {
        let id: EntityId = "sensor.car_odometer".parse().unwrap();
        assert_eq!(id.to_string(), "sensor.car_odometer");
    }

    #[test]
    fn placeholder_is_unresolved() {
        let placeholder = ResolvedEntity::placeholder();
        assert!(!placeholder.is_resolved());
        assert!(placeholder.entity_id.is_empty());
        assert!(placeholder.original_name.is_empty());
    }

    #[test]
    fn entity_state_numeric_and_unit() {
        let mut attributes = serde_json::Map::new();
        attributes.insert("unit_of_measurement".into(), "km".into());

        let state = EntityState {
            value: "1024.5".into(),
            attributes,
            last_changed: None,
        };

        assert_eq!(state.numeric(), Some(1024.5));
        assert_eq!(state.unit(), "km");
        assert!(!state.is_on());
    }

    #[test]
    fn entity_state_non_numeric() {
        let state = EntityState {
            value: "locked".into(),
            ..EntityState::default()
        };
        assert!(state.numeric().is_none());
    }
}
