//! Card configuration.
//!
//! The host hands every card instance one JSON object. Parsing and
//! validation happen once, up front; a missing primary entity is a hard
//! configuration error, everything else has a sensible default.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use carsense_core::{CardView, EntityId};

/// Configuration problems, surfaced to the user before anything renders.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The required primary entity is missing or empty.
    #[error("required option 'entity' is missing")]
    MissingEntity,

    /// The config object did not match the schema.
    #[error("invalid card configuration: {message}")]
    Invalid { message: String },
}

/// Recognized card options. Unknown keys (the host's own `type` field,
/// editor leftovers) are ignored.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CardConfig {
    /// The primary entity representing the vehicle. Required.
    #[serde(default)]
    pub entity: String,
    /// Header title.
    #[serde(default)]
    pub name: String,
    /// Device tracker backing the map panel.
    #[serde(default)]
    pub device_tracker: String,
    #[serde(default)]
    pub show_slides: bool,
    #[serde(default)]
    pub show_map: bool,
    #[serde(default = "default_true")]
    pub show_buttons: bool,
    #[serde(default = "default_true")]
    pub show_background: bool,
    #[serde(default)]
    pub enable_map_popup: bool,
    /// Header slide image URLs.
    #[serde(default)]
    pub images: Vec<String>,
    /// Custom sub-cards, one list per content view. Non-empty lists
    /// replace the built-in sections for that view; unknown view kinds
    /// cannot be expressed.
    #[serde(default)]
    pub trip_card: Vec<serde_json::Value>,
    #[serde(default)]
    pub vehicle_card: Vec<serde_json::Value>,
    #[serde(default)]
    pub eco_card: Vec<serde_json::Value>,
    #[serde(default)]
    pub tyre_card: Vec<serde_json::Value>,
}

fn default_true() -> bool {
    true
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            entity: String::new(),
            name: String::new(),
            device_tracker: String::new(),
            show_slides: false,
            show_map: false,
            show_buttons: true,
            show_background: true,
            enable_map_popup: false,
            images: Vec::new(),
            trip_card: Vec::new(),
            vehicle_card: Vec::new(),
            eco_card: Vec::new(),
            tyre_card: Vec::new(),
        }
    }
}

impl CardConfig {
    /// Parse and validate a raw host config object.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_value(value).map_err(|e| ConfigError::Invalid {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants that serde defaults cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.entity.trim().is_empty() {
            return Err(ConfigError::MissingEntity);
        }
        Ok(())
    }

    /// The primary entity identifier.
    pub fn primary_entity(&self) -> EntityId {
        EntityId::from(self.entity.as_str())
    }

    /// The device tracker, when configured.
    pub fn device_tracker(&self) -> Option<EntityId> {
        if self.device_tracker.trim().is_empty() {
            None
        } else {
            Some(EntityId::from(self.device_tracker.as_str()))
        }
    }

    /// Custom sub-cards for a content view. The map has none.
    pub fn custom_cards(&self, view: CardView) -> &[serde_json::Value] {
        match view {
            CardView::Trip => &self.trip_card,
            CardView::Vehicle => &self.vehicle_card,
            CardView::Eco => &self.eco_card,
            CardView::Tyre => &self.tyre_card,
            CardView::Map => &[],
        }
    }

    /// Starter config for the host's card picker.
    pub fn stub() -> Self {
        Self {
            name: "Vehicle".into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn minimal_config_parses_with_defaults() {
        let config = CardConfig::from_value(json!({ "entity": "sensor.car_odometer" })).unwrap();

        assert_eq!(config.entity, "sensor.car_odometer");
        assert!(config.show_buttons);
        assert!(config.show_background);
        assert!(!config.show_map);
        assert!(config.images.is_empty());
    }

    #[test]
    fn missing_entity_is_a_configuration_error() {
        let result = CardConfig::from_value(json!({ "name": "Car" }));
        assert!(matches!(result, Err(ConfigError::MissingEntity)));
    }

    #[test]
    fn blank_entity_is_a_configuration_error() {
        let result = CardConfig::from_value(json!({ "entity": "  " }));
        assert!(matches!(result, Err(ConfigError::MissingEntity)));
    }

    #[test]
    fn unknown_options_are_tolerated() {
        let config = CardConfig::from_value(json!({
            "type": "custom:carsense-card",
            "entity": "sensor.car_odometer"
        }))
        .unwrap();
        assert_eq!(config.entity, "sensor.car_odometer");
    }

    #[test]
    fn wrong_option_type_is_invalid() {
        let result = CardConfig::from_value(json!({
            "entity": "sensor.car_odometer",
            "images": "not-a-list"
        }));
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn custom_cards_are_keyed_by_view() {
        let config = CardConfig::from_value(json!({
            "entity": "sensor.car_odometer",
            "eco_card": [{ "type": "gauge" }]
        }))
        .unwrap();

        assert_eq!(config.custom_cards(CardView::Eco).len(), 1);
        assert!(config.custom_cards(CardView::Trip).is_empty());
        assert!(config.custom_cards(CardView::Map).is_empty());
    }

    #[test]
    fn device_tracker_is_optional() {
        let config = CardConfig::from_value(json!({ "entity": "sensor.car_odometer" })).unwrap();
        assert_eq!(config.device_tracker(), None);

        let config = CardConfig::from_value(json!({
            "entity": "sensor.car_odometer",
            "device_tracker": "device_tracker.car"
        }))
        .unwrap();
        assert_eq!(
            config.device_tracker().unwrap().as_str(),
            "device_tracker.car"
        );
    }

    #[test]
    fn stub_config_fails_validation_until_entity_is_set() {
        let stub = CardConfig::stub();
        assert!(stub.validate().is_err());
        assert!(stub.show_buttons);
        assert!(stub.show_background);
    }
}
