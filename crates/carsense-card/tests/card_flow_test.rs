#![allow(clippy::unwrap_used)]
// End-to-end widget flow: resolve roles against a fake registry, feed
// states, then drive the card through taps and swipes.

use std::sync::Arc;

use serde_json::json;

use carsense_api::RegistryEntry;
use carsense_card::{CardBody, CardConfig, CardEvent, DetailContent, VehicleCard};
use carsense_core::{
    CardView, EntityId, EntityState, PointerEvent, StateStore, resolver::EntityRegistry,
};

/// Minimal in-memory registry: every entity belongs to the vehicle
/// device and is named after its id suffix.
struct VehicleRegistry {
    rows: Vec<RegistryEntry>,
}

impl VehicleRegistry {
    fn new(ids: &[&str]) -> Self {
        Self {
            rows: ids
                .iter()
                .map(|id| RegistryEntry {
                    entity_id: (*id).to_owned(),
                    device_id: Some("vehicle-device".to_owned()),
                })
                .collect(),
        }
    }
}

impl EntityRegistry for VehicleRegistry {
    async fn list_entities(&self) -> Result<Vec<RegistryEntry>, carsense_api::Error> {
        Ok(self.rows.clone())
    }

    async fn original_name(
        &self,
        entity_id: &EntityId,
    ) -> Result<Option<String>, carsense_api::Error> {
        let suffix = entity_id
            .as_str()
            .rsplit('_')
            .next()
            .unwrap_or_default()
            .to_owned();
        Ok(Some(suffix))
    }
}

fn numeric_state(value: &str, unit: &str) -> EntityState {
    let mut attributes = serde_json::Map::new();
    attributes.insert("unit_of_measurement".into(), unit.into());
    EntityState {
        value: value.into(),
        attributes,
        last_changed: None,
    }
}

#[tokio::test]
async fn resolve_then_render_then_swipe() {
    let registry = VehicleRegistry::new(&[
        "sensor.car_odometer",
        "sensor.car_tirepressurefrontleft",
        "sensor.car_tirepressurefrontright",
        "sensor.car_tirepressurerearleft",
        "sensor.car_tirepressurerearright",
    ]);

    let store = Arc::new(StateStore::new());
    store.apply_states([
        (
            EntityId::from("sensor.car_odometer"),
            numeric_state("12345", "km"),
        ),
        (
            EntityId::from("sensor.car_tirepressurefrontleft"),
            numeric_state("32", "psi"),
        ),
        (
            EntityId::from("sensor.car_tirepressurefrontright"),
            numeric_state("33", "psi"),
        ),
        (
            EntityId::from("sensor.car_tirepressurerearleft"),
            numeric_state("30", "psi"),
        ),
        (
            EntityId::from("sensor.car_tirepressurerearright"),
            numeric_state("34", "psi"),
        ),
    ]);

    let config = CardConfig::from_value(json!({
        "entity": "sensor.car_odometer",
        "name": "Family Car"
    }))
    .unwrap();
    let mut card = VehicleCard::new(config, store).unwrap();

    card.attach(&registry).await.unwrap();

    // Summary: the tyre button carries the min/max pressure summary.
    let CardBody::Summary(summary) = card.view_model().body else {
        panic!("expected summary body");
    };
    let tyre_button = summary
        .buttons
        .iter()
        .find(|b| b.view == CardView::Tyre)
        .unwrap();
    assert_eq!(tyre_button.secondary, "30 - 34 psi");

    // Open the tyre view; all four pressures render as rows.
    card.handle(CardEvent::ButtonTapped(CardView::Tyre));
    let CardBody::Detail(detail) = card.view_model().body else {
        panic!("expected detail body");
    };
    let DetailContent::Sections { sections } = detail.content else {
        panic!("expected built-in sections");
    };
    assert_eq!(sections[0].rows.len(), 4);
    assert_eq!(sections[0].rows[0].value, "32 psi");

    // Swipe left: tyre wraps around to trip.
    card.handle(CardEvent::Pointer(PointerEvent::Press { x: 280.0, y: 60.0 }));
    card.handle(CardEvent::Pointer(PointerEvent::Move { x: 40.0, y: 60.0 }));
    card.handle(CardEvent::Pointer(PointerEvent::Release {
        panel_width: 300.0,
    }));
    assert_eq!(card.active_view(), Some(CardView::Trip));

    // Close returns to the summary; navigation never touched resolution.
    card.handle(CardEvent::CloseTapped);
    assert_eq!(card.active_view(), None);
}

#[tokio::test]
async fn attach_against_empty_registry_degrades_to_placeholders() {
    let registry = VehicleRegistry::new(&[]);
    let store = Arc::new(StateStore::new());

    let config = CardConfig::from_value(json!({ "entity": "sensor.car_odometer" })).unwrap();
    let card = VehicleCard::new(config, Arc::clone(&store)).unwrap();

    card.attach(&registry).await.unwrap();

    // Every role key exists, all placeholders, and the summary renders
    // with empty derived values instead of failing.
    let resolved = store.resolved();
    assert!(resolved.trip.values().all(|e| !e.is_resolved()));

    let CardBody::Summary(summary) = card.view_model().body else {
        panic!("expected summary body");
    };
    assert!(summary.warnings.is_empty());
    assert!(summary.range.is_none());
    let tyre_button = summary
        .buttons
        .iter()
        .find(|b| b.view == CardView::Tyre)
        .unwrap();
    assert_eq!(tyre_button.secondary, "");
}
