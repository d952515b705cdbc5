//! Host event surface.
//!
//! Outbound notifications the card wants the host to act on, plus the
//! custom event names the host (and the child map component) use to talk
//! back to the card.

use serde_json::json;

use carsense_api::RuntimeClient;
use carsense_core::EntityId;

/// Fired by the child map component to request the map sub-view.
pub const MAP_POPUP_EVENT: &str = "toggle-map-popup";

/// Asks the host to show an entity's detail dialog.
pub const MORE_INFO_EVENT: &str = "more-info";

/// An outbound, fire-and-forget request to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostNotification {
    /// Show the detail dialog for an entity (a data row was tapped).
    MoreInfo { entity_id: EntityId },
}

impl HostNotification {
    /// The event type to emit on the host's event bus.
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::MoreInfo { .. } => MORE_INFO_EVENT,
        }
    }

    /// The event payload.
    pub fn payload(&self) -> serde_json::Value {
        match self {
            Self::MoreInfo { entity_id } => json!({ "entity_id": entity_id }),
        }
    }
}

/// Forward a notification to the runtime's event bus. Fire-and-forget:
/// failures surface to the caller but the card keeps working without.
pub async fn forward(
    client: &RuntimeClient,
    notification: &HostNotification,
) -> Result<(), carsense_api::Error> {
    client
        .fire_event(notification.event_type(), &notification.payload())
        .await
}
