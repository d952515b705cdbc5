//! Vehicle-status dashboard widget for a smart-home runtime.
//!
//! The card reads sensor entities resolved by `carsense-core`, derives
//! display values (fuel/range, lock state, tyre pressures, warnings),
//! and lets the user flip between stacked sub-views — trip data, vehicle
//! status, eco score, tyre pressure, and a map — with taps or swipes.
//!
//! Rendering stays with the host: [`VehicleCard::view_model`] produces a
//! serializable description of the current frame, and the host bridge
//! feeds user input back through [`VehicleCard::handle`].
//!
//! ```no_run
//! # async fn demo(registry: carsense_api::RuntimeClient) -> Result<(), Box<dyn std::error::Error>> {
//! use std::sync::Arc;
//!
//! use carsense_card::{CardConfig, CardEvent, VehicleCard};
//! use carsense_core::{CardView, StateStore};
//!
//! let config = CardConfig::from_value(serde_json::json!({
//!     "entity": "sensor.car_odometer",
//!     "name": "My Car",
//! }))?;
//!
//! let store = Arc::new(StateStore::new());
//! let mut card = VehicleCard::new(config, store)?;
//!
//! card.attach(&registry).await?;
//! card.handle(CardEvent::ButtonTapped(CardView::Trip));
//! let frame = card.view_model();
//! # let _ = frame;
//! # Ok(())
//! # }
//! ```

pub mod card;
pub mod config;
pub mod events;
pub mod sections;
pub mod view;

pub use card::{CardEvent, VehicleCard};
pub use config::{CardConfig, ConfigError};
pub use events::{HostNotification, MAP_POPUP_EVENT, MORE_INFO_EVENT};
pub use view::{CardBody, CardModel, DetailContent, DetailModel, MapModel, SummaryModel};

/// Card version, surfaced to the host's card picker.
pub const CARD_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Layout sizing hint for the host dashboard.
pub const CARD_SIZE: u32 = 3;
