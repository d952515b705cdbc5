//! The vehicle card itself: lifecycle, event handling, view assembly.
//!
//! The card owns the navigator and the swipe tracker, reads everything
//! else from the shared [`StateStore`], and never spawns work of its own
//! — the host drives both the event stream and the async resolution
//! future.

use std::sync::Arc;

use tracing::debug;

use carsense_api::RuntimeClient;
use carsense_core::{
    CardView, CoreError, EntityId, Locale, Navigator, PointerEvent, StateStore, SwipeDirection,
    SwipeTracker, format, resolve_all, resolver::EntityRegistry,
};

use crate::config::{CardConfig, ConfigError};
use crate::events::HostNotification;
use crate::sections;
use crate::view::{CardBody, CardModel, DetailContent, DetailModel, MapModel, SummaryModel};

/// Header background asset shown on dark themes.
const BACKGROUND_DARK: &str = "bg_white.png";
/// Header background asset shown on light themes.
const BACKGROUND_LIGHT: &str = "bg_black.png";

const MISSING_TRACKER_WARNING: &str = "No device_tracker entity provided.";

/// User and host input, normalized by the host bridge.
#[derive(Debug, Clone, PartialEq)]
pub enum CardEvent {
    /// One of the four view-toggle buttons was tapped.
    ButtonTapped(CardView),
    /// Header chevron taps on an open sub-view.
    NextTapped,
    PreviousTapped,
    /// Header close button.
    CloseTapped,
    /// The child map component requested the map sub-view.
    MapPopupRequested,
    /// Pointer input on the visible panel.
    Pointer(PointerEvent),
    /// A data row was tapped.
    RowTapped(EntityId),
}

/// The vehicle-status widget.
pub struct VehicleCard {
    config: CardConfig,
    store: Arc<StateStore>,
    navigator: Navigator,
    swipe: SwipeTracker,
    locale: Locale,
    dark: bool,
}

impl VehicleCard {
    /// Create a card from validated configuration. Fails fast on a
    /// missing primary entity.
    pub fn new(config: CardConfig, store: Arc<StateStore>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            store,
            navigator: Navigator::new(),
            swipe: SwipeTracker::new(),
            locale: Locale::default(),
            dark: false,
        })
    }

    /// The host's active number-formatting locale.
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// The host's theme darkness (picks the header background).
    pub fn set_dark(&mut self, dark: bool) {
        self.dark = dark;
    }

    /// The currently shown sub-view; `None` is the summary.
    pub fn active_view(&self) -> Option<CardView> {
        self.navigator.active()
    }

    // ── Lifecycle ────────────────────────────────────────────────────

    /// Resolve the role mapping against the registry and publish it in
    /// one atomic replacement. Runs once per attachment; racing calls
    /// are allowed and the last write wins.
    pub async fn attach<R: EntityRegistry>(&self, registry: &R) -> Result<(), CoreError> {
        debug!(primary = %self.config.entity, "resolving vehicle entities");
        let resolved = resolve_all(registry, &self.config.primary_entity()).await?;
        self.store.set_resolved(resolved);
        Ok(())
    }

    /// Pull a fresh state snapshot from the runtime into the store.
    pub async fn refresh_states(&self, client: &RuntimeClient) -> Result<(), carsense_api::Error> {
        let states = client.list_states().await?;
        self.store.apply_states(
            states
                .into_iter()
                .map(|payload| (EntityId::from(payload.entity_id.as_str()), payload.into())),
        );
        Ok(())
    }

    // ── Event handling ───────────────────────────────────────────────

    /// Process one input event; returns a host notification to forward,
    /// when the event asks for one.
    pub fn handle(&mut self, event: CardEvent) -> Option<HostNotification> {
        match event {
            CardEvent::ButtonTapped(view) => {
                let active = self.navigator.open(view);
                debug!(?active, "view toggled");
                self.swipe.reset();
            }
            CardEvent::NextTapped => {
                self.navigator.next();
                self.swipe.reset();
            }
            CardEvent::PreviousTapped => {
                self.navigator.previous();
                self.swipe.reset();
            }
            CardEvent::CloseTapped => {
                self.navigator.close();
                self.swipe.reset();
            }
            CardEvent::MapPopupRequested => {
                self.navigator.open_map();
                self.swipe.reset();
            }
            CardEvent::Pointer(pointer) => {
                // Swipe navigation belongs to the cyclic content views;
                // the summary has no panel and the map owns its own
                // interaction model.
                if self
                    .navigator
                    .active()
                    .is_some_and(CardView::is_cyclic)
                {
                    if let Some(direction) = self.swipe.on_event(pointer) {
                        match direction {
                            SwipeDirection::Next => self.navigator.next(),
                            SwipeDirection::Previous => self.navigator.previous(),
                        };
                        self.swipe.reset();
                    }
                }
            }
            CardEvent::RowTapped(entity_id) => {
                if !entity_id.is_empty() {
                    return Some(HostNotification::MoreInfo { entity_id });
                }
            }
        }
        None
    }

    // ── View assembly ────────────────────────────────────────────────

    /// Compute the current frame's view model.
    pub fn view_model(&self) -> CardModel {
        let body = match self.navigator.active() {
            None => CardBody::Summary(self.summary_model()),
            Some(view) => CardBody::Detail(self.detail_model(view)),
        };

        CardModel {
            name: self.config.name.clone(),
            dark: self.dark,
            background: self.config.show_background.then(|| {
                if self.dark {
                    BACKGROUND_DARK
                } else {
                    BACKGROUND_LIGHT
                }
            }),
            body,
        }
    }

    fn summary_model(&self) -> SummaryModel {
        let resolved = self.store.resolved();

        SummaryModel {
            warnings: sections::summary_warnings(&self.store, &resolved),
            range: sections::range_info(&self.store, &resolved),
            slides: if self.config.show_slides {
                self.config.images.clone()
            } else {
                Vec::new()
            },
            map: self.config.show_map.then(|| self.map_model()),
            buttons: if self.config.show_buttons {
                sections::buttons(&self.store, &resolved, self.locale)
            } else {
                Vec::new()
            },
        }
    }

    fn detail_model(&self, view: CardView) -> DetailModel {
        if view == CardView::Map {
            return DetailModel {
                view,
                content: DetailContent::Map {
                    map: self.map_model(),
                },
                last_update: None,
            };
        }

        let custom = self.config.custom_cards(view);
        if custom.is_empty() {
            let resolved = self.store.resolved();
            DetailModel {
                view,
                content: DetailContent::Sections {
                    sections: sections::sections_for(view, &self.store, &resolved, self.locale),
                },
                last_update: self
                    .store
                    .last_changed(&self.config.primary_entity())
                    .map(format::format_timestamp),
            }
        } else {
            DetailModel {
                view,
                content: DetailContent::Custom {
                    cards: custom.to_vec(),
                },
                last_update: None,
            }
        }
    }

    fn map_model(&self) -> MapModel {
        match self.config.device_tracker() {
            Some(device_tracker) => MapModel::Panel {
                device_tracker,
                popup_enabled: self.config.enable_map_popup,
            },
            None => MapModel::MissingTracker {
                message: MISSING_TRACKER_WARNING.to_owned(),
            },
        }
    }
}
