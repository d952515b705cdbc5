//! View navigation state machine.
//!
//! Owns "which sub-view is currently shown". The four content views form
//! a fixed cyclic order for next/previous; the map sits outside the cycle
//! and is only entered through [`Navigator::open_map`] and left through
//! an explicit close.

use serde::{Deserialize, Serialize};
use strum::Display;

/// A stacked sub-view of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardView {
    Trip,
    Vehicle,
    Eco,
    Tyre,
    Map,
}

impl CardView {
    /// The cyclable content views, in next() order.
    pub const CYCLE: [CardView; 4] = [Self::Trip, Self::Vehicle, Self::Eco, Self::Tyre];

    /// Whether this view participates in next/previous cycling.
    pub fn is_cyclic(self) -> bool {
        self.cycle_index().is_some()
    }

    fn cycle_index(self) -> Option<usize> {
        Self::CYCLE.iter().position(|&v| v == self)
    }

    /// Button label for this view.
    pub fn label(self) -> &'static str {
        match self {
            Self::Trip => "Trip data",
            Self::Vehicle => "Vehicle status",
            Self::Eco => "Eco display",
            Self::Tyre => "Tyre pressure",
            Self::Map => "Map",
        }
    }

    /// Button icon for this view.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Trip => "mdi:map-marker-path",
            Self::Vehicle => "mdi:car-info",
            Self::Eco => "mdi:leaf",
            Self::Tyre => "mdi:tire",
            Self::Map => "mdi:map",
        }
    }
}

/// The card's navigation state machine.
///
/// Starts at the summary view (`None`) and never terminates; every
/// transition is driven by an explicit user action.
#[derive(Debug, Default)]
pub struct Navigator {
    active: Option<CardView>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently shown sub-view; `None` is the summary view.
    pub fn active(&self) -> Option<CardView> {
        self.active
    }

    /// Open a view, or toggle-close it when it is already active.
    pub fn open(&mut self, view: CardView) -> Option<CardView> {
        self.active = if self.active == Some(view) {
            None
        } else {
            Some(view)
        };
        self.active
    }

    /// Advance to the next content view (wraps around). No-op on the
    /// summary and map views.
    pub fn next(&mut self) -> Option<CardView> {
        self.step(1)
    }

    /// Go back to the previous content view (wraps around). No-op on the
    /// summary and map views.
    pub fn previous(&mut self) -> Option<CardView> {
        self.step(CardView::CYCLE.len() - 1)
    }

    /// Return to the summary view.
    pub fn close(&mut self) {
        self.active = None;
    }

    /// Jump to the map view, from any state.
    pub fn open_map(&mut self) {
        self.active = Some(CardView::Map);
    }

    fn step(&mut self, offset: usize) -> Option<CardView> {
        if let Some(idx) = self.active.and_then(CardView::cycle_index) {
            self.active = Some(CardView::CYCLE[(idx + offset) % CardView::CYCLE.len()]);
        }
        self.active
    }
}
