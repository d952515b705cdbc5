//! Render-agnostic view models.
//!
//! The card computes *what* to show; the host's templating layer decides
//! *how*. Everything here is plain serializable data so a host bridge
//! can ship it across whatever boundary it likes.

use serde::Serialize;

use carsense_core::{CardView, EntityId};

/// The whole card, one frame's worth.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardModel {
    /// Header title.
    pub name: String,
    /// Host theme darkness, as last pushed by the host.
    pub dark: bool,
    /// Header background asset, when enabled.
    pub background: Option<&'static str>,
    pub body: CardBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardBody {
    Summary(SummaryModel),
    Detail(DetailModel),
}

// ── Summary view ────────────────────────────────────────────────────

/// The default face of the card: status chips, fuel/range bar, optional
/// slides and map, and the four view buttons.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryModel {
    pub warnings: Vec<InfoItem>,
    pub range: Option<RangeInfo>,
    pub slides: Vec<String>,
    pub map: Option<MapModel>,
    pub buttons: Vec<ButtonModel>,
}

/// A small icon + text chip in the header info box.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoItem {
    pub icon: String,
    pub text: String,
}

/// Fuel-level (or battery) bar with remaining range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeInfo {
    pub level_icon: String,
    pub level_text: String,
    /// Bar fill, 0–100.
    pub level_percent: f64,
    pub range_icon: String,
    pub range_text: String,
}

/// The map panel, or the inline warning that replaces it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MapModel {
    Panel {
        device_tracker: EntityId,
        popup_enabled: bool,
    },
    MissingTracker {
        message: String,
    },
}

/// One of the four view-toggle buttons.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ButtonModel {
    pub view: CardView,
    pub name: &'static str,
    pub icon: &'static str,
    /// Derived status line under the name (odometer, lock state, ...).
    pub secondary: String,
}

// ── Detail view ─────────────────────────────────────────────────────

/// An opened sub-view with its close / previous / next header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailModel {
    pub view: CardView,
    pub content: DetailContent,
    /// "Last update" footer, only on the built-in sections.
    pub last_update: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DetailContent {
    /// Built-in sections for this view.
    Sections { sections: Vec<Section> },
    /// User-configured sub-cards, embedded by the host.
    Custom { cards: Vec<serde_json::Value> },
    /// The map overlay.
    Map { map: MapModel },
}

/// A titled group of data rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub title: &'static str,
    pub rows: Vec<DataRow>,
}

/// One label/value line. Tapping it asks the host for the entity's
/// detail view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataRow {
    pub icon: Option<String>,
    pub label: String,
    pub value: String,
    pub entity_id: EntityId,
    /// Highlight the row as a problem indicator.
    pub warning: bool,
}
