//! Built-in content for the four sub-views and the summary face.
//!
//! Everything here derives display data from two read-only inputs: the
//! live state store and the resolved role mapping. Rows whose role never
//! resolved (or lost its name) are silently omitted — an unresolved role
//! is not an error.

use carsense_core::{
    CardView, EntityId, Locale, ResolvedEntity, StateStore, TripRole, WarningRole, format,
    resolver::ResolvedEntities,
};

use crate::view::{ButtonModel, DataRow, InfoItem, RangeInfo, Section};

// ── Summary face ────────────────────────────────────────────────────

/// Lock and park-brake chips for the header info box.
pub fn summary_warnings(store: &StateStore, resolved: &ResolvedEntities) -> Vec<InfoItem> {
    let mut items = Vec::with_capacity(2);

    let lock = resolved.warning(WarningRole::Lock);
    if let Some(state) = store.value(&lock.entity_id) {
        items.push(InfoItem {
            icon: lock_icon(&state).to_owned(),
            text: state,
        });
    }

    let park_brake = resolved.warning(WarningRole::ParkBrake);
    if store.is_on(&park_brake.entity_id) {
        items.push(InfoItem {
            icon: "mdi:car-brake-parking".to_owned(),
            text: "Parked".to_owned(),
        });
    }

    items
}

/// Fuel/range bar, falling back to battery/electric range for EVs.
pub fn range_info(store: &StateStore, resolved: &ResolvedEntities) -> Option<RangeInfo> {
    let fuel = resolved.trip(TripRole::FuelLevel);
    let range_liquid = resolved.trip(TripRole::RangeLiquid);

    if let (Some(level), Some(range)) = (
        nonempty_value(store, &fuel.entity_id),
        nonempty_value(store, &range_liquid.entity_id),
    ) {
        return Some(RangeInfo {
            level_icon: "mdi:gas-station".to_owned(),
            level_percent: store.numeric(&fuel.entity_id).unwrap_or(0.0).clamp(0.0, 100.0),
            level_text: with_unit(&level, &store.unit(&fuel.entity_id)),
            range_icon: String::new(),
            range_text: with_unit(&range, &store.unit(&range_liquid.entity_id)),
        });
    }

    let soc = resolved.trip(TripRole::Soc);
    let range_electric = resolved.trip(TripRole::RangeElectric);

    if let (Some(level), Some(range)) = (
        nonempty_value(store, &soc.entity_id),
        nonempty_value(store, &range_electric.entity_id),
    ) {
        return Some(RangeInfo {
            level_icon: "mdi:ev-station".to_owned(),
            level_percent: store.numeric(&soc.entity_id).unwrap_or(0.0).clamp(0.0, 100.0),
            level_text: with_unit(&level, &store.unit(&soc.entity_id)),
            range_icon: "mdi:battery".to_owned(),
            range_text: with_unit(&range, &store.unit(&range_electric.entity_id)),
        });
    }

    None
}

/// The four view-toggle buttons with their derived status lines.
pub fn buttons(store: &StateStore, resolved: &ResolvedEntities, locale: Locale) -> Vec<ButtonModel> {
    CardView::CYCLE
        .iter()
        .map(|&view| ButtonModel {
            view,
            name: view.label(),
            icon: view.icon(),
            secondary: secondary_info(view, store, resolved, locale),
        })
        .collect()
}

/// The status line under a button's name.
fn secondary_info(
    view: CardView,
    store: &StateStore,
    resolved: &ResolvedEntities,
    locale: Locale,
) -> String {
    match view {
        CardView::Trip => {
            let odometer = resolved.trip(TripRole::Odometer);
            display_value(store, &odometer.entity_id, locale)
        }
        CardView::Vehicle => {
            let lock = resolved.warning(WarningRole::Lock);
            match store.value(&lock.entity_id).as_deref() {
                Some("locked") => "Locked".to_owned(),
                _ => "Unlocked".to_owned(),
            }
        }
        CardView::Eco => {
            let bonus = resolved.trip(TripRole::EcoScoreBonusRange);
            display_value(store, &bonus.entity_id, locale)
        }
        CardView::Tyre => tyre_summary(store, resolved).unwrap_or_default(),
        CardView::Map => String::new(),
    }
}

/// Min–max tyre pressure line, e.g. `"30 - 34 psi"`.
pub fn tyre_summary(store: &StateStore, resolved: &ResolvedEntities) -> Option<String> {
    let ids: Vec<EntityId> = TripRole::TIRE_PRESSURES
        .iter()
        .map(|&role| resolved.trip(role).entity_id)
        .collect();

    let pressures: Vec<f64> = ids.iter().filter_map(|id| store.numeric(id)).collect();
    let unit = ids
        .iter()
        .map(|id| store.unit(id))
        .find(|unit| !unit.is_empty())
        .unwrap_or_default();

    format::pressure_range_summary(&pressures, &unit)
}

// ── Detail sections ─────────────────────────────────────────────────

/// Built-in sections for a content view. The map has no sections.
pub fn sections_for(
    view: CardView,
    store: &StateStore,
    resolved: &ResolvedEntities,
    locale: Locale,
) -> Vec<Section> {
    match view {
        CardView::Trip => trip_sections(store, resolved, locale),
        CardView::Vehicle => vehicle_sections(store, resolved),
        CardView::Eco => vec![eco_section(store, resolved, locale)],
        CardView::Tyre => vec![tyre_section(store, resolved, locale)],
        CardView::Map => Vec::new(),
    }
}

fn trip_sections(store: &StateStore, resolved: &ResolvedEntities, locale: Locale) -> Vec<Section> {
    let overview = [
        (TripRole::Odometer, None),
        (TripRole::FuelLevel, None),
        (TripRole::Soc, None),
        (TripRole::RangeLiquid, None),
    ];
    let from_start = [
        (TripRole::DistanceStart, None),
        (TripRole::AverageSpeedStart, Some("mdi:speedometer-slow")),
        (TripRole::LiquidConsumptionStart, None),
        (TripRole::ElectricConsumptionStart, None),
    ];
    let from_reset = [
        (TripRole::DistanceReset, None),
        (TripRole::AverageSpeedReset, Some("mdi:speedometer")),
        (TripRole::LiquidConsumptionReset, None),
        (TripRole::ElectricConsumptionReset, None),
    ];

    vec![
        trip_section("Overview", &overview, store, resolved, locale),
        trip_section("From start", &from_start, store, resolved, locale),
        trip_section("From reset", &from_reset, store, resolved, locale),
    ]
}

fn trip_section(
    title: &'static str,
    roles: &[(TripRole, Option<&str>)],
    store: &StateStore,
    resolved: &ResolvedEntities,
    locale: Locale,
) -> Section {
    let rows = roles
        .iter()
        .filter_map(|&(role, icon)| trip_row(store, resolved, role, icon, locale))
        .collect();
    Section { title, rows }
}

fn trip_row(
    store: &StateStore,
    resolved: &ResolvedEntities,
    role: TripRole,
    icon_override: Option<&str>,
    locale: Locale,
) -> Option<DataRow> {
    let entity = renderable(resolved.trip(role))?;
    let icon = icon_override
        .map(str::to_owned)
        .or_else(|| store.icon(&entity.entity_id));

    Some(DataRow {
        icon,
        label: entity.original_name,
        value: display_value(store, &entity.entity_id, locale),
        entity_id: entity.entity_id,
        warning: false,
    })
}

fn vehicle_sections(store: &StateStore, resolved: &ResolvedEntities) -> Vec<Section> {
    let mut status_rows = Vec::with_capacity(3);

    if let Some(lock) = renderable(resolved.warning(WarningRole::Lock)) {
        let state = store.value(&lock.entity_id).unwrap_or_default();
        status_rows.push(DataRow {
            icon: Some(lock_icon(&state).to_owned()),
            label: lock.original_name,
            value: state.clone(),
            entity_id: lock.entity_id,
            warning: state == "locked",
        });
    }

    if let Some(brake) = renderable(resolved.warning(WarningRole::ParkBrake)) {
        let on = store.is_on(&brake.entity_id);
        status_rows.push(boolean_row(store, brake, on, "Parked", "Not Parked"));
    }

    if let Some(windows) = renderable(resolved.warning(WarningRole::WindowsClosed)) {
        let on = store.is_on(&windows.entity_id);
        status_rows.push(boolean_row(store, windows, on, "Closed", "Opened"));
    }

    let warning_roles = [
        WarningRole::Tire,
        WarningRole::LowBrakeFluid,
        WarningRole::LowCoolantLevel,
        WarningRole::EngineLight,
        WarningRole::LowWashWater,
    ];
    let warning_rows = warning_roles
        .iter()
        .filter_map(|&role| {
            let entity = renderable(resolved.warning(role))?;
            let on = store.is_on(&entity.entity_id);
            Some(boolean_row(store, entity, on, "Problem", "Ok"))
        })
        .collect();

    vec![
        Section {
            title: "Vehicle status",
            rows: status_rows,
        },
        Section {
            title: "Warnings",
            rows: warning_rows,
        },
    ]
}

fn eco_section(store: &StateStore, resolved: &ResolvedEntities, locale: Locale) -> Section {
    let roles = [
        (TripRole::EcoScoreBonusRange, None),
        (TripRole::EcoScoreAcceleration, None),
        (TripRole::EcoScoreConstant, None),
        (TripRole::EcoScoreFreeWheel, None),
    ];
    trip_section("Eco display", &roles, store, resolved, locale)
}

fn tyre_section(store: &StateStore, resolved: &ResolvedEntities, locale: Locale) -> Section {
    let roles = [
        (TripRole::TirePressureFrontLeft, Some("mdi:tire")),
        (TripRole::TirePressureFrontRight, Some("mdi:tire")),
        (TripRole::TirePressureRearLeft, Some("mdi:tire")),
        (TripRole::TirePressureRearRight, Some("mdi:tire")),
    ];
    trip_section("Tyre pressures", &roles, store, resolved, locale)
}

// ── Row helpers ─────────────────────────────────────────────────────

/// A role is renderable once it has both an identifier and a name.
fn renderable(entity: ResolvedEntity) -> Option<ResolvedEntity> {
    (entity.is_resolved() && !entity.original_name.is_empty()).then_some(entity)
}

fn boolean_row(
    store: &StateStore,
    entity: ResolvedEntity,
    on: bool,
    on_text: &str,
    off_text: &str,
) -> DataRow {
    DataRow {
        icon: store.icon(&entity.entity_id),
        label: entity.original_name,
        value: if on { on_text } else { off_text }.to_owned(),
        entity_id: entity.entity_id,
        warning: on,
    }
}

fn lock_icon(state: &str) -> &'static str {
    if state == "locked" {
        "mdi:lock"
    } else {
        "mdi:lock-open"
    }
}

/// The state rendered for display: numbers are locale-formatted, units
/// appended when known.
fn display_value(store: &StateStore, id: &EntityId, locale: Locale) -> String {
    let Some(raw) = nonempty_value(store, id) else {
        return String::new();
    };
    let text = match store.numeric(id) {
        Some(number) => format::format_number(number, locale),
        None => raw,
    };
    with_unit(&text, &store.unit(id))
}

fn nonempty_value(store: &StateStore, id: &EntityId) -> Option<String> {
    store.value(id).filter(|v| !v.is_empty())
}

fn with_unit(text: &str, unit: &str) -> String {
    if unit.is_empty() {
        text.to_owned()
    } else {
        format!("{text} {unit}")
    }
}
