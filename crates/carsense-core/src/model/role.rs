// ── Semantic roles and their matcher table ──
//
// Each role names a slot the widget knows how to display ("fuel level",
// "park brake"); the resolver binds roles to concrete entity identifiers
// by the prefix/suffix convention the vehicle integration uses when it
// registers sensors. The tables below are the single source of truth for
// that convention — no string parsing happens anywhere near render code.

use indexmap::IndexMap;
use strum::{Display, EnumIter, IntoEnumIterator};

/// Identifier pattern a role must match: the registry row's id has to
/// start with `prefix` and end with `suffix`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleFilter {
    pub prefix: &'static str,
    pub suffix: &'static str,
}

impl RoleFilter {
    /// Whether an entity identifier satisfies this filter.
    pub fn matches(&self, entity_id: &str) -> bool {
        entity_id.starts_with(self.prefix) && entity_id.ends_with(self.suffix)
    }
}

// ── Warning roles ───────────────────────────────────────────────────

/// Vehicle-status and warning-lamp slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum WarningRole {
    Lock,
    ParkBrake,
    WindowsClosed,
    Tire,
    LowBrakeFluid,
    LowCoolantLevel,
    EngineLight,
    LowWashWater,
}

impl WarningRole {
    /// The identifier pattern this role matches.
    pub const fn filter(self) -> RoleFilter {
        match self {
            Self::Lock => RoleFilter {
                prefix: "lock.",
                suffix: "_lock",
            },
            Self::ParkBrake => RoleFilter {
                prefix: "binary_sensor.",
                suffix: "_parkbrakestatus",
            },
            Self::WindowsClosed => RoleFilter {
                prefix: "binary_sensor.",
                suffix: "_windowsclosed",
            },
            Self::Tire => RoleFilter {
                prefix: "binary_sensor.",
                suffix: "_tirewarninglamp",
            },
            Self::LowBrakeFluid => RoleFilter {
                prefix: "binary_sensor.",
                suffix: "_warningbrakefluid",
            },
            Self::LowCoolantLevel => RoleFilter {
                prefix: "binary_sensor.",
                suffix: "_warningcoolantlevellow",
            },
            Self::EngineLight => RoleFilter {
                prefix: "binary_sensor.",
                suffix: "_warningenginelight",
            },
            Self::LowWashWater => RoleFilter {
                prefix: "binary_sensor.",
                suffix: "_warningwashwater",
            },
        }
    }
}

// ── Trip roles ──────────────────────────────────────────────────────

/// Trip, range, eco-score, and tyre-pressure slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum TripRole {
    Odometer,
    FuelLevel,
    RangeLiquid,
    RangeElectric,
    Soc,
    DistanceStart,
    AverageSpeedStart,
    LiquidConsumptionStart,
    ElectricConsumptionStart,
    DistanceReset,
    AverageSpeedReset,
    LiquidConsumptionReset,
    ElectricConsumptionReset,
    EcoScoreBonusRange,
    EcoScoreAcceleration,
    EcoScoreConstant,
    EcoScoreFreeWheel,
    TirePressureFrontLeft,
    TirePressureFrontRight,
    TirePressureRearLeft,
    TirePressureRearRight,
}

impl TripRole {
    /// The identifier pattern this role matches. All trip roles are plain
    /// sensors; only the suffix differs.
    pub const fn filter(self) -> RoleFilter {
        let suffix = match self {
            Self::Odometer => "_odometer",
            Self::FuelLevel => "_fuellevel",
            Self::RangeLiquid => "_rangeliquid",
            Self::RangeElectric => "_rangeelectrickm",
            Self::Soc => "_soc",
            Self::DistanceStart => "_distancestart",
            Self::AverageSpeedStart => "_averagespeedstart",
            Self::LiquidConsumptionStart => "_liquidconsumptionstart",
            Self::ElectricConsumptionStart => "_electricconsumptionstart",
            Self::DistanceReset => "_distancereset",
            Self::AverageSpeedReset => "_averagespeedreset",
            Self::LiquidConsumptionReset => "_liquidconsumptionreset",
            Self::ElectricConsumptionReset => "_electricconsumptionreset",
            Self::EcoScoreBonusRange => "_ecoscorebonusrange",
            Self::EcoScoreAcceleration => "_ecoscoreaccel",
            Self::EcoScoreConstant => "_ecoscoreconstant",
            Self::EcoScoreFreeWheel => "_ecoscorefreewheel",
            Self::TirePressureFrontLeft => "_tirepressurefrontleft",
            Self::TirePressureFrontRight => "_tirepressurefrontright",
            Self::TirePressureRearLeft => "_tirepressurerearleft",
            Self::TirePressureRearRight => "_tirepressurerearright",
        };
        RoleFilter {
            prefix: "sensor.",
            suffix,
        }
    }

    /// The four tyre-pressure roles, in front-left / front-right /
    /// rear-left / rear-right order.
    pub const TIRE_PRESSURES: [Self; 4] = [
        Self::TirePressureFrontLeft,
        Self::TirePressureFrontRight,
        Self::TirePressureRearLeft,
        Self::TirePressureRearRight,
    ];
}

// ── Declarative matcher tables ──────────────────────────────────────

/// The warning-role matcher table, in declaration order.
pub fn warning_filters() -> IndexMap<WarningRole, RoleFilter> {
    WarningRole::iter().map(|role| (role, role.filter())).collect()
}

/// The trip-role matcher table, in declaration order.
pub fn trip_filters() -> IndexMap<TripRole, RoleFilter> {
    TripRole::iter().map(|role| (role, role.filter())).collect()
}
