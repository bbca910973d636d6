//! Display unit systems
//!
//! Every measurement is stored in canonical SI units (meters, meters per
//! second, minutes per kilometer). A [`UnitSystem`] converts those values to
//! the scale a user chose and names the resulting units.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Yards per meter
const YARDS_PER_METER: f64 = 1.093613;

/// Miles per kilometer
const MILES_PER_KILOMETER: f64 = 0.621371;

/// Kilometers per hour in one meter per second
const KMH_PER_MPS: f64 = 3.6;

/// Miles per hour in one meter per second
const MPH_PER_MPS: f64 = 2.236936;

/// Conversion factors and labels of a single unit system
#[derive(Debug, Clone, Copy, PartialEq)]
struct UnitTable {
    id: i32,
    name: &'static str,
    /// Multiplier from meters to the display distance scale
    meters_factor: f64,
    /// Multiplier from kilometers to the long distance unit
    kilometers_factor: f64,
    /// Multiplier from meters per second to the speed unit
    speed_factor: f64,
    short_distance_unit: &'static str,
    long_distance_unit: &'static str,
    speed_unit: &'static str,
}

const METRIC: UnitTable = UnitTable {
    id: 1,
    name: "Metric",
    meters_factor: 1.0,
    kilometers_factor: 1.0,
    speed_factor: KMH_PER_MPS,
    short_distance_unit: "m",
    long_distance_unit: "km",
    speed_unit: "km/h",
};

const METRIC_PHYSICAL: UnitTable = UnitTable {
    id: 2,
    name: "Metric (physical)",
    meters_factor: 1.0,
    kilometers_factor: 1.0,
    speed_factor: 1.0,
    short_distance_unit: "m",
    long_distance_unit: "km",
    speed_unit: "m/s",
};

const IMPERIAL_YARDS: UnitTable = UnitTable {
    id: 3,
    name: "Imperial (yards)",
    meters_factor: YARDS_PER_METER,
    kilometers_factor: MILES_PER_KILOMETER,
    speed_factor: MPH_PER_MPS,
    short_distance_unit: "yd",
    long_distance_unit: "mi",
    speed_unit: "mph",
};

const IMPERIAL_METERS: UnitTable = UnitTable {
    id: 4,
    name: "Imperial (meters)",
    meters_factor: 1.0,
    kilometers_factor: MILES_PER_KILOMETER,
    speed_factor: MPH_PER_MPS,
    short_distance_unit: "m",
    long_distance_unit: "mi",
    speed_unit: "mph",
};

/// User-selectable display unit system
///
/// Ids are persisted in user settings and must never be reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnitSystem {
    /// Meters, kilometers and km/h
    #[default]
    Metric,
    /// Meters, kilometers and m/s
    MetricPhysical,
    /// Yards, miles and mph
    ImperialYards,
    /// Meters, miles and mph
    ImperialMeters,
}

impl UnitSystem {
    /// All supported systems in selection order
    pub const ALL: [UnitSystem; 4] = [
        UnitSystem::Metric,
        UnitSystem::MetricPhysical,
        UnitSystem::ImperialYards,
        UnitSystem::ImperialMeters,
    ];

    fn table(self) -> &'static UnitTable {
        match self {
            UnitSystem::Metric => &METRIC,
            UnitSystem::MetricPhysical => &METRIC_PHYSICAL,
            UnitSystem::ImperialYards => &IMPERIAL_YARDS,
            UnitSystem::ImperialMeters => &IMPERIAL_METERS,
        }
    }

    /// Look up a system by its persisted id
    pub fn from_id(id: i32) -> Option<UnitSystem> {
        Self::ALL.into_iter().find(|system| system.id() == id)
    }

    /// Stable persisted identifier
    pub fn id(self) -> i32 {
        self.table().id
    }

    /// Human-readable name for listings
    pub fn name(self) -> &'static str {
        self.table().name
    }

    /// Convert meters to the display distance scale.
    ///
    /// The result is expressed in [`short_distance_unit`](Self::short_distance_unit).
    pub fn distance_from_meters(self, meters: f64) -> f64 {
        meters * self.table().meters_factor
    }

    /// Convert kilometers to the long distance unit
    pub fn distance_from_kilometers(self, kilometers: f64) -> f64 {
        kilometers * self.table().kilometers_factor
    }

    pub fn speed_from_meters_per_second(self, meters_per_second: f64) -> f64 {
        meters_per_second * self.table().speed_factor
    }

    pub fn short_distance_unit(self) -> &'static str {
        self.table().short_distance_unit
    }

    pub fn long_distance_unit(self) -> &'static str {
        self.table().long_distance_unit
    }

    pub fn speed_unit(self) -> &'static str {
        self.table().speed_unit
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for UnitSystem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i32(self.id())
    }
}

impl<'de> Deserialize<'de> for UnitSystem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = i32::deserialize(deserializer)?;
        UnitSystem::from_id(id)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown unit system id: {}", id)))
    }
}
