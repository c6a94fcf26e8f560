//! The rentable unit of the fleet.
//!
//! A `Pev` is a plain roster record: identity, range, home base, vehicle
//! class.  Rental status is deliberately *not* stored here — whether a
//! vehicle is free for a window is owned by the fleet/availability boundary,
//! so a `Pev` value never goes stale in the caller's hands.

use crate::PevId;

/// Vehicle class of a PEV.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum PevClass {
    #[default]
    EBike,
    EScooter,
    EMoped,
}

impl PevClass {
    /// Human-readable label, useful for logging and export columns.
    pub fn as_str(self) -> &'static str {
        match self {
            PevClass::EBike    => "e-bike",
            PevClass::EScooter => "e-scooter",
            PevClass::EMoped   => "e-moped",
        }
    }
}

impl std::fmt::Display for PevClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A personal electric vehicle in the fleet roster.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pev {
    /// Roster identity; unique within one fleet.
    pub id: PevId,
    /// Remaining range on a full charge, in kilometres.
    pub range_km: u32,
    /// Tag of the station the vehicle is homed at (e.g. `"MUC"`).
    pub home_base: String,
    /// Vehicle class.
    pub class: PevClass,
}

impl Pev {
    pub fn new(id: PevId, range_km: u32, home_base: impl Into<String>, class: PevClass) -> Self {
        Self { id, range_km, home_base: home_base.into(), class }
    }
}

impl std::fmt::Display for Pev {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({} km, base {})", self.class, self.id, self.range_km, self.home_base)
    }
}
