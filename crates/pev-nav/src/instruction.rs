//! Navigation diagnostic value types.
//!
//! Both enums render to the fixed diagnostic strings the platform's rider
//! app displays verbatim, so their `Display` output is part of the public
//! contract and covered by tests.

use pev_core::Direction;

/// The outcome of one instruction query.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Instruction {
    /// The feed reported only zero-value defaults; no real telemetry exists.
    ConnectionLost,
    /// The vehicle sits exactly on the destination coordinates.
    DestinationReached,
    /// Drive `distance_km` kilometres towards `heading`.
    Drive {
        heading: Direction,
        distance_km: u64,
    },
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Instruction::ConnectionLost => f.write_str("connection lost"),
            Instruction::DestinationReached => f.write_str("destination reached"),
            Instruction::Drive { heading, distance_km } => {
                write!(f, "drive {heading} for {distance_km} more kilometers")
            }
        }
    }
}

/// The outcome of a liveness diagnosis, independent of any destination.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Connectivity {
    /// All three feed values are present and non-sentinel.
    Connected,
    /// At least one feed value is missing or stuck at its zero default.
    ConnectionProblem,
}

impl std::fmt::Display for Connectivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Connectivity::Connected => f.write_str("correctly connected"),
            Connectivity::ConnectionProblem => f.write_str("connection problem"),
        }
    }
}
