//! `pev-core` — foundational types for the PEV sharing engine.
//!
//! This crate is a dependency of every other `pev-*` crate.  It intentionally
//! has no `pev-*` dependencies and minimal external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                            |
//! |---------------|-----------------------------------------------------|
//! | [`ids`]       | `PevId`, `RiderId`                                  |
//! | [`time`]      | `Timestamp`, `TimeWindow`                           |
//! | [`direction`] | `Direction` cardinal heading                        |
//! | [`position`]  | `Position`, `Destination`                           |
//! | [`vehicle`]   | `Pev`, `PevClass`                                   |
//! | [`rider`]     | `Rider`, `DriversLicense`, `Eligibility`            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.       |

pub mod direction;
pub mod ids;
pub mod position;
pub mod rider;
pub mod time;
pub mod vehicle;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use direction::Direction;
pub use ids::{PevId, RiderId};
pub use position::{Destination, Position};
pub use rider::{DriversLicense, Eligibility, Rider};
pub use time::{TimeWindow, Timestamp};
pub use vehicle::{Pev, PevClass};
