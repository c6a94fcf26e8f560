//! `pev-reserve` — queries fleet availability for a time window and commits
//! exactly one vehicle to a rider.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                   |
//! |------------------|------------------------------------------------------------|
//! | [`availability`] | `FleetAvailability` trait                                  |
//! | [`fleet`]        | `InMemoryFleet` — roster + booking ledger                  |
//! | [`renter`]       | `Renter` trait, implemented for `pev_core::Rider`          |
//! | [`manager`]      | `ReservationManager`                                       |
//! | [`error`]        | `FleetError`, `RentError`, `ReservationError`              |
//!
//! # Design notes
//!
//! The manager is deliberately thin: it looks up the candidate set, picks
//! one member by a fixed deterministic policy, and issues *exactly one*
//! `rent` call with the window the caller supplied.  Everything stateful —
//! which vehicles are free, whether a commit conflicts with a concurrent
//! one — lives behind the [`availability::FleetAvailability`] boundary, so
//! the manager itself carries no shared mutable state and introduces no
//! races of its own.

pub mod availability;
pub mod error;
pub mod fleet;
pub mod manager;
pub mod renter;


pub use availability::FleetAvailability;
pub use error::{FleetError, RentError, ReservationError, ReserveResult};
pub use fleet::InMemoryFleet;
pub use manager::ReservationManager;
pub use renter::Renter;
