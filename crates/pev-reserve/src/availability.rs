//! Fleet availability trait.
//!
//! # Pluggability
//!
//! The manager queries availability via the [`FleetAvailability`] trait, so
//! deployments can plug in their booking backend (central fleet service,
//! station database…) without touching the reservation logic.  The default
//! in-process implementation is [`crate::InMemoryFleet`].

use pev_core::{Pev, TimeWindow};
use rustc_hash::FxHashSet;

use crate::FleetError;

/// Source of "which vehicles are free for this window?" answers.
///
/// # Contract
///
/// * A returned vehicle must be free for the *entire* window.
/// * Two queries with an equal window against an unchanged backend yield
///   equal sets.
/// * Overlapping-window commit serialization is the backend's guarantee:
///   once a vehicle is committed for a window, later queries for any
///   overlapping window must no longer return it.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one manager can sit behind a
/// shared reference.
pub trait FleetAvailability: Send + Sync {
    /// Every vehicle free for the whole of `window`.
    fn find_available(&self, window: TimeWindow) -> Result<FxHashSet<Pev>, FleetError>;
}
