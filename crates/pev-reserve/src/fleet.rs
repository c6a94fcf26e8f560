//! In-memory fleet backend: a roster plus a booking ledger.

use pev_core::{Pev, PevId, TimeWindow};
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::{FleetAvailability, FleetError};

/// An in-process [`FleetAvailability`] backend.
///
/// Holds the full vehicle roster and every committed booking.  A vehicle is
/// available for a window iff none of its bookings overlaps that window;
/// [`book`][Self::book] enforces this again at commit time, so two callers
/// racing for overlapping windows cannot both succeed on the same vehicle —
/// the second commit fails with [`FleetError::Conflict`].
#[derive(Debug, Default, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InMemoryFleet {
    roster: Vec<Pev>,
    bookings: Vec<(PevId, TimeWindow)>,
}

impl InMemoryFleet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vehicle to the roster.
    pub fn add(&mut self, pev: Pev) {
        self.roster.push(pev);
    }

    /// Number of vehicles in the roster.
    pub fn roster_len(&self) -> usize {
        self.roster.len()
    }

    /// `true` if `pev` has no booking overlapping `window`.
    pub fn is_free(&self, pev: PevId, window: TimeWindow) -> bool {
        !self
            .bookings
            .iter()
            .any(|(booked, w)| *booked == pev && w.overlaps(window))
    }

    /// Commit a booking for `pev` over `window`.
    ///
    /// Fails with [`FleetError::Conflict`] if an overlapping booking for the
    /// same vehicle already exists; the ledger is unchanged in that case.
    pub fn book(&mut self, pev: PevId, window: TimeWindow) -> Result<(), FleetError> {
        if !self.is_free(pev, window) {
            return Err(FleetError::Conflict { pev, window });
        }
        debug!(%pev, %window, "booking committed");
        self.bookings.push((pev, window));
        Ok(())
    }
}

impl FleetAvailability for InMemoryFleet {
    fn find_available(&self, window: TimeWindow) -> Result<FxHashSet<Pev>, FleetError> {
        Ok(self
            .roster
            .iter()
            .filter(|pev| self.is_free(pev.id, window))
            .cloned()
            .collect())
    }
}
