//! High-level reservation manager: look up availability, pick one vehicle,
//! commit the rental.

use std::cmp::Reverse;

use pev_core::{Pev, TimeWindow};
use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use crate::{FleetAvailability, FleetError, Renter, ReservationError, ReserveResult};

/// Wraps a [`FleetAvailability`] backend and a [`Renter`] to turn "some
/// vehicle is free" into "this vehicle is rented".
///
/// # Type parameters
///
/// `F` is the availability backend (e.g. [`crate::InMemoryFleet`]); `R` is
/// whoever commits the rent action (typically a [`pev_core::Rider`]).  Both
/// are injected at construction; the renter can be swapped later via
/// [`set_renter`][Self::set_renter].
///
/// # Selection policy
///
/// When several vehicles are available the manager picks the one with the
/// largest remaining range, breaking ties by smallest [`pev_core::PevId`].
/// The policy is deterministic: equal candidate sets always produce the
/// same pick.
pub struct ReservationManager<F: FleetAvailability, R: Renter> {
    /// Who commits the rent action.  Swap via [`set_renter`][Self::set_renter].
    renter: R,
    /// The availability backend.
    pub fleet: F,
}

impl<F: FleetAvailability, R: Renter> ReservationManager<F, R> {
    pub fn new(renter: R, fleet: F) -> Self {
        Self { renter, fleet }
    }

    /// Replace the acting renter for subsequent reservations.
    pub fn set_renter(&mut self, renter: R) {
        self.renter = renter;
    }

    /// The current acting renter.
    pub fn renter(&self) -> &R {
        &self.renter
    }

    /// Every vehicle free for the whole of `window`.
    ///
    /// Pure pass-through to the backend: no filtering, no caching, so equal
    /// windows against an unchanged backend yield equal sets.  Backend
    /// errors propagate unchanged.
    pub fn lookup_available(&self, window: TimeWindow) -> Result<FxHashSet<Pev>, FleetError> {
        let available = self.fleet.find_available(window)?;
        debug!(%window, candidates = available.len(), "availability lookup");
        Ok(available)
    }

    /// Reserve the fitting vehicle for `window`.
    ///
    /// Looks up the candidate set, selects one member, and issues exactly
    /// one rent call with the window supplied here.  An empty candidate set
    /// fails with [`ReservationError::NoAvailability`] before any rent call;
    /// no retry is attempted on any failure.
    pub fn reserve_fitting(&mut self, window: TimeWindow) -> ReserveResult<Pev> {
        let available = self.lookup_available(window)?;

        let Some(chosen) = Self::fitting(&available) else {
            warn!(%window, "no PEV available");
            return Err(ReservationError::NoAvailability(window));
        };
        let chosen = chosen.clone();

        self.renter.rent(&chosen, window)?;
        debug!(pev = %chosen.id, %window, "reservation committed");
        Ok(chosen)
    }

    /// The fitting vehicle of a candidate set: largest range, then smallest
    /// ID.  `None` iff the set is empty.
    fn fitting(candidates: &FxHashSet<Pev>) -> Option<&Pev> {
        candidates.iter().max_by_key(|pev| (pev.range_km, Reverse(pev.id)))
    }
}
