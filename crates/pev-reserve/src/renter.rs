//! The rent action the manager commits through.

use pev_core::{Eligibility, Pev, Rider, TimeWindow};
use tracing::debug;

use crate::RentError;

/// The acting party of a rental commit.
///
/// The manager calls [`rent`][Renter::rent] exactly once per successful
/// reservation, with the chosen vehicle and the caller's original window.
/// Whether the action succeeds is the implementor's business — eligibility
/// rules, payment holds and booking persistence all live behind this seam.
pub trait Renter: Send + Sync {
    /// Rent `pev` for `window`.
    fn rent(&mut self, pev: &Pev, window: TimeWindow) -> Result<(), RentError>;
}

/// A [`Rider`] rents directly, subject to its own eligibility rules:
/// helmet on, license valid at the window start, old enough to ride.
impl Renter for Rider {
    fn rent(&mut self, pev: &Pev, window: TimeWindow) -> Result<(), RentError> {
        match self.eligibility(window.from) {
            Eligibility::Eligible => {
                debug!(rider = %self.id, %pev, %window, "rent action issued");
                Ok(())
            }
            Eligibility::NoHelmet => Err(RentError::NoHelmet),
            Eligibility::LicenseExpired => Err(RentError::LicenseExpired),
            Eligibility::UnderAge => Err(RentError::UnderAge { age: self.age }),
        }
    }
}
