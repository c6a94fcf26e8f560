//! Reservation error taxonomy.
//!
//! An empty candidate set is the *only* condition the manager turns into an
//! error of its own ([`ReservationError::NoAvailability`]).  Everything else
//! — backend trouble, rejected rent actions — originates at a collaborator
//! and passes through wrapped only by a `From` conversion, source intact.

use pev_core::{PevId, TimeWindow};
use thiserror::Error;

/// Failure raised by a fleet availability backend.
#[derive(Debug, Error)]
pub enum FleetError {
    #[error("fleet backend error: {0}")]
    Backend(String),

    #[error("I/O error talking to fleet backend: {0}")]
    Io(#[from] std::io::Error),

    #[error("{pev} is already booked for a window overlapping {window}")]
    Conflict { pev: PevId, window: TimeWindow },
}

/// Why a rent action was refused.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RentError {
    #[error("rider has no helmet")]
    NoHelmet,

    #[error("rider's license is expired at the start of the rental")]
    LicenseExpired,

    #[error("rider is {age}, below the minimum PEV age")]
    UnderAge { age: u8 },
}

/// Failure of one reservation attempt.  Never retried internally.
#[derive(Debug, Error)]
pub enum ReservationError {
    #[error("no PEV found for the time frame {0}")]
    NoAvailability(TimeWindow),

    #[error(transparent)]
    Fleet(#[from] FleetError),

    #[error(transparent)]
    Rent(#[from] RentError),
}

/// Shorthand result type for reservation operations.
pub type ReserveResult<T> = Result<T, ReservationError>;
