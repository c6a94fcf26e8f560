//! Position feed trait and a fixed in-memory implementation.
//!
//! # Pluggability
//!
//! The engine reads telemetry via the [`PositionFeed`] trait, so deployments
//! can plug in their real GPS/telemetry backend without touching the engine.
//! [`FixedPositionFeed`] is the in-process implementation used by tests and
//! demos.
//!
//! # No caching
//!
//! A feed read is a *live* query.  Implementations must not require the
//! caller to cache results, and the engine never does: each engine operation
//! performs exactly one [`PositionFeed::sample`].

use pev_core::{Direction, PevId, Position};
use rustc_hash::FxHashMap;

// ── PositionFeed trait ────────────────────────────────────────────────────────

/// Live source of per-vehicle telemetry.
///
/// A feed that has no real telemetry for a vehicle reports the zero-value
/// sentinel `(0, 0, None)`; the engine diagnoses that as a lost connection.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one engine can serve callers
/// from multiple threads.
pub trait PositionFeed: Send + Sync {
    /// Current X coordinate of `pev`, in kilometres.
    fn x(&self, pev: PevId) -> i64;

    /// Current Y coordinate of `pev`, in kilometres.
    fn y(&self, pev: PevId) -> i64;

    /// Current heading of `pev`, or `None` when undetermined.
    fn direction(&self, pev: PevId) -> Option<Direction>;

    /// Read all three values as one fresh [`Position`] snapshot.
    fn sample(&self, pev: PevId) -> Position {
        Position::new(self.x(pev), self.y(pev), self.direction(pev))
    }
}

// ── FixedPositionFeed ─────────────────────────────────────────────────────────

/// An in-memory [`PositionFeed`] holding one configured position per vehicle.
///
/// Vehicles that were never configured read as the zero-value sentinel
/// `(0, 0, None)` — the same defaults a dead telemetry link produces — which
/// makes this feed double as the "no connection" fixture in tests.
#[derive(Debug, Default, Clone)]
pub struct FixedPositionFeed {
    positions: FxHashMap<PevId, Position>,
}

impl FixedPositionFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or replace) the position reported for `pev`.
    pub fn place(&mut self, pev: PevId, position: Position) {
        self.positions.insert(pev, position);
    }

    /// Drop the configured position so `pev` reads as disconnected again.
    pub fn disconnect(&mut self, pev: PevId) {
        self.positions.remove(&pev);
    }

    fn get(&self, pev: PevId) -> Position {
        self.positions.get(&pev).copied().unwrap_or_default()
    }
}

impl PositionFeed for FixedPositionFeed {
    fn x(&self, pev: PevId) -> i64 {
        self.get(pev).x
    }

    fn y(&self, pev: PevId) -> i64 {
        self.get(pev).y
    }

    fn direction(&self, pev: PevId) -> Option<Direction> {
        self.get(pev).heading
    }
}
