//! High-level navigation engine: per-call instruction and liveness queries.

use pev_core::{Destination, Direction, PevId, Position};
use tracing::{debug, warn};

use crate::{Connectivity, Instruction, PositionFeed};

/// Wraps a [`PositionFeed`] to answer per-vehicle navigation queries.
///
/// # Type parameter
///
/// `F` must implement [`PositionFeed`] (e.g. [`crate::FixedPositionFeed`]).
/// Swap it at compile time for the real telemetry backend with no runtime
/// overhead.
///
/// # Statelessness
///
/// The engine keeps nothing between calls.  Each operation samples the feed
/// exactly once and computes its answer from that snapshot, so a caller's
/// retry policy fully controls how often the (possibly slow or unreliable)
/// feed is hit.
pub struct NavigationEngine<F: PositionFeed> {
    /// The live telemetry source.
    pub feed: F,
}

impl<F: PositionFeed> NavigationEngine<F> {
    pub fn new(feed: F) -> Self {
        Self { feed }
    }

    /// The current driving instruction for `pev` heading to `destination`.
    ///
    /// Checks run in a fixed order on one fresh sample:
    ///
    /// 1. the zero-value sentinel `(0, 0, None)` short-circuits to
    ///    [`Instruction::ConnectionLost`] before any distance arithmetic;
    /// 2. exact coordinate equality yields [`Instruction::DestinationReached`];
    /// 3. otherwise one cardinal [`Instruction::Drive`] step is emitted.
    pub fn instructions(&self, pev: PevId, destination: &Destination) -> Instruction {
        let position = self.feed.sample(pev);
        if position.is_sentinel() {
            warn!(%pev, "feed returned only defaults, diagnosing lost connection");
            return Instruction::ConnectionLost;
        }
        if destination.reached_by(position) {
            return Instruction::DestinationReached;
        }
        let step = Self::towards(position, destination);
        debug!(%pev, %position, %destination, instruction = %step, "issued driving instruction");
        step
    }

    /// Liveness diagnosis for `pev`, independent of any destination.
    ///
    /// [`Connectivity::Connected`] requires all three readings to be present
    /// and non-sentinel: both coordinates non-zero and a known heading.
    pub fn connectivity(&self, pev: PevId) -> Connectivity {
        let position = self.feed.sample(pev);
        if position.x != 0 && position.y != 0 && position.heading.is_some() {
            Connectivity::Connected
        } else {
            Connectivity::ConnectionProblem
        }
    }

    /// The single cardinal step from the current position to `destination`.
    ///
    /// Unlike [`instructions`][Self::instructions] this performs no
    /// connectivity check — it answers purely from the sampled coordinates,
    /// returning [`Instruction::DestinationReached`] when they already match.
    pub fn direction_distance(&self, pev: PevId, destination: &Destination) -> Instruction {
        Self::towards(self.feed.sample(pev), destination)
    }

    /// Pick the axis to advance on and format the drive step.
    ///
    /// Tie-break when both axes are off-target: the axis the vehicle is
    /// already facing down wins (no immediate turn required).  When the
    /// heading makes progress on neither axis, the larger absolute delta
    /// wins, and an exact tie prefers Y over X.
    fn towards(position: Position, destination: &Destination) -> Instruction {
        let dx = destination.x - position.x;
        let dy = destination.y - position.y;
        if dx == 0 && dy == 0 {
            return Instruction::DestinationReached;
        }

        let vertical = Instruction::Drive {
            heading: if dy > 0 { Direction::North } else { Direction::South },
            distance_km: dy.unsigned_abs(),
        };
        let horizontal = Instruction::Drive {
            heading: if dx > 0 { Direction::East } else { Direction::West },
            distance_km: dx.unsigned_abs(),
        };

        if dy == 0 {
            return horizontal;
        }
        if dx == 0 {
            return vertical;
        }

        match position.heading.and_then(|h| Self::aligned_step(h, dx, dy)) {
            Some(step) => step,
            None if dy.abs() >= dx.abs() => vertical,
            None => horizontal,
        }
    }

    /// The drive step along the axis of `heading`, if continuing straight
    /// ahead actually closes the gap on that axis.
    fn aligned_step(heading: Direction, dx: i64, dy: i64) -> Option<Instruction> {
        let makes_progress = match heading {
            Direction::North => dy > 0,
            Direction::South => dy < 0,
            Direction::East => dx > 0,
            Direction::West => dx < 0,
        };
        makes_progress.then(|| Instruction::Drive {
            heading,
            distance_km: if heading.is_vertical() { dy } else { dx }.unsigned_abs(),
        })
    }
}
