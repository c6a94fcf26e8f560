//! Vehicle positions and navigation destinations.
//!
//! Coordinates are integer kilometres on the city grid.  A `Position` is a
//! snapshot of one telemetry read — it is produced fresh on every feed query
//! and never cached across calls.  A `Destination` is an immutable target
//! value owned by whoever issues a navigation request.

use crate::Direction;

// ── Position ──────────────────────────────────────────────────────────────────

/// One fresh telemetry sample: where a vehicle is and which way it faces.
///
/// `heading == None` means the feed could not determine the direction.  The
/// all-defaults sample `(0, 0, None)` is the sentinel a dead feed produces
/// and is treated as "connection lost" by the navigation engine.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i64,
    pub y: i64,
    pub heading: Option<Direction>,
}

impl Position {
    #[inline]
    pub fn new(x: i64, y: i64, heading: Option<Direction>) -> Self {
        Self { x, y, heading }
    }

    /// `true` for the zero-value sample a defaulted/dead feed reports.
    #[inline]
    pub fn is_sentinel(self) -> bool {
        self.x == 0 && self.y == 0 && self.heading.is_none()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.heading {
            Some(h) => write!(f, "({}, {}) facing {h}", self.x, self.y),
            None    => write!(f, "({}, {})", self.x, self.y),
        }
    }
}

// ── Destination ───────────────────────────────────────────────────────────────

/// Target coordinates plus a human-readable label ("Home", "Office"…).
///
/// Arrival is decided by *exact* coordinate equality against a fresh
/// [`Position`] sample.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Destination {
    pub x: i64,
    pub y: i64,
    pub label: String,
}

impl Destination {
    pub fn new(x: i64, y: i64, label: impl Into<String>) -> Self {
        Self { x, y, label: label.into() }
    }

    /// `true` if `position` sits exactly on this destination.
    #[inline]
    pub fn reached_by(&self, position: Position) -> bool {
        position.x == self.x && position.y == self.y
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.label, self.x, self.y)
    }
}
