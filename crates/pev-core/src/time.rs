//! Booking time model.
//!
//! # Design
//!
//! Time is represented as Unix seconds in a `Timestamp` newtype.  Using an
//! integer as the canonical time unit means window arithmetic is exact and
//! comparisons are O(1); rendering a calendar date is left to callers and
//! their presentation layer.
//!
//! A `TimeWindow` is the half-open interval `[from, to)` a rental covers.
//! Well-orderedness (`from < to`) is a caller obligation: availability
//! queries and rent commits are correlated by window *equality*, so a window
//! is a plain value with no internal normalization.

use std::fmt;

// ── Timestamp ─────────────────────────────────────────────────────────────────

/// An absolute point in time as Unix seconds.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// The far future — useful for licenses that never expire in fixtures.
    pub const MAX: Timestamp = Timestamp(i64::MAX);

    /// Return the timestamp `secs` seconds after `self`.
    #[inline]
    pub fn offset(self, secs: i64) -> Timestamp {
        Timestamp(self.0 + secs)
    }

    /// Seconds elapsed from `earlier` to `self` (negative if `self` is earlier).
    #[inline]
    pub fn since(self, earlier: Timestamp) -> i64 {
        self.0 - earlier.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

// ── TimeWindow ────────────────────────────────────────────────────────────────

/// The half-open interval `[from, to)` a rental covers.
///
/// Invariant: `from < to`.  A malformed window is a caller error; it is
/// checked by a debug assertion in [`TimeWindow::new`], never branched on at
/// runtime.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeWindow {
    /// Start of the rental (inclusive).
    pub from: Timestamp,
    /// End of the rental (exclusive).
    pub to: Timestamp,
}

impl TimeWindow {
    /// Construct a window.
    ///
    /// # Panics
    /// Panics in debug mode if `from >= to`.
    #[inline]
    pub fn new(from: Timestamp, to: Timestamp) -> Self {
        debug_assert!(from < to, "time window must be well-ordered: {from} >= {to}");
        Self { from, to }
    }

    /// Length of the window in seconds.
    #[inline]
    pub fn duration_secs(self) -> i64 {
        self.to.0 - self.from.0
    }

    /// `true` if `at` falls inside the window.
    #[inline]
    pub fn contains(self, at: Timestamp) -> bool {
        self.from <= at && at < self.to
    }

    /// `true` if the two half-open intervals share at least one instant.
    ///
    /// Back-to-back rentals (`a.to == b.from`) do not overlap.
    #[inline]
    pub fn overlaps(self, other: TimeWindow) -> bool {
        self.from < other.to && other.from < self.to
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.from, self.to)
    }
}
