//! Cardinal heading of a vehicle as reported by its position feed.
//!
//! "Unknown heading" is deliberately *not* a variant: a feed that cannot
//! determine the heading reports `Option<Direction>::None`, which keeps
//! every `Direction` value meaningful in instruction arithmetic.

/// The cardinal direction a vehicle is currently facing.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// `true` for headings along the Y axis.
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::North | Direction::South)
    }

    /// Lowercase compass name, as used in driving instructions.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East  => "east",
            Direction::West  => "west",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
