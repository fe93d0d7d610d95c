//! Grid positions.

use core::fmt;

/// A 1-based position on a board.
///
/// Construction never validates the range: the same value may be checked
/// against a board later, and out-of-range input from a caller has to stay
/// representable so the board can reject it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Coordinate `steps` cells further along the given axis, or `None`
    /// if that position is not representable.
    pub(crate) fn step(self, steps: i32, vertical: bool) -> Option<Self> {
        if vertical {
            Some(Self::new(self.x, self.y.checked_add(steps)?))
        } else {
            Some(Self::new(self.x.checked_add(steps)?, self.y))
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}
