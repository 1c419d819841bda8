//! Grid coordinates.
//!
//! The world is a bounded `width × height` tile grid.  `Tile` is the only
//! position type in the engine — there is no continuous space.  Coordinates
//! are `u16` to keep SoA position arrays compact (a 65,535² map is far larger
//! than any simulated town).

use std::fmt;

/// A grid coordinate.  Valid tiles satisfy `x < width && y < height` for the
/// owning run's grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub x: u16,
    pub y: u16,
}

impl Tile {
    #[inline]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Chebyshev (chessboard) distance — the number of king moves between two
    /// tiles.  Used as the travel-time metric by the default mover, since an
    /// agent walking a grid path covers one tile per step regardless of
    /// whether the step is straight or diagonal.
    #[inline]
    pub fn chebyshev(self, other: Tile) -> u32 {
        let dx = self.x.abs_diff(other.x) as u32;
        let dy = self.y.abs_diff(other.y) as u32;
        dx.max(dy)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
