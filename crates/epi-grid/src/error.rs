use epi_core::Tile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    /// A decrement would take the counter at `tile` below zero.  This is a
    /// state-machine invariant violation (a transition was applied twice),
    /// never a recoverable condition.
    #[error("occupancy underflow at {tile}: counter is already zero")]
    Underflow { tile: Tile },

    /// A tile outside the grid bounds was passed to a counter operation.
    #[error("tile {tile} outside {width}x{height} grid")]
    OutOfBounds { tile: Tile, width: u16, height: u16 },
}

pub type GridResult<T> = Result<T, GridError>;
