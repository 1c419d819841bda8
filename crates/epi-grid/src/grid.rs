//! The `OccupancyGrid` itself.

use epi_core::Tile;

use crate::{GridError, GridResult};

/// A dense `width × height` grid of infected-agent counters.
///
/// Row-major `Vec<u32>` storage; tile `(x, y)` lives at `y * width + x`.
/// A running `total` is maintained alongside the cells so the conservation
/// invariant (`total == number of Infected agents`) can be checked in O(1).
pub struct OccupancyGrid {
    width: u16,
    height: u16,
    counts: Vec<u32>,
    total: u32,
}

impl OccupancyGrid {
    /// Create an all-zero grid.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            counts: vec![0; width as usize * height as usize],
            total: 0,
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Sum of all counters — equals the run-wide infected count when the
    /// conservation invariant holds.
    #[inline]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[inline]
    fn cell_index(&self, tile: Tile) -> GridResult<usize> {
        if tile.x >= self.width || tile.y >= self.height {
            return Err(GridError::OutOfBounds {
                tile,
                width: self.width,
                height: self.height,
            });
        }
        Ok(tile.y as usize * self.width as usize + tile.x as usize)
    }

    /// The infected count at a single tile.
    pub fn count_at(&self, tile: Tile) -> GridResult<u32> {
        Ok(self.counts[self.cell_index(tile)?])
    }

    /// Record one more infected agent standing on `tile`.
    pub fn increment(&mut self, tile: Tile) -> GridResult<()> {
        let idx = self.cell_index(tile)?;
        self.counts[idx] += 1;
        self.total += 1;
        Ok(())
    }

    /// Record one fewer infected agent standing on `tile`.
    ///
    /// # Errors
    ///
    /// [`GridError::Underflow`] if the counter is already zero — the caller
    /// broke the no-double-transition invariant and must fail fast.
    pub fn decrement(&mut self, tile: Tile) -> GridResult<()> {
        let idx = self.cell_index(tile)?;
        if self.counts[idx] == 0 {
            return Err(GridError::Underflow { tile });
        }
        self.counts[idx] -= 1;
        self.total -= 1;
        Ok(())
    }

    /// Infection pressure: the sum of counters over the square neighborhood
    /// `[−radius, +radius]²` around `center`.
    ///
    /// Only tiles strictly inside the border contribute — a tile `(x, y)`
    /// is counted iff `0 < x < width−1 && 0 < y < height−1`.  Infected
    /// agents standing on the outermost ring are invisible to every window,
    /// including windows centered on them.  This edge asymmetry is part of
    /// the model's observed behavior and is preserved deliberately.
    pub fn windowed_sum(&self, center: Tile, radius: u16) -> u32 {
        let r = radius as i32;
        let mut sum = 0u32;
        for dy in -r..=r {
            for dx in -r..=r {
                let x = center.x as i32 + dx;
                let y = center.y as i32 + dy;
                if x > 0 && x < self.width as i32 - 1 && y > 0 && y < self.height as i32 - 1 {
                    sum += self.counts[y as usize * self.width as usize + x as usize];
                }
            }
        }
        sum
    }
}
