//! The `Mover` trait and the default grid walker.

use epi_core::Tile;

/// Travel-time model for agent movement.
///
/// The engine asks the mover exactly one thing: how many ticks a trip takes.
/// Tile-by-tile path details stay inside the mover — the engine only sees
/// the departure tile, the destination, and the arrival instant.
///
/// Swap the implementation at compile time for a different movement model
/// with no runtime overhead.
pub trait Mover {
    /// Number of ticks a trip from `from` to `to` takes at `speed` tiles per
    /// virtual second.  Must return at least 1 so arrivals never land on the
    /// departure instant.
    fn travel_ticks(&self, from: Tile, to: Tile, speed: f64) -> u64;
}

/// Default mover: walks the Chebyshev distance at constant speed.
///
/// A grid walker that may step diagonally covers one tile per step, so the
/// Chebyshev distance is the step count of the shortest unobstructed path.
/// At `speed` tiles per virtual second, one step takes `1000 / speed` ticks.
pub struct GridMover;

impl Mover for GridMover {
    fn travel_ticks(&self, from: Tile, to: Tile, speed: f64) -> u64 {
        let steps = from.chebyshev(to) as f64;
        let ticks = (steps * 1_000.0 / speed).ceil() as u64;
        ticks.max(1) // arrive at least 1 tick later
    }
}
