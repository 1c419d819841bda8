//! The `DestinationProvider` trait and the default uniform picker.

use epi_core::{AgentRng, Tile};

use crate::MobilityResult;

/// Source of random public destinations.
///
/// When an agent leaves home it asks the provider for a tile to visit.
/// Failures are non-fatal by contract: the run loop logs them and the agent
/// retries on its next dwell cycle — a flaky provider degrades movement, it
/// never crashes a run.
pub trait DestinationProvider {
    /// A random walkable tile for the run's map.
    ///
    /// Draws come from the requesting agent's own RNG so provider calls
    /// cannot perturb other agents' random streams.
    fn random_tile(&self, rng: &mut AgentRng) -> MobilityResult<Tile>;
}

/// Default provider: every tile of a `width × height` map is walkable and
/// equally likely.
pub struct UniformDestinations {
    width: u16,
    height: u16,
}

impl UniformDestinations {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

impl DestinationProvider for UniformDestinations {
    fn random_tile(&self, rng: &mut AgentRng) -> MobilityResult<Tile> {
        let x = rng.gen_range(0..self.width);
        let y = rng.gen_range(0..self.height);
        Ok(Tile::new(x, y))
    }
}
