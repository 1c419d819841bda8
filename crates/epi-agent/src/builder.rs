//! Fluent builder for constructing `AgentStore` + `AgentRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use epi_agent::AgentStoreBuilder;
//! use epi_core::Tile;
//!
//! let homes = vec![Tile::new(3, 3), Tile::new(7, 2)];
//! let (store, rngs) = AgentStoreBuilder::new(2, /*seed=*/ 42)
//!     .homes(homes)
//!     .build();
//!
//! assert_eq!(store.count, 2);
//! assert_eq!(rngs.len(), 2);
//! assert_eq!(store.current_tile[0], Tile::new(3, 3));
//! ```

use epi_core::Tile;

use crate::{AgentRngs, AgentStore};

/// Fluent builder for [`AgentStore`] + [`AgentRngs`].
///
/// All arrays are pre-allocated at construction time; agents start
/// `Susceptible`, stationary, and at home.
pub struct AgentStoreBuilder {
    count: usize,
    seed: u64,
    homes: Option<Vec<Tile>>,
}

impl AgentStoreBuilder {
    /// Create a builder for `count` agents using `seed` as the run RNG seed.
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            count,
            seed,
            homes: None,
        }
    }

    /// Assign each agent's home tile (and initial position).
    ///
    /// Length must equal `count`; the run builder in `epi-sim` validates this
    /// before construction.
    pub fn homes(mut self, homes: Vec<Tile>) -> Self {
        self.homes = Some(homes);
        self
    }

    /// Construct `AgentStore` and `AgentRngs`.
    ///
    /// # Panics
    ///
    /// Panics if a homes vector of the wrong length was supplied.  Callers
    /// that take home tiles from outside input must length-check first.
    pub fn build(self) -> (AgentStore, AgentRngs) {
        let mut store = AgentStore::new(self.count);

        if let Some(homes) = self.homes {
            assert_eq!(homes.len(), self.count, "homes length must equal agent count");
            store.current_tile.copy_from_slice(&homes);
            store.home_tile = homes;
        }

        let rngs = AgentRngs::new(self.count, self.seed);
        (store, rngs)
    }
}
