//! Per-agent movement state.

use epi_core::{Tick, Tile};

/// The movement state for a single agent.
///
/// An agent is either **stationary** (at a tile, `in_transit = false`) or
/// **in transit** (travelling between two tiles, `in_transit = true`).
///
/// Under the teleport-at-arrival model the agent logically stays at
/// `from` until `arrival_tick`, then instantly appears at `to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementState {
    /// `true` while the agent is travelling to `to`.
    pub in_transit: bool,

    /// The tile the agent departed from (or is currently at if `!in_transit`).
    pub from: Tile,

    /// The tile the agent is heading to.  Equals `from` when `!in_transit`.
    pub to: Tile,

    /// Tick at which the journey began.  Equals `arrival_tick` when
    /// `!in_transit`.
    pub departure_tick: Tick,

    /// Tick at which the agent will arrive at `to`.  Equals `departure_tick`
    /// when `!in_transit`.
    pub arrival_tick: Tick,
}

impl MovementState {
    /// Construct a stationary state at `tile` at time `tick`.
    #[inline]
    pub fn stationary(tile: Tile, tick: Tick) -> Self {
        Self {
            in_transit: false,
            from: tile,
            to: tile,
            departure_tick: tick,
            arrival_tick: tick,
        }
    }
}
