//! High-level mobility engine: turns travel requests into arrival instants.

use epi_core::{AgentId, Tick, Tile};

use crate::{MobilityError, MovementState, Mover};

/// Wraps a [`Mover`] and per-agent [`MovementState`] to provide the simple
/// travel API used by the run loop in `epi-sim`.
///
/// # Type parameter
///
/// `M` must implement [`Mover`] (e.g. [`GridMover`][crate::GridMover]).
pub struct MobilityEngine<M: Mover> {
    /// The travel-time model.
    pub mover: M,

    /// Per-agent movement state, indexed by `AgentId`.
    pub states: Vec<MovementState>,
}

impl<M: Mover> MobilityEngine<M> {
    /// Create a new engine with all agents stationary at the grid origin.
    pub fn new(mover: M, agent_count: usize) -> Self {
        Self {
            mover,
            states: vec![MovementState::stationary(Tile::default(), Tick::ZERO); agent_count],
        }
    }

    /// Teleport `agent` to `tile` without travelling (initial placement).
    pub fn place(&mut self, agent: AgentId, tile: Tile, tick: Tick) {
        self.states[agent.index()] = MovementState::stationary(tile, tick);
    }

    /// Start `agent` travelling to `destination` at `speed` tiles per virtual
    /// second.
    ///
    /// Returns the arrival tick for the caller to schedule as an event, or an
    /// error if the agent is already in transit.
    pub fn begin_travel(
        &mut self,
        agent: AgentId,
        destination: Tile,
        speed: f64,
        now: Tick,
    ) -> Result<Tick, MobilityError> {
        let state = &self.states[agent.index()];
        if state.in_transit {
            return Err(MobilityError::AlreadyInTransit(agent));
        }
        let from = state.from;
        let arrival_tick = now + self.mover.travel_ticks(from, destination, speed);

        self.states[agent.index()] = MovementState {
            in_transit: true,
            from,
            to: destination,
            departure_tick: now,
            arrival_tick,
        };
        Ok(arrival_tick)
    }

    /// Complete travel for `agent`, returning `(from, to)` so the caller can
    /// migrate occupancy-grid counters for infected agents.
    ///
    /// Marks the agent stationary at its destination.  Should be called when
    /// `now >= state.arrival_tick`.
    pub fn arrive(&mut self, agent: AgentId, now: Tick) -> (Tile, Tile) {
        let (from, to) = {
            let state = &self.states[agent.index()];
            (state.from, state.to)
        };
        self.states[agent.index()] = MovementState::stationary(to, now);
        (from, to)
    }

    /// Returns `true` if `agent` is currently in transit.
    #[inline]
    pub fn in_transit(&self, agent: AgentId) -> bool {
        self.states[agent.index()].in_transit
    }
}
