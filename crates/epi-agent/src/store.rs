//! Core agent storage: `AgentStore` (SoA data) and `AgentRngs` (per-agent RNG).
//!
//! # Why two structs?
//!
//! Infection evaluation needs `&mut AgentRng` (the agent's dice) while
//! reading grid and position state held elsewhere.  Keeping the RNGs in a
//! separate `AgentRngs` struct lets the run loop borrow
//! `&mut AgentRngs` + `&AgentStore` + `&OccupancyGrid` simultaneously
//! without fighting the borrow checker.

use epi_core::{AgentId, AgentRng, HealthStatus, Tick, Tile};

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, separated from [`AgentStore`] so the
/// run loop can hold `&mut AgentRngs` and `&AgentStore` at the same time.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `run_seed`.
    pub(crate) fn new(count: usize, run_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(run_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all agent state.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is the
/// index into all of them:
///
/// ```ignore
/// let tile = store.current_tile[agent.index()];  // O(1), cache-friendly
/// ```
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    // ── Spatial state ─────────────────────────────────────────────────────
    /// The agent's fixed home tile, assigned at bootstrap.
    pub home_tile: Vec<Tile>,

    /// The tile the agent currently occupies.  While moving, this stays at
    /// the departure tile until the arrival event fires (teleport-at-arrival).
    pub current_tile: Vec<Tile>,

    /// `true` while the agent's current dwell location is its home tile.
    /// Toggles the home ↔ public alternation in the dwell scheduler.
    pub at_home: Vec<bool>,

    /// `true` while the agent is in transit between tiles.
    pub moving: Vec<bool>,

    // ── Health state ──────────────────────────────────────────────────────
    /// Current position in the health state machine.
    pub status: Vec<HealthStatus>,

    /// Derived immunity flag: set on entering `TemporaryImmune`, cleared on
    /// immunity expiry.  Feeds the infection-probability discount.
    pub has_immunity: Vec<bool>,

    /// The instant this agent's infection risk was last evaluated.  Guards
    /// against the arrival check and the idle sweep both firing for the same
    /// agent in the same instant.
    pub last_checked: Vec<Tick>,
}

impl AgentStore {
    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// `true` if the agent is stationary at `current_tile`.
    #[inline]
    pub fn is_stationary(&self, agent: AgentId) -> bool {
        !self.moving[agent.index()]
    }

    /// Number of agents whose status is `Infected` — the slow, always-correct
    /// side of the grid-conservation invariant check.
    pub fn infected_count(&self) -> u32 {
        self.status.iter().filter(|s| s.is_infected()).count() as u32
    }

    // ── Package-private constructor used by AgentStoreBuilder ─────────────

    pub(crate) fn new(count: usize) -> Self {
        Self {
            count,
            home_tile: vec![Tile::default(); count],
            current_tile: vec![Tile::default(); count],
            at_home: vec![true; count],
            moving: vec![false; count],
            status: vec![HealthStatus::Susceptible; count],
            has_immunity: vec![false; count],
            last_checked: vec![Tick::ZERO; count],
        }
    }
}
