//! The health state machine: infection decision, arrival and idle checks,
//! recovery, and immunity expiry.
//!
//! # One check per agent per instant
//!
//! Infection risk is evaluated from two triggers — movement arrival and the
//! periodic idle sweep — but never twice at the same instant for the same
//! agent.  The sweep skips in-transit agents (an arriving agent is still
//! marked moving until its arrival is processed) and `last_checked` guards
//! the opposite interleaving, where the arrival lands first and the sweep
//! fires later within the same tick.  Agents that are `Infected` or
//! `TemporaryImmune` are exempt from both triggers.

use epi_core::{AgentId, AgentRng, HealthStatus, Tick};
use epi_mobility::{DestinationProvider, Mover};

use crate::run::IDLE_CHECK_INTERVAL;
use crate::{Event, RunObserver, SimResult, SimulationRun};

/// The infection decision: one uniform draw in `[0, 1)` against
/// `pressure × base_probability`, discounted by `1 − immunity_rate` when the
/// agent holds temporary immunity.
///
/// `pressure` is the windowed occupancy sum at the agent's tile.  Only
/// `Infected` agents are ever counted in the grid, so a candidate for
/// infection can never contribute to its own pressure.
pub fn roll_infection(
    rng: &mut AgentRng,
    pressure: u32,
    base_probability: f64,
    has_immunity: bool,
    immunity_rate: f64,
) -> bool {
    let immunity_factor = if has_immunity { 1.0 - immunity_rate } else { 1.0 };
    rng.gen_bool(pressure as f64 * base_probability * immunity_factor)
}

impl<M: Mover, P: DestinationProvider> SimulationRun<M, P> {
    // ── Arrival ───────────────────────────────────────────────────────────

    /// An agent's trip completes: place it on its destination tile, keep the
    /// grid counters consistent, and run the infection check where due.
    pub(crate) fn handle_arrival<O: RunObserver>(
        &mut self,
        agent: AgentId,
        now: Tick,
        observer: &mut O,
    ) -> SimResult<()> {
        let (from, to) = self.mobility.arrive(agent, now);
        let idx = agent.index();
        self.agents.moving[idx] = false;
        // Position must be current before any pressure computation sees it.
        self.agents.current_tile[idx] = to;

        match self.agents.status[idx] {
            // An infected agent carries its grid count with it.
            HealthStatus::Infected => {
                self.grid.decrement(from)?;
                self.grid.increment(to)?;
            }
            HealthStatus::Susceptible => self.evaluate_infection(agent, now, observer)?,
            HealthStatus::TemporaryImmune => {}
        }

        // Arriving starts the next dwell at the new location.
        let dwell = self.dwell_ticks(agent);
        self.queue.push(now + dwell, Event::DwellEnd(agent));
        Ok(())
    }

    // ── Idle sweep ────────────────────────────────────────────────────────

    /// Periodic ambient-infection check: stationary susceptible agents face
    /// the pressure at the tile they are sitting on, at a fixed cadence.
    pub(crate) fn handle_idle_sweep<O: RunObserver>(
        &mut self,
        now: Tick,
        observer: &mut O,
    ) -> SimResult<()> {
        for agent in (0..self.agents.count as u32).map(AgentId) {
            let idx = agent.index();
            if self.agents.moving[idx] {
                continue;
            }
            if !self.agents.status[idx].is_susceptible() {
                continue;
            }
            // Already evaluated at this instant by an arrival event.
            if self.agents.last_checked[idx] == now {
                continue;
            }
            self.evaluate_infection(agent, now, observer)?;
        }
        self.queue.push(now + IDLE_CHECK_INTERVAL, Event::IdleSweep);
        Ok(())
    }

    // ── The single evaluation point ───────────────────────────────────────

    /// Evaluate infection risk for a susceptible agent at its current tile,
    /// and perform the become-infected bookkeeping when the roll hits.
    pub(crate) fn evaluate_infection<O: RunObserver>(
        &mut self,
        agent: AgentId,
        now: Tick,
        observer: &mut O,
    ) -> SimResult<()> {
        let idx = agent.index();
        self.agents.last_checked[idx] = now;

        let tile = self.agents.current_tile[idx];
        let pressure = self.grid.windowed_sum(tile, self.config.infection_radius);
        let infected = roll_infection(
            self.rngs.get_mut(agent),
            pressure,
            self.config.base_infection_probability,
            self.agents.has_immunity[idx],
            self.config.immunity_rate,
        );
        if infected {
            self.infect(agent, now, observer)?;
        }
        Ok(())
    }

    /// The become-infected bookkeeping: status, grid counter, run-wide
    /// count, and the recovery timer.  Also used for bootstrap seeding.
    pub(crate) fn infect<O: RunObserver>(
        &mut self,
        agent: AgentId,
        now: Tick,
        observer: &mut O,
    ) -> SimResult<()> {
        let idx = agent.index();
        self.agents.status[idx] = HealthStatus::Infected;
        self.grid.increment(self.agents.current_tile[idx])?;
        self.set_infected_count(self.infected + 1, observer);

        let delay = self
            .rngs
            .get_mut(agent)
            .spread(self.config.recovery_time, self.config.recovery_dispersion);
        self.queue.push(now + delay, Event::Recovery(agent));
        Ok(())
    }

    // ── Recovery and immunity ─────────────────────────────────────────────

    /// Recovery timer fires: clear the grid counter at the agent's *current*
    /// tile (it may have moved since infection — arrivals migrated the
    /// counter along the way) and hand out temporary immunity if configured.
    pub(crate) fn handle_recovery<O: RunObserver>(
        &mut self,
        agent: AgentId,
        now: Tick,
        observer: &mut O,
    ) -> SimResult<()> {
        let idx = agent.index();
        debug_assert!(self.agents.status[idx].is_infected());

        self.grid.decrement(self.agents.current_tile[idx])?;
        self.set_infected_count(self.infected - 1, observer);

        if self.config.immunity_time > 0 {
            self.agents.status[idx] = HealthStatus::TemporaryImmune;
            self.agents.has_immunity[idx] = true;
            let delay = self
                .rngs
                .get_mut(agent)
                .spread(self.config.immunity_time, self.config.immunity_dispersion);
            self.queue.push(now + delay, Event::ImmunityEnd(agent));
        } else {
            self.agents.status[idx] = HealthStatus::Susceptible;
            self.agents.has_immunity[idx] = false;
        }
        Ok(())
    }

    /// Immunity expiry: back to fully susceptible.
    pub(crate) fn handle_immunity_end(&mut self, agent: AgentId) {
        let idx = agent.index();
        self.agents.status[idx] = HealthStatus::Susceptible;
        self.agents.has_immunity[idx] = false;
    }
}
