//! The dwell scheduler: where an agent goes next, and how long it waits.
//!
//! Agents alternate between two dwell locations — their home tile and a
//! random public tile.  Leaving home always targets a public tile; leaving a
//! public tile is a fair coin flip between home and another public tile,
//! except that infected agents are forced home when the stay-home-when-ill
//! feature is enabled.
//!
//! Collaborator faults here are non-fatal by design: a failed destination
//! request is logged and the agent's dwell is simply re-armed, so it retries
//! on its next cycle instead of taking the run down.

use epi_core::{AgentId, Tick, Tile};
use epi_mobility::{DestinationProvider, Mover};

use crate::{Event, SimResult, SimulationRun};

impl<M: Mover, P: DestinationProvider> SimulationRun<M, P> {
    /// An agent's dwell expired: choose the next destination and depart.
    pub(crate) fn handle_dwell_end(&mut self, agent: AgentId, now: Tick) -> SimResult<()> {
        let idx = agent.index();
        let resting_when_ill =
            self.config.home_sick_rest > 0 && self.agents.status[idx].is_infected();

        if self.agents.at_home[idx] {
            self.depart_for_public(agent, now)
        } else if resting_when_ill || self.rngs.get_mut(agent).gen_bool(0.5) {
            self.depart_for_home(agent, now)
        } else {
            self.depart_for_public(agent, now)
        }
    }

    /// How long the agent dwells at the location it just reached.
    ///
    /// Drawn fresh per stay from the configured mean ± dispersion; infected
    /// agents at home sit out the extra `home_sick_rest` on top.
    pub(crate) fn dwell_ticks(&mut self, agent: AgentId) -> u64 {
        let idx = agent.index();
        let (mean, dispersion) = if self.agents.at_home[idx] {
            (self.config.private_dwell, self.config.private_dwell_dispersion)
        } else {
            (self.config.public_dwell, self.config.public_dwell_dispersion)
        };
        let mut dwell = self.rngs.get_mut(agent).spread(mean, dispersion);
        if self.agents.at_home[idx]
            && self.agents.status[idx].is_infected()
            && self.config.home_sick_rest > 0
        {
            dwell += self.config.home_sick_rest;
        }
        dwell
    }

    // ── Departures ────────────────────────────────────────────────────────

    fn depart_for_public(&mut self, agent: AgentId, now: Tick) -> SimResult<()> {
        match self.provider.random_tile(self.rngs.get_mut(agent)) {
            Ok(destination) => self.start_trip(agent, destination, false, now),
            Err(error) => {
                tracing::warn!(%agent, %error, "destination request failed; agent stays put");
                self.rearm_dwell(agent, now);
                Ok(())
            }
        }
    }

    fn depart_for_home(&mut self, agent: AgentId, now: Tick) -> SimResult<()> {
        let home = self.agents.home_tile[agent.index()];
        self.start_trip(agent, home, true, now)
    }

    fn start_trip(
        &mut self,
        agent: AgentId,
        destination: Tile,
        to_home: bool,
        now: Tick,
    ) -> SimResult<()> {
        match self
            .mobility
            .begin_travel(agent, destination, self.config.walking_speed, now)
        {
            Ok(arrival) => {
                self.agents.at_home[agent.index()] = to_home;
                self.agents.moving[agent.index()] = true;
                self.queue.push(arrival, Event::Arrival(agent));
            }
            Err(error) => {
                // Mover refusal abandons this dwell cycle in place.
                tracing::warn!(%agent, %error, "mover rejected trip; agent stays put");
                self.rearm_dwell(agent, now);
            }
        }
        Ok(())
    }

    /// Re-arm the dwell timer after an abandoned departure so the agent
    /// retries on its next cycle rather than going silent.
    ///
    /// The retry must land strictly after `now`: with zero-mean dwells a
    /// zero draw would re-queue the event at the same instant and the run
    /// loop would pop it again without virtual time ever advancing.
    fn rearm_dwell(&mut self, agent: AgentId, now: Tick) {
        let dwell = self.dwell_ticks(agent).max(1);
        self.queue.push(now + dwell, Event::DwellEnd(agent));
    }
}
