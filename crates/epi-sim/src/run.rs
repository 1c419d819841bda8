//! The `SimulationRun` struct and its event loop.

use epi_agent::{AgentRngs, AgentStore};
use epi_core::{RunConfig, Tick};
use epi_grid::OccupancyGrid;
use epi_mobility::{DestinationProvider, MobilityEngine, Mover};

use crate::{Event, EventQueue, RunObserver, SimError, SimResult, StatsCollector};

/// How often the statistics sampler records the instantaneous infected count.
pub const SAMPLE_INTERVAL: u64 = 500;

/// How often stationary susceptible agents are re-checked for ambient
/// infection.
pub const IDLE_CHECK_INTERVAL: u64 = 500;

/// Lifecycle phase of a run.  `Stopped` is terminal — a run executes once.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RunPhase {
    Created,
    Running,
    Stopped,
}

/// Final report of one completed run.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct RunReport {
    /// Mean of the periodic infected-count samples.
    pub average: f64,
    /// Highest concurrently-infected count observed at any instant.
    pub max: u32,
}

/// One simulation run: the grid, the agent registry, the event queue, and
/// the health/dwell state machines that connect them.
///
/// `SimulationRun<M, P>` is built by [`RunBuilder`][crate::RunBuilder] with
/// initial infections already seeded and start-up events queued.  Calling
/// [`run`][Self::run] drains the queue to the configured end instant and
/// produces the final [`RunReport`].
pub struct SimulationRun<M: Mover, P: DestinationProvider> {
    /// Validated configuration for this run.
    pub config: RunConfig,

    /// Per-tile infected counters.
    pub grid: OccupancyGrid,

    /// SoA agent registry — the only holder of per-agent state.
    pub agents: AgentStore,

    /// Per-agent deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: AgentRngs,

    /// The virtual-time event queue.
    pub queue: EventQueue,

    /// Movement timing engine wrapping the pluggable mover.
    pub mobility: MobilityEngine<M>,

    /// Destination provider consulted when agents head for a public tile.
    pub provider: P,

    /// Sample series and running maximum.
    pub stats: StatsCollector,

    /// Run-wide count of currently-infected agents.  Mirrors `grid.total()`
    /// at all times (the conservation invariant).
    pub infected: u32,

    /// The instant of the event currently being processed.
    pub now: Tick,

    /// Created → Running → Stopped.
    pub phase: RunPhase,
}

impl<M: Mover, P: DestinationProvider> SimulationRun<M, P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Execute the run from bootstrap to the configured end instant.
    ///
    /// Processes every queued event whose timestamp is strictly before
    /// `config.duration`, then cancels all remaining timers at once and
    /// emits the final report via `on_run_complete`.  After that callback no
    /// observer method fires again — the run is `Stopped`, terminally.
    ///
    /// # Errors
    ///
    /// [`SimError::AlreadyRan`] on a second call; [`SimError::Grid`] if the
    /// health state machine corrupts the occupancy counts (a bug, never a
    /// data condition).
    pub fn run<O: RunObserver>(&mut self, observer: &mut O) -> SimResult<RunReport> {
        if self.phase != RunPhase::Created {
            return Err(SimError::AlreadyRan);
        }
        self.phase = RunPhase::Running;
        tracing::info!(
            population = self.config.population,
            duration = self.config.duration,
            seeded = self.infected,
            "run started"
        );

        // Surface infections seeded at bootstrap before any event fires.
        if self.infected > 0 {
            observer.on_infected_changed(self.infected);
        }

        let end = Tick(self.config.duration);
        while let Some((tick, event)) = self.queue.pop_before(end) {
            self.now = tick;
            self.dispatch(tick, event, observer)?;
        }

        // Everything still queued is a timer that must never fire.
        self.queue.clear();
        self.phase = RunPhase::Stopped;

        let report = RunReport {
            average: self.stats.average(),
            max: self.stats.max(),
        };
        tracing::info!(average = report.average, max = report.max, "run complete");
        observer.on_run_complete(report.average, report.max);
        Ok(report)
    }

    // ── Event dispatch ────────────────────────────────────────────────────

    fn dispatch<O: RunObserver>(
        &mut self,
        now: Tick,
        event: Event,
        observer: &mut O,
    ) -> SimResult<()> {
        match event {
            Event::DwellEnd(agent) => self.handle_dwell_end(agent, now),
            Event::Arrival(agent) => self.handle_arrival(agent, now, observer),
            Event::Recovery(agent) => self.handle_recovery(agent, now, observer),
            Event::ImmunityEnd(agent) => {
                self.handle_immunity_end(agent);
                Ok(())
            }
            Event::Sample => {
                self.stats.record_sample(self.infected);
                self.queue.push(now + SAMPLE_INTERVAL, Event::Sample);
                Ok(())
            }
            Event::IdleSweep => self.handle_idle_sweep(now, observer),
        }
    }

    // ── Shared bookkeeping ────────────────────────────────────────────────

    /// Update the run-wide infected count, the running maximum, and the
    /// observer — the single funnel for every counter change.
    pub(crate) fn set_infected_count<O: RunObserver>(&mut self, n: u32, observer: &mut O) {
        self.infected = n;
        self.stats.observe(n);
        observer.on_infected_changed(n);
    }
}
