use epi_core::EpiError;
use epi_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("configuration rejected: {0}")]
    Config(#[from] EpiError),

    /// The occupancy grid detected an invariant violation (underflow or an
    /// out-of-bounds tile).  Always a bug in the state machine; the run
    /// aborts rather than continuing with corrupt counts.
    #[error("occupancy invariant violated: {0}")]
    Grid(#[from] GridError),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    /// `run` was called on a run that already executed.  A `SimulationRun`
    /// is single-shot: Created → Running → Stopped, terminal.
    #[error("run already executed")]
    AlreadyRan,
}

pub type SimResult<T> = Result<T, SimError>;
