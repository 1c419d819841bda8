use epi_core::AgentId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MobilityError {
    #[error("agent {0} is already in transit")]
    AlreadyInTransit(AgentId),

    /// A destination provider could not produce a tile (e.g. the backing
    /// service is unreachable).  Non-fatal: the requesting agent retries on
    /// its next dwell cycle.
    #[error("no destination available: {0}")]
    NoDestination(String),
}

pub type MobilityResult<T> = Result<T, MobilityError>;
