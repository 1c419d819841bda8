//! Error types for epi-batch.

use thiserror::Error;

/// Errors raised while parsing, validating, or executing a batch.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("batch contains no parameter sets")]
    EmptyBatch,

    #[error("batch declares {declared} simulations but lists {got} parameter sets")]
    CountMismatch { declared: u32, got: usize },

    #[error("number of players must be non-zero")]
    ZeroPopulation,

    #[error("batch JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("run configuration error: {0}")]
    Config(#[from] epi_core::EpiError),

    #[error("simulation error: {0}")]
    Sim(#[from] epi_sim::SimError),
}

/// Alias for `Result<T, BatchError>`.
pub type BatchResult<T> = Result<T, BatchError>;
