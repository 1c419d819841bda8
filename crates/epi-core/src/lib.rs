//! `epi-core` — foundational types for the `grid_epi` epidemic simulation engine.
//!
//! This crate is a dependency of every other `epi-*` crate.  It intentionally
//! has no `epi-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `RunId`                                    |
//! | [`tile`]        | `Tile` grid coordinate, Chebyshev distance            |
//! | [`time`]        | `Tick` — virtual simulation milliseconds              |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (run-level)          |
//! | [`status`]      | `HealthStatus` enum                                   |
//! | [`config`]      | `RunConfig` + pre-run validation                      |
//! | [`error`]       | `EpiError`, `EpiResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod status;
pub mod tile;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::RunConfig;
pub use error::{EpiError, EpiResult};
pub use ids::{AgentId, RunId};
pub use rng::{AgentRng, SimRng};
pub use status::HealthStatus;
pub use tile::Tile;
pub use time::Tick;
