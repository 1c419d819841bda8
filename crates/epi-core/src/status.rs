//! Agent health states.

use std::fmt;

/// The per-agent health state machine:
///
/// ```text
/// Susceptible → Infected → TemporaryImmune → Susceptible
///                    └────────────────────────────┘
///                      (when immunity_time == 0)
/// ```
///
/// Transitions are driven by the health lifecycle in `epi-sim`; this enum
/// carries no behavior of its own.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HealthStatus {
    /// Healthy and at risk of infection.
    #[default]
    Susceptible,
    /// Currently infectious; counted in the occupancy grid.
    Infected,
    /// Recovered with temporary immunity; exempt from infection checks until
    /// the immunity-expiry event fires.
    TemporaryImmune,
}

impl HealthStatus {
    #[inline]
    pub fn is_susceptible(self) -> bool {
        self == HealthStatus::Susceptible
    }

    #[inline]
    pub fn is_infected(self) -> bool {
        self == HealthStatus::Infected
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HealthStatus::Susceptible => "susceptible",
            HealthStatus::Infected => "infected",
            HealthStatus::TemporaryImmune => "temporary-immune",
        };
        f.write_str(s)
    }
}
