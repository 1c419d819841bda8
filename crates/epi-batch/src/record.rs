//! Per-run analytics records and the analysis payload.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::config::RunParams;

/// The outcome of one run, paired with the parameters that produced it.
///
/// Serializes flat (parameters and results side by side, camelCase) so each
/// record is one self-contained row for correlation analysis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsRecord {
    #[serde(flatten)]
    pub params: RunParams,

    /// Mean of the periodic infected-count samples over the run.
    pub average_infected: f64,

    /// Peak simultaneous infected count, including the seeded initial state.
    pub max_infected: u32,
}

/// Wrap a record set in the `{"data": [...]}` envelope the correlation
/// service consumes.
pub fn analysis_payload(records: &[AnalyticsRecord]) -> serde_json::Value {
    json!({ "data": records })
}
