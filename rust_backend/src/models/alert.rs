//! Alert decision produced by the threshold evaluation.

use serde::{Deserialize, Serialize};

/// Outcome of comparing the observed maximum SO2 density against the safety
/// threshold. Derived per request, never persisted.
///
/// `observed_max` is `None` when the aggregate held no data; in that case
/// `triggered` is always false — "no data" is reported to the user as such,
/// never as an ambiguous "safe" reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlertDecision {
    pub triggered: bool,
    pub observed_max: Option<f64>,
}

impl AlertDecision {
    /// Decision for a no-data aggregate.
    pub fn no_data() -> Self {
        Self {
            triggered: false,
            observed_max: None,
        }
    }
}
