//! Per-interaction visualization request.

use serde::{Deserialize, Serialize};

use super::geo::GeoPoint;
use super::time::DateRange;

/// Immutable snapshot of one user interaction: the selected point, the date
/// range and an optional alert recipient.
///
/// The shell owns its session state; each map click or button press builds a
/// fresh request and passes it through the pipeline, so nothing in the core
/// is process-global or mutable across interactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizationRequest {
    pub point: GeoPoint,
    pub range: DateRange,
    /// Contact identifier (e.g. phone number) for SMS alerts. `None` means
    /// alert dispatch is skipped without error.
    pub recipient: Option<String>,
}

impl VisualizationRequest {
    pub fn new(point: GeoPoint, range: DateRange, recipient: Option<String>) -> Self {
        // An empty contact field in the UI is the same as no contact
        let recipient = recipient.filter(|r| !r.trim().is_empty());
        Self {
            point,
            range,
            recipient,
        }
    }
}
