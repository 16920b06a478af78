//! Threshold evaluation: spatial max reduction and the alert decision.

use crate::models::alert::AlertDecision;
use crate::models::geo::Region;
use crate::models::raster::AggregatedImage;

/// SO2 column number density above which an alert fires, in mol/m².
pub const SO2_ALERT_THRESHOLD: f64 = 0.0003;

/// Sampling scale of the spatial reduction, in metres.
pub const REDUCTION_SCALE_METERS: f64 = 1000.0;

/// Reduce an aggregated image to its maximum density inside the region and
/// compare it against the threshold.
///
/// The comparison is strictly greater-than: a maximum exactly at the
/// threshold does not trigger. An image with no resolved cell inside the
/// region yields [`AlertDecision::no_data`], never a triggered alert.
///
/// # Arguments
/// * `image` - Median image on the analysis grid
/// * `region` - Circular study region bounding the reduction
/// * `threshold` - Density above which the decision is `triggered`
pub fn evaluate_threshold(
    image: &AggregatedImage,
    region: &Region,
    threshold: f64,
) -> AlertDecision {
    let observed_max = image
        .iter_values()
        .filter(|(center, _)| region.contains(center))
        .map(|(_, value)| value)
        .fold(None, |max: Option<f64>, value| {
            Some(max.map_or(value, |m| m.max(value)))
        });

    match observed_max {
        Some(max) => AlertDecision {
            triggered: max > threshold,
            observed_max: Some(max),
        },
        None => AlertDecision::no_data(),
    }
}
