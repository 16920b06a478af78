//! End-to-end visualization pipeline.
//!
//! One request runs: region construction -> imagery fetch -> temporal
//! median aggregation -> spatial max reduction -> threshold decision, then
//! the alert and content steps when the decision triggers. Imagery failures
//! abort the run; alert and content failures degrade to a notice so the
//! density map is never lost to a collaborator outage.

use thiserror::Error;

use crate::models::alert::AlertDecision;
use crate::models::geo::{location_name, Region};
use crate::models::raster::{AggregatedImage, GridGeometry};
use crate::models::request::VisualizationRequest;
use crate::providers::{ProviderError, Providers, VideoItem};

use super::aggregation::aggregate_series;
use super::region::build_region_with_radius;
use super::threshold::{evaluate_threshold, REDUCTION_SCALE_METERS, SO2_ALERT_THRESHOLD};

/// Search query used to look up related educational content.
pub const CONTENT_QUERY: &str = "volcano sulfur dioxide eruption";

/// Tunable knobs of the pipeline. [`Default`] gives the production values.
#[derive(Debug, Clone)]
pub struct PipelineParams {
    pub region_radius_meters: f64,
    pub alert_threshold: f64,
    pub reduction_scale_meters: f64,
    pub max_videos: usize,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            region_radius_meters: crate::models::geo::DEFAULT_REGION_RADIUS_METERS,
            alert_threshold: SO2_ALERT_THRESHOLD,
            reduction_scale_meters: REDUCTION_SCALE_METERS,
            max_videos: 5,
        }
    }
}

/// A [`VisualizationRequest`] is validated at construction, so the only way
/// a run can fail is the imagery fetch.
#[derive(Debug, Error)]
pub enum VisualizationError {
    #[error("imagery fetch failed: {0}")]
    Imagery(#[from] ProviderError),
}

pub type VisualizationResult<T> = Result<T, VisualizationError>;

/// Everything one pipeline run produced, ready for presentation.
#[derive(Debug, Clone)]
pub struct VisualizationOutcome {
    pub region: Region,
    pub image: AggregatedImage,
    pub decision: AlertDecision,
    /// True when not a single analysis cell resolved a value.
    pub no_data: bool,
    pub alert_sent: bool,
    /// Set when alert dispatch was attempted and failed.
    pub alert_notice: Option<String>,
    pub videos: Vec<VideoItem>,
    /// Set when the content lookup failed.
    pub content_notice: Option<String>,
}

/// Run the full pipeline for one request.
///
/// The alert is dispatched only when the decision triggers AND the request
/// carries a recipient; the content lookup runs whenever the decision
/// triggers. Neither collaborator failing turns the run into an error.
///
/// # Arguments
/// * `providers` - Imagery, alerting and content collaborators
/// * `request` - The selected point, date range and optional recipient
/// * `params` - Pipeline knobs, usually [`PipelineParams::default`]
pub async fn run_visualization(
    providers: &Providers,
    request: &VisualizationRequest,
    params: &PipelineParams,
) -> VisualizationResult<VisualizationOutcome> {
    let region = build_region_with_radius(request.point, params.region_radius_meters);
    log::info!(
        "visualizing SO2 for {} over {} ({} m buffer)",
        request.point,
        request.range,
        params.region_radius_meters
    );

    let series = providers
        .imagery
        .fetch_series(&request.range, &region)
        .await?;
    log::debug!("fetched {} observations", series.len());

    let grid = GridGeometry::covering(&region, params.reduction_scale_meters);
    let image = aggregate_series(&series, grid);
    let no_data = image.is_empty();

    let decision = evaluate_threshold(&image, &region, params.alert_threshold);
    log::info!(
        "threshold decision: triggered={} observed_max={:?}",
        decision.triggered,
        decision.observed_max
    );

    let mut alert_sent = false;
    let mut alert_notice = None;
    let mut videos = Vec::new();
    let mut content_notice = None;

    if decision.triggered {
        if let Some(recipient) = &request.recipient {
            let message = alert_message(request, &decision);
            match providers.alerts.send(recipient, &message).await {
                Ok(()) => {
                    alert_sent = true;
                    log::info!("alert dispatched to {}", recipient);
                }
                Err(e) => {
                    log::warn!("alert dispatch failed: {}", e);
                    alert_notice = Some(format!("Alert could not be sent: {}", e));
                }
            }
        }

        match providers.content.search(CONTENT_QUERY, params.max_videos).await {
            Ok(found) => videos = found,
            Err(e) => {
                log::warn!("content lookup failed: {}", e);
                content_notice = Some(format!("Related videos unavailable: {}", e));
            }
        }
    }

    Ok(VisualizationOutcome {
        region,
        image,
        decision,
        no_data,
        alert_sent,
        alert_notice,
        videos,
        content_notice,
    })
}

/// Text of the SMS alert.
fn alert_message(request: &VisualizationRequest, decision: &AlertDecision) -> String {
    let name = location_name(request.point.latitude(), request.point.longitude());
    match decision.observed_max {
        Some(max) => format!(
            "SO2 alert: {} exceeded the safe level between {} and {} (max density {:.6} mol/m2)",
            name,
            request.range.start_iso(),
            request.range.end_iso(),
            max
        ),
        None => format!(
            "SO2 alert: {} exceeded the safe level between {} and {}",
            name,
            request.range.start_iso(),
            request.range.end_iso()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::geo::GeoPoint;
    use crate::models::time::DateRange;

    #[test]
    fn test_alert_message_names_location_and_range() {
        let request = VisualizationRequest::new(
            GeoPoint::new(40.7, -74.0).unwrap(),
            DateRange::parse("2020-01-01", "2020-01-15").unwrap(),
            Some("+15551234567".to_string()),
        );
        let decision = AlertDecision {
            triggered: true,
            observed_max: Some(0.0005),
        };

        let message = alert_message(&request, &decision);
        assert!(message.contains("Location (40.70, -74.00)"));
        assert!(message.contains("2020-01-01"));
        assert!(message.contains("2020-01-15"));
        assert!(message.contains("0.000500"));
    }

    #[test]
    fn test_default_params_match_production_values() {
        let params = PipelineParams::default();
        assert_eq!(params.region_radius_meters, 100_000.0);
        assert_eq!(params.alert_threshold, 0.0003);
        assert_eq!(params.reduction_scale_meters, 1000.0);
        assert_eq!(params.max_videos, 5);
    }
}
