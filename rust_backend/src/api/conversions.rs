//! Type conversions between internal models and API DTOs.
//!
//! ## Conversion Strategy
//!
//! - `From<InternalType> for ApiType`: infallible conversion to API types
//! - Validated geometry types flatten to f64 degrees at the boundary
//! - The dense grid collapses to a sparse list of resolved in-region cells

use crate::api::types as api;
use crate::models::alert::AlertDecision;
use crate::models::geo::GeoPoint;
use crate::providers::content::VideoItem;
use crate::services::VisualizationOutcome;

impl From<GeoPoint> for api::GeoPoint {
    fn from(point: GeoPoint) -> Self {
        api::GeoPoint {
            latitude: point.latitude(),
            longitude: point.longitude(),
        }
    }
}

impl From<&AlertDecision> for api::AlertDecision {
    fn from(decision: &AlertDecision) -> Self {
        api::AlertDecision {
            triggered: decision.triggered,
            observed_max: decision.observed_max,
        }
    }
}

impl From<&VideoItem> for api::VideoItem {
    fn from(video: &VideoItem) -> Self {
        api::VideoItem {
            title: video.title.clone(),
            video_id: video.video_id.clone(),
            url: video.url.clone(),
        }
    }
}

/// Default legend shown next to the density layer.
pub fn default_legend() -> Vec<api::LegendBand> {
    let bands = [
        ("0.0000 - 0.0001", "blue"),
        ("0.0001 - 0.0002", "green"),
        ("0.0002 - 0.00025", "yellow"),
        ("0.00025 - 0.0003", "orange"),
        ("> 0.0003", "red"),
    ];
    bands
        .iter()
        .map(|(label, color)| api::LegendBand {
            label: label.to_string(),
            color: color.to_string(),
        })
        .collect()
}

impl From<&VisualizationOutcome> for api::So2MapData {
    fn from(outcome: &VisualizationOutcome) -> Self {
        // Only resolved cells inside the circular region cross the boundary;
        // Streamlit renders them directly without knowing the grid shape.
        let cells = outcome
            .image
            .iter_values()
            .filter(|(center, _)| outcome.region.contains(center))
            .map(|(center, value)| api::So2Cell {
                latitude: center.latitude(),
                longitude: center.longitude(),
                value,
            })
            .collect();

        api::So2MapData {
            center: outcome.region.center().into(),
            radius_meters: outcome.region.radius_meters(),
            scale_meters: crate::services::REDUCTION_SCALE_METERS,
            cells,
            vis_params: api::So2VisParams::so2_default(),
            legend: default_legend(),
            no_data: outcome.no_data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_point_flattens_to_primitives() {
        let point = GeoPoint::new(40.7, -74.0).unwrap();
        let dto: api::GeoPoint = point.into();
        assert_eq!(dto.latitude, 40.7);
        assert_eq!(dto.longitude, -74.0);
    }

    #[test]
    fn test_legend_matches_palette_order() {
        let legend = default_legend();
        let colors: Vec<_> = legend.iter().map(|b| b.color.as_str()).collect();
        assert_eq!(colors, vec!["blue", "green", "yellow", "orange", "red"]);
    }
}
