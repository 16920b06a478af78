//! Domain services: region construction, temporal aggregation, threshold
//! evaluation and the visualization pipeline that ties them together.

pub mod aggregation;
pub mod region;
pub mod threshold;
pub mod visualization;

pub use aggregation::aggregate_series;
pub use region::build_region;
pub use threshold::{evaluate_threshold, REDUCTION_SCALE_METERS, SO2_ALERT_THRESHOLD};
pub use visualization::{
    run_visualization, PipelineParams, VisualizationError, VisualizationOutcome,
    VisualizationResult,
};
