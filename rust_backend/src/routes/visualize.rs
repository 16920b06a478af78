use pyo3::prelude::*;
use tokio::runtime::Runtime;

use crate::api::types as api;
use crate::models::geo::GeoPoint;
use crate::models::request::VisualizationRequest;
use crate::models::time::DateRange;
use crate::services::{run_visualization, PipelineParams};

/// Route function name constant
pub const VISUALIZE_SO2: &str = "visualize_so2";

/// Run the full SO2 visualization pipeline for a point and date range.
///
/// Args:
///     latitude: Selected latitude in degrees
///     longitude: Selected longitude in degrees
///     start_date: Query start as YYYY-MM-DD
///     end_date: Query end as YYYY-MM-DD
///     recipient: Optional phone number for SMS alerts
///
/// Returns:
///     VisualizationData with the density map, decision and related content
#[pyfunction]
#[pyo3(signature = (latitude, longitude, start_date, end_date, recipient=None))]
pub fn visualize_so2(
    latitude: f64,
    longitude: f64,
    start_date: &str,
    end_date: &str,
    recipient: Option<String>,
) -> PyResult<api::VisualizationData> {
    let point = GeoPoint::new(latitude, longitude)
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;
    let range = DateRange::parse(start_date, end_date)
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;
    let request = VisualizationRequest::new(point, range, recipient);

    let providers = crate::providers::get_providers()
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string()))?;

    let runtime = Runtime::new().map_err(|e| {
        PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
            "Failed to create async runtime: {}",
            e
        ))
    })?;
    let outcome = runtime
        .block_on(run_visualization(
            &providers,
            &request,
            &PipelineParams::default(),
        ))
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string()))?;

    Ok(api::VisualizationData {
        map: (&outcome).into(),
        decision: (&outcome.decision).into(),
        location_name: crate::models::geo::location_name(latitude, longitude),
        start_date: range.start_iso(),
        end_date: range.end_iso(),
        alert_sent: outcome.alert_sent,
        alert_notice: outcome.alert_notice.clone(),
        videos: outcome.videos.iter().map(|v| v.into()).collect(),
        content_notice: outcome.content_notice.clone(),
    })
}

/// Register visualization functions, classes and constants with the Python module.
pub fn register_routes(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(visualize_so2, m)?)?;
    m.add_class::<api::So2Cell>()?;
    m.add_class::<api::So2MapData>()?;
    m.add_class::<api::VisualizationData>()?;
    m.add("VISUALIZE_SO2", VISUALIZE_SO2)?;
    Ok(())
}
