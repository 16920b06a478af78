//! Python-facing Data Transfer Objects (DTOs).
//!
//! This module defines all `#[pyclass]` types exposed to Python through PyO3.
//! These types use only PyO3-compatible primitives (String, f64, Vec, bool)
//! and are isolated from internal Rust models, so the grid representation and
//! geometry types can evolve without touching the Python surface.
//!
//! ## Design Guidelines
//!
//! 1. **Primitives Only**: degrees and densities as f64, identifiers as String
//! 2. **Flat Structures**: optimize for Streamlit ergonomics, not internal shape
//! 3. **Serializable**: all types support to/from Python dict/JSON
//! 4. **Documented**: each field should be clear to Python users

use pyo3::prelude::*;
use serde::{Deserialize, Serialize};

/// A geographic point in WGS84 degrees.
#[pyclass(module = "so2watch_rust_api", get_all)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, [-90, 90]
    pub latitude: f64,
    /// Longitude in degrees, [-180, 180]
    pub longitude: f64,
}

#[pymethods]
impl GeoPoint {
    #[new]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    fn __repr__(&self) -> String {
        format!("GeoPoint({:.4}, {:.4})", self.latitude, self.longitude)
    }
}

/// Outcome of the threshold evaluation.
#[pyclass(module = "so2watch_rust_api", get_all)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlertDecision {
    /// True when the observed maximum strictly exceeds the threshold
    pub triggered: bool,
    /// Maximum SO2 density inside the region in mol/m², None when no data
    pub observed_max: Option<f64>,
}

#[pymethods]
impl AlertDecision {
    fn __repr__(&self) -> String {
        format!(
            "AlertDecision(triggered={}, observed_max={:?})",
            self.triggered, self.observed_max
        )
    }
}

/// One resolved analysis cell of the density map.
#[pyclass(module = "so2watch_rust_api", get_all)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct So2Cell {
    /// Cell-centre latitude in degrees
    pub latitude: f64,
    /// Cell-centre longitude in degrees
    pub longitude: f64,
    /// Median SO2 column number density in mol/m²
    pub value: f64,
}

/// Color-scale parameters for rendering the density layer.
#[pyclass(module = "so2watch_rust_api", get_all)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct So2VisParams {
    /// Density mapped to the bottom of the palette
    pub min: f64,
    /// Density mapped to the top of the palette
    pub max: f64,
    /// Palette colors, low to high
    pub palette: Vec<String>,
}

#[pymethods]
impl So2VisParams {
    /// Standard SO2 visualization scale: 0 to the alert threshold across a
    /// blue-to-red palette.
    #[staticmethod]
    pub fn so2_default() -> Self {
        Self {
            min: 0.0,
            max: 0.0003,
            palette: ["blue", "green", "yellow", "orange", "red"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// One entry of the map legend.
#[pyclass(module = "so2watch_rust_api", get_all)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendBand {
    /// Density range label, e.g. "0.0001 - 0.0002"
    pub label: String,
    /// Color swatch for the band
    pub color: String,
}

/// A related educational video.
#[pyclass(module = "so2watch_rust_api", get_all)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoItem {
    pub title: String,
    pub video_id: String,
    /// Watch URL for embedding
    pub url: String,
}

#[pymethods]
impl VideoItem {
    fn __repr__(&self) -> String {
        format!("VideoItem('{}', id='{}')", self.title, self.video_id)
    }
}

/// Everything the map panel needs to render one query.
#[pyclass(module = "so2watch_rust_api", get_all)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct So2MapData {
    /// Selected point at the centre of the study region
    pub center: GeoPoint,
    /// Buffer radius in metres
    pub radius_meters: f64,
    /// Analysis sampling scale in metres
    pub scale_meters: f64,
    /// Resolved cells inside the region; empty when no_data is true
    pub cells: Vec<So2Cell>,
    /// Color-scale parameters for the density layer
    pub vis_params: So2VisParams,
    /// Legend bands, low to high
    pub legend: Vec<LegendBand>,
    /// True when the query window held no usable observations
    pub no_data: bool,
}

/// Complete result of one visualization run, ready for presentation.
#[pyclass(module = "so2watch_rust_api", get_all)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizationData {
    pub map: So2MapData,
    pub decision: AlertDecision,
    /// Human-readable name of the selected point
    pub location_name: String,
    /// Queried range as ISO dates
    pub start_date: String,
    pub end_date: String,
    /// True when an SMS alert was dispatched
    pub alert_sent: bool,
    /// Set when alert dispatch was attempted and failed
    pub alert_notice: Option<String>,
    /// Related videos, present only when the alert triggered
    pub videos: Vec<VideoItem>,
    /// Set when the video lookup failed
    pub content_notice: Option<String>,
}

#[pymethods]
impl VisualizationData {
    /// Serialize to a JSON string, for Streamlit session-state caching.
    pub fn to_json(&self) -> PyResult<String> {
        serde_json::to_string(self)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))
    }

    /// Rebuild a result from a JSON string produced by [`Self::to_json`].
    #[staticmethod]
    pub fn from_json(data: &str) -> PyResult<Self> {
        serde_json::from_str(data)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))
    }

    fn __repr__(&self) -> String {
        format!(
            "VisualizationData(location='{}', triggered={}, cells={})",
            self.location_name,
            self.decision.triggered,
            self.map.cells.len()
        )
    }
}
