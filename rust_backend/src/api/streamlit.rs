//! Streamlit API Functions.
//!
//! This module contains all `#[pyfunction]` exports for the Streamlit Python
//! application. Each function acts as a thin wrapper around internal service
//! and provider calls, converting between API DTOs and internal models at the
//! boundary.
//!
//! ## Design Patterns
//!
//! 1. Accept primitives or API DTOs as parameters
//! 2. Convert to internal types, validating at the boundary
//! 3. Call internal service/provider methods
//! 4. Convert results back to API DTOs
//! 5. Return to Python with proper error handling

use pyo3::prelude::*;

use crate::api::types as api;
use crate::models::geo;
use crate::models::time::DateRange;
// Re-export the visualization route for callers that import through `api`
pub use crate::routes::visualize::visualize_so2;
pub use crate::routes::visualize::VISUALIZE_SO2;

/// Default date range shown in the UI on first load.
pub const DEFAULT_START_DATE: &str = "2020-01-01";
pub const DEFAULT_END_DATE: &str = "2020-01-15";

/// Default map centre shown in the UI on first load.
pub const DEFAULT_LATITUDE: f64 = 0.0;
pub const DEFAULT_LONGITUDE: f64 = 0.0;

/// Register all API functions with the Python module.
///
/// This function is called from lib.rs to populate the so2watch_rust_api
/// module with all exported functions and classes.
pub fn register_api_functions(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Route-specific functions, classes and constants are registered
    // centrally by `routes`
    crate::routes::register_route_functions(m)?;

    // Provider initialization
    m.add_function(wrap_pyfunction!(init_providers, m)?)?;

    // UI helpers
    m.add_function(wrap_pyfunction!(get_location_name, m)?)?;
    m.add_function(wrap_pyfunction!(validate_date_range, m)?)?;
    m.add_function(wrap_pyfunction!(validate_coordinates, m)?)?;

    // Register the remaining API classes
    m.add_class::<api::GeoPoint>()?;
    m.add_class::<api::AlertDecision>()?;
    m.add_class::<api::So2VisParams>()?;
    m.add_class::<api::LegendBand>()?;
    m.add_class::<api::VideoItem>()?;

    // Expose constants so Python avoids hard-coded values
    m.add("DEFAULT_START_DATE", DEFAULT_START_DATE)?;
    m.add("DEFAULT_END_DATE", DEFAULT_END_DATE)?;
    m.add("DEFAULT_LATITUDE", DEFAULT_LATITUDE)?;
    m.add("DEFAULT_LONGITUDE", DEFAULT_LONGITUDE)?;
    m.add("SO2_ALERT_THRESHOLD", crate::services::SO2_ALERT_THRESHOLD)?;
    m.add(
        "DEFAULT_REGION_RADIUS_METERS",
        geo::DEFAULT_REGION_RADIUS_METERS,
    )?;

    Ok(())
}

/// Initialize the provider registry (local or remote backends).
///
/// This function must be called before any visualization query. It sets up
/// the global provider singleton based on configuration.
#[pyfunction]
fn init_providers() -> PyResult<()> {
    crate::providers::init_providers()
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string()))
}

/// Human-readable placeholder name for a map point.
///
/// Args:
///     latitude: Latitude in degrees
///     longitude: Longitude in degrees
///
/// Returns:
///     Display name, e.g. "Location (40.70, -74.00)"
#[pyfunction]
fn get_location_name(latitude: f64, longitude: f64) -> String {
    geo::location_name(latitude, longitude)
}

/// Validate a date range before running a query.
///
/// Args:
///     start_date: Start date as YYYY-MM-DD
///     end_date: End date as YYYY-MM-DD
///
/// Returns:
///     None when valid, otherwise a user-facing error message
#[pyfunction]
fn validate_date_range(start_date: &str, end_date: &str) -> Option<String> {
    DateRange::parse(start_date, end_date)
        .err()
        .map(|e| e.to_string())
}

/// Validate a pair of coordinates before running a query.
///
/// Returns:
///     None when valid, otherwise a user-facing error message
#[pyfunction]
fn validate_coordinates(latitude: f64, longitude: f64) -> Option<String> {
    geo::GeoPoint::new(latitude, longitude)
        .err()
        .map(|e| e.to_string())
}
