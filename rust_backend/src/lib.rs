//! # SO2 Watch Rust Backend
//!
//! High-performance core of the SO2 monitoring dashboard. The Streamlit
//! frontend owns presentation and session state; everything from region
//! construction to the alert decision runs here and crosses the boundary as
//! flat DTOs.
//!
//! ## Architecture
//!
//! ```text
//! Streamlit (Python)
//!       |
//!       v
//! routes / api          PyO3 boundary: #[pyfunction] + DTOs
//!       |
//!       v
//! services              region -> fetch -> aggregate -> threshold -> alert
//!       |
//!       v
//! providers             imagery / SMS / video collaborators (local or remote)
//! ```

use pyo3::prelude::*;

pub mod api;
pub mod models;
pub mod providers;
pub mod routes;
pub mod services;

/// SO2 Watch Rust Backend - satellite SO2 monitoring and alerting
#[pymodule]
fn so2watch_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    api::register_api_functions(m)?;
    Ok(())
}
