pub mod visualize;

use pyo3::prelude::*;

/// Register all route-specific functions, classes and constants with the Python module.
/// This centralizes ownership of route registrations inside the `routes` module.
pub fn register_route_functions(m: &Bound<'_, PyModule>) -> PyResult<()> {
    visualize::register_routes(m)?;
    Ok(())
}
