//! # API Module
//!
//! This module serves as the sole entry point for Python (Streamlit)
//! integration. It provides a stable API layer that isolates Python bindings
//! (PyO3) from internal Rust implementations, allowing free evolution of:
//!
//! - Internal geometry and raster models
//! - Provider implementations and their wire formats
//! - The aggregation and reduction pipeline
//!
//! ## Architecture
//!
//! - [`types`]: Python-facing DTOs with `#[pyclass]` derives (PyO3-compatible primitives only)
//! - [`conversions`]: Type conversion layer between internal models and Python DTOs
//! - [`streamlit`]: `#[pyfunction]` exports wrapping service/provider calls
//!
//! ## Design Principles
//!
//! 1. **Isolation**: PyO3 dependencies only in this module and `routes`
//! 2. **Conversion**: validated geometry types → f64 primitives at the boundary
//! 3. **Simplicity**: DTOs mirror what Streamlit actually needs, not internal complexity

pub mod conversions;
pub mod streamlit;
pub mod types;

// Re-export for convenience
pub use streamlit::register_api_functions;
pub use types::*;
