//! FFI (Foreign Function Interface) module
//!
//! PyO3 bindings exposing the engine's operations to Python.
//!
//! # Design Principles
//!
//! 1. **Minimal boundary**: Only the calling-layer operations are exposed
//! 2. **Simple types**: Strings, numbers, dicts, and lists at the boundary
//! 3. **Safe errors**: Validation errors raise `ValueError`, anything else `RuntimeError`
//! 4. **No references**: Python gets copies, never references to Rust state

pub mod functions;
pub mod types;

use pyo3::prelude::*;

/// Add every exported function to the Python module
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(functions::py_estimate_cost, m)?)?;
    m.add_function(wrap_pyfunction!(functions::py_format_cost_range, m)?)?;
    m.add_function(wrap_pyfunction!(functions::py_normalize_speciality, m)?)?;
    m.add_function(wrap_pyfunction!(functions::py_classify_symptoms, m)?)?;
    m.add_function(wrap_pyfunction!(functions::py_search_hospitals, m)?)?;
    m.add_function(wrap_pyfunction!(functions::py_fallback_triage, m)?)?;
    Ok(())
}
