//! Medical Cost Engine - Rust Core
//!
//! Rule-based resolution and pricing for comparing hospitals: free-text
//! specialities and symptoms are resolved to canonical names, and treatment
//! costs are estimated from severity tiers and multiplier tables.
//!
//! # Architecture
//!
//! - **tables**: Alias and pricing tables (pure data)
//! - **resolve**: Speciality, symptom, city, hospital type, and scheme resolution
//! - **costs**: Multi-factor cost estimator and range formatting
//! - **matching**: Hospital search pipeline over a hospital source
//! - **triage**: Triage hints and the offline keyword fallback
//! - **engine**: Facade over one set of tables
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (whole rupees)
//! 2. Tables are immutable after construction
//! 3. Unknown domain values degrade to defaults, never to errors
//! 4. Every estimate satisfies `low <= high`

// Module declarations
pub mod costs;
pub mod engine;
pub mod error;
pub mod matching;
pub mod models;
pub mod resolve;
pub mod tables;
pub mod triage;

// Re-exports for convenience
pub use costs::{format_cost_range, format_rupees, CostEstimator};
pub use engine::Engine;
pub use error::{EngineError, Result};
pub use matching::{HospitalCatalog, HospitalMatcher, HospitalSource, ResultOrder, SearchQuery};
pub use models::{
    CostBreakdown, CostEstimate, DiseaseInput, EnrichedHospital, Hospital, HospitalRecord, HospitalType,
    Severity,
};
pub use triage::{fallback_triage, TriageHint, Urgency};

/// Estimate the cost range of a disease or symptom list at a hospital
///
/// Uses the built-in tables. See [`Engine`] for custom tables.
pub fn estimate_cost<H>(input: impl Into<DiseaseInput>, city: &str, hospital: &H) -> CostEstimate
where
    H: HospitalRecord + ?Sized,
{
    Engine::builtin().estimate_cost(input, city, hospital)
}

/// Resolve free text to a canonical speciality using the built-in tables
pub fn normalize_speciality(text: &str) -> &'static str {
    Engine::builtin().normalize_speciality(text)
}

/// Resolve symptom phrases to a canonical disease using the built-in tables
pub fn classify_symptoms<I, S>(symptoms: I) -> &'static str
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Engine::builtin().classify_symptoms(symptoms)
}

/// Search a hospital source using the built-in tables
pub fn search_hospitals<S: HospitalSource + ?Sized>(
    source: &S,
    query: &SearchQuery,
) -> Result<Vec<EnrichedHospital>> {
    Engine::builtin().search_hospitals(source, query)
}

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn medcost_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    ffi::register(m)
}
