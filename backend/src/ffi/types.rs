//! Type conversion utilities for FFI boundary
//!
//! Converts between Rust types and PyO3-compatible types (PyDict, PyList, etc.)

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList, PyString};

use crate::error::EngineError;
use crate::models::{AcceptedScheme, CostEstimate, DiseaseInput, EnrichedHospital, Hospital};
use crate::triage::TriageHint;

// ========================================================================
// PyDict Extraction Helpers
// ========================================================================

/// Extract a required field from a Python dict with clear error messages.
///
/// # Errors
/// Returns PyValueError if the field is missing or None, or if type
/// conversion fails.
fn extract_required<'py, T>(dict: &Bound<'py, PyDict>, key: &str) -> PyResult<T>
where
    T: FromPyObject<'py>,
{
    match dict.get_item(key)? {
        Some(value) if !value.is_none() => value.extract(),
        _ => Err(PyValueError::new_err(format!("Missing required field '{}'", key))),
    }
}

/// Extract an optional field from a Python dict.
///
/// A missing key and an explicit `None` both yield `Ok(None)`.
fn extract_optional<'py, T>(dict: &Bound<'py, PyDict>, key: &str) -> PyResult<Option<T>>
where
    T: FromPyObject<'py>,
{
    match dict.get_item(key)? {
        Some(value) if !value.is_none() => Ok(Some(value.extract()?)),
        _ => Ok(None),
    }
}

/// Extract a field with a default value if missing or None.
fn extract_with_default<'py, T>(dict: &Bound<'py, PyDict>, key: &str, default: T) -> PyResult<T>
where
    T: FromPyObject<'py>,
{
    Ok(extract_optional(dict, key)?.unwrap_or(default))
}

// ========================================================================
// Parsers
// ========================================================================

/// Convert a Python dict to a Hospital
///
/// Accepts the catalog spellings `lat`/`lng` as well as
/// `latitude`/`longitude`.
pub fn parse_hospital(dict: &Bound<'_, PyDict>) -> PyResult<Hospital> {
    let mut hospital = Hospital::new(
        extract_required::<String>(dict, "name")?,
        extract_required::<String>(dict, "city")?,
    );

    hospital.address = extract_optional(dict, "address")?;
    hospital.specialities = extract_with_default(dict, "specialities", Vec::new())?;
    hospital.hospital_type = extract_optional(dict, "hospital_type")?;
    hospital.base_cost_factor = extract_optional(dict, "base_cost_factor")?;
    hospital.rating = extract_with_default(dict, "rating", 0.0)?;
    hospital.latitude = match extract_optional(dict, "lat")? {
        Some(lat) => Some(lat),
        None => extract_optional(dict, "latitude")?,
    };
    hospital.longitude = match extract_optional(dict, "lng")? {
        Some(lng) => Some(lng),
        None => extract_optional(dict, "longitude")?,
    };
    hospital.total_beds = extract_with_default(dict, "total_beds", 0)?;
    hospital.icu_beds = extract_with_default(dict, "icu_beds", 0)?;
    hospital.emergency_beds = extract_with_default(dict, "emergency_beds", 0)?;

    let schemes: Vec<Bound<'_, PyDict>> = extract_with_default(dict, "acceptedSchemes", Vec::new())?;
    for scheme in &schemes {
        hospital.accepted_schemes.push(AcceptedScheme {
            scheme_name: extract_required(scheme, "schemeName")?,
            scheme_id: extract_optional(scheme, "schemeId")?,
        });
    }

    Ok(hospital)
}

/// A `str` is a disease name; any other sequence is a symptom list
pub fn parse_disease_input(value: &Bound<'_, PyAny>) -> PyResult<DiseaseInput> {
    if value.is_instance_of::<PyString>() {
        Ok(DiseaseInput::Disease(value.extract()?))
    } else {
        Ok(DiseaseInput::Symptoms(value.extract()?))
    }
}

pub fn engine_error_to_py(error: EngineError) -> PyErr {
    if error.is_validation() {
        PyValueError::new_err(error.to_string())
    } else {
        PyRuntimeError::new_err(error.to_string())
    }
}

// ========================================================================
// Converters
// ========================================================================

pub fn estimate_to_py<'py>(py: Python<'py>, estimate: &CostEstimate) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("predictedDisease", &estimate.predicted_disease)?;
    dict.set_item("low", estimate.low)?;
    dict.set_item("high", estimate.high)?;
    Ok(dict)
}

pub fn enriched_to_py<'py>(py: Python<'py>, hospital: &EnrichedHospital) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("id", hospital.id.map(|id| id.to_string()))?;
    dict.set_item("name", &hospital.name)?;
    dict.set_item("address", &hospital.address)?;
    dict.set_item("city", &hospital.city)?;
    dict.set_item("rating", hospital.rating)?;
    dict.set_item("hospital_type", hospital.hospital_type.as_str())?;
    dict.set_item("lat", hospital.latitude)?;
    dict.set_item("lng", hospital.longitude)?;
    dict.set_item("map_url", &hospital.map_url)?;
    dict.set_item("predicted_disease", &hospital.predicted_disease)?;

    let cost = PyDict::new_bound(py);
    cost.set_item("low", hospital.computed_cost.low)?;
    cost.set_item("high", hospital.computed_cost.high)?;
    dict.set_item("computed_cost", cost)?;
    dict.set_item("cost_text", &hospital.cost_text)?;

    let schemes = PyList::empty_bound(py);
    for scheme in &hospital.schemes {
        let entry = PyDict::new_bound(py);
        entry.set_item("name", &scheme.name)?;
        entry.set_item("url", &scheme.url)?;
        schemes.append(entry)?;
    }
    dict.set_item("schemes", schemes)?;

    dict.set_item("total_beds", hospital.total_beds)?;
    dict.set_item("icu_beds", hospital.icu_beds)?;
    dict.set_item("emergency_beds", hospital.emergency_beds)?;
    Ok(dict)
}

pub fn triage_to_py<'py>(py: Python<'py>, hint: &TriageHint) -> PyResult<Bound<'py, PyDict>> {
    let diseases = PyList::empty_bound(py);
    for disease in &hint.possible_diseases {
        let entry = PyDict::new_bound(py);
        entry.set_item("name", &disease.name)?;
        entry.set_item("probability", disease.probability)?;
        entry.set_item("notes", &disease.notes)?;
        diseases.append(entry)?;
    }

    let urgency = match hint.urgency {
        crate::triage::Urgency::Low => "low",
        crate::triage::Urgency::Medium => "medium",
        crate::triage::Urgency::High => "high",
    };

    let dict = PyDict::new_bound(py);
    dict.set_item("possible_diseases", diseases)?;
    dict.set_item("speciality", &hint.speciality)?;
    dict.set_item("urgency", urgency)?;
    dict.set_item("confidence", hint.confidence)?;
    Ok(dict)
}
