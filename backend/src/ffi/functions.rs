//! Python-callable engine operations
//!
//! # Example (from Python)
//!
//! ```python
//! from medcost_core import estimate_cost, search_hospitals
//!
//! estimate = estimate_cost("Fever", "Ahmedabad", {"name": "Civil", "city": "Ahmedabad",
//!                                                  "hospital_type": "government"})
//! print(estimate["low"], estimate["high"])  # 43 58
//!
//! results = search_hospitals(hospitals, "heart specialist", "Ahmedabad", budget=100000)
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use super::types::{
    engine_error_to_py, enriched_to_py, estimate_to_py, parse_disease_input, parse_hospital, triage_to_py,
};
use crate::engine::Engine;
use crate::matching::{HospitalCatalog, ResultOrder, SearchQuery};
use crate::models::Hospital;

/// Estimate a cost range
///
/// `disease` is a disease name or a list of symptoms. When `hospital` is
/// omitted, every hospital attribute takes its default.
#[pyfunction(name = "estimate_cost")]
#[pyo3(signature = (disease, city, hospital=None))]
pub fn py_estimate_cost<'py>(
    py: Python<'py>,
    disease: &Bound<'py, PyAny>,
    city: &str,
    hospital: Option<&Bound<'py, PyDict>>,
) -> PyResult<Bound<'py, PyDict>> {
    let input = parse_disease_input(disease)?;
    let hospital = match hospital {
        Some(dict) => parse_hospital(dict)?,
        None => Hospital::new("", city),
    };

    let estimate = Engine::builtin().estimate_cost(input, city, &hospital);
    estimate_to_py(py, &estimate)
}

#[pyfunction(name = "format_cost_range")]
pub fn py_format_cost_range(low: i64, high: i64) -> String {
    crate::format_cost_range(low, high)
}

#[pyfunction(name = "normalize_speciality")]
#[pyo3(signature = (text=None))]
pub fn py_normalize_speciality(text: Option<&str>) -> &'static str {
    Engine::builtin().normalizer().normalize_opt(text)
}

/// Classify a symptom phrase or a list of phrases
#[pyfunction(name = "classify_symptoms")]
pub fn py_classify_symptoms(symptoms: &Bound<'_, PyAny>) -> PyResult<&'static str> {
    let symptoms: Vec<String> = match parse_disease_input(symptoms)? {
        crate::models::DiseaseInput::Disease(one) => vec![one],
        crate::models::DiseaseInput::Symptoms(many) => many,
    };
    Ok(Engine::builtin().classify_symptoms(&symptoms))
}

/// Search a list of hospital dicts
///
/// Raises `ValueError` for missing/invalid parameters and `RuntimeError`
/// for malformed hospital records.
#[pyfunction(name = "search_hospitals")]
#[pyo3(signature = (hospitals, speciality=None, city=None, disease=None, budget=None, order=None))]
pub fn py_search_hospitals<'py>(
    py: Python<'py>,
    hospitals: &Bound<'py, PyList>,
    speciality: Option<String>,
    city: Option<String>,
    disease: Option<&Bound<'py, PyAny>>,
    budget: Option<f64>,
    order: Option<&str>,
) -> PyResult<Bound<'py, PyList>> {
    let mut catalog = HospitalCatalog::default();
    for item in hospitals.iter() {
        let dict = item.downcast::<PyDict>()?;
        catalog.push(parse_hospital(dict)?);
    }

    let query = SearchQuery {
        speciality,
        city,
        disease: disease.map(parse_disease_input).transpose()?,
        budget,
        order: parse_order(order)?,
    };

    let results = Engine::builtin()
        .search_hospitals(&catalog, &query)
        .map_err(engine_error_to_py)?;

    let list = PyList::empty_bound(py);
    for hospital in &results {
        list.append(enriched_to_py(py, hospital)?)?;
    }
    Ok(list)
}

#[pyfunction(name = "fallback_triage")]
pub fn py_fallback_triage<'py>(py: Python<'py>, symptoms_text: &str) -> PyResult<Bound<'py, PyDict>> {
    triage_to_py(py, &crate::triage::fallback_triage(symptoms_text))
}

fn parse_order(order: Option<&str>) -> PyResult<ResultOrder> {
    match order {
        None | Some("as_listed") => Ok(ResultOrder::AsListed),
        Some("cost_ascending") => Ok(ResultOrder::CostAscending),
        Some("rating_descending") => Ok(ResultOrder::RatingDescending),
        Some(other) => Err(PyValueError::new_err(format!("Unknown result order '{}'", other))),
    }
}
