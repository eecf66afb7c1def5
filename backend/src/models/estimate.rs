//! Cost estimate model
//!
//! - [`Severity`]: coarse disease bucket that drives fallback pricing
//! - [`DiseaseInput`]: a disease name or a symptom list to be classified
//! - [`CostEstimate`]: the `{predictedDisease, low, high}` result
//! - [`CostBreakdown`]: every factor that produced an estimate
//!
//! CRITICAL: All money values are i64 (whole rupees)

use serde::{Deserialize, Serialize};

/// Severity tier of a disease
///
/// Variants are declared in increasing order of base cost, so the derived
/// `Ord` matches the pricing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Mild,
        Severity::Moderate,
        Severity::Severe,
        Severity::Critical,
    ];

    /// Whether the city multiplier is applied for this tier
    ///
    /// Mild conditions are priced the same everywhere.
    pub fn applies_city_factor(&self) -> bool {
        !matches!(self, Severity::Mild)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
            Severity::Critical => "critical",
        }
    }
}

/// What the caller wants priced
///
/// A symptom list is classified into a disease before pricing; a disease
/// name is priced as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DiseaseInput {
    Disease(String),
    Symptoms(Vec<String>),
}

impl From<&str> for DiseaseInput {
    fn from(disease: &str) -> Self {
        DiseaseInput::Disease(disease.to_string())
    }
}

impl From<String> for DiseaseInput {
    fn from(disease: String) -> Self {
        DiseaseInput::Disease(disease)
    }
}

impl From<Vec<String>> for DiseaseInput {
    fn from(symptoms: Vec<String>) -> Self {
        DiseaseInput::Symptoms(symptoms)
    }
}

impl From<&[&str]> for DiseaseInput {
    fn from(symptoms: &[&str]) -> Self {
        DiseaseInput::Symptoms(symptoms.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for DiseaseInput {
    fn from(symptoms: [&str; N]) -> Self {
        DiseaseInput::Symptoms(symptoms.iter().map(|s| s.to_string()).collect())
    }
}

/// Estimated treatment cost range
///
/// Invariant: `low <= high`, both derived from the same underlying total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostEstimate {
    pub predicted_disease: String,
    pub low: i64,
    pub high: i64,
}

/// Where the base cost of an estimate came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseCostSource {
    /// Disease has its own tabulated base cost
    Explicit,
    /// Disease is untabulated; its severity tier's fallback was used
    SeverityFallback,
    /// Neither disease nor tier is known; the global default was used
    GlobalDefault,
}

/// Full derivation of an estimate
///
/// `total = base_cost × city_factor × hospital_type_multiplier × hospital_base_factor`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub disease: String,
    pub severity: Option<Severity>,
    pub base_cost: i64,
    pub base_source: BaseCostSource,
    /// City the factor was looked up for, after alias resolution
    pub city: String,
    pub city_factor: f64,
    pub hospital_type: super::HospitalType,
    pub hospital_type_multiplier: f64,
    pub hospital_base_factor: f64,
    pub total: f64,
    pub low: i64,
    pub high: i64,
}

impl From<CostBreakdown> for CostEstimate {
    fn from(breakdown: CostBreakdown) -> Self {
        CostEstimate {
            predicted_disease: breakdown.disease,
            low: breakdown.low,
            high: breakdown.high,
        }
    }
}
