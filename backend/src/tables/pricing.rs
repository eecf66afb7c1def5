//! Pricing Tables
//!
//! Base costs, severity tiers, and multiplier tables used by the estimator.
//!
//! # Units
//!
//! - Money is i64 whole rupees
//! - Multipliers are basis points (1.0 = 10,000 bps) so that estimates are
//!   computed with exact integer arithmetic
//!
//! Both serialize as plain numbers (`1.05`, `8000`) in configuration files.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::sync::OnceLock;
use thiserror::Error;

use crate::models::{HospitalType, Severity};

/// Basis points in a multiplier of 1.0
pub const BPS_PER_UNIT: u32 = 10_000;

/// Errors found when validating pricing tables
#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    #[error("Multiplier {0} is not a finite non-negative number")]
    InvalidMultiplier(f64),

    #[error("Negative base cost {cost} for '{name}'")]
    NegativeCost { name: String, cost: i64 },

    #[error("Missing fallback base cost for severity '{0}'")]
    MissingSeverityCost(&'static str),

    #[error("Severity fallback costs must strictly increase: {lower} ({lower_cost}) >= {higher} ({higher_cost})")]
    SeverityOrder {
        lower: &'static str,
        lower_cost: i64,
        higher: &'static str,
        higher_cost: i64,
    },

    #[error("Invalid cost band: low {low}% must not exceed high {high}%")]
    InvalidBand { low: u32, high: u32 },

    #[error("Table parse error: {0}")]
    Parse(String),

    #[error("Table serialization error: {0}")]
    Serialize(String),
}

// ============================================================================
// Multiplier
// ============================================================================

/// Non-negative price multiplier stored in basis points
///
/// # Example
/// ```
/// use medcost_core::tables::Multiplier;
///
/// let mumbai = Multiplier::from_f64(1.3).unwrap();
/// assert_eq!(mumbai.bps(), 13_000);
/// assert_eq!(mumbai.as_f64(), 1.3);
/// assert!(Multiplier::from_f64(-0.5).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Multiplier(u32);

impl Multiplier {
    pub const ONE: Multiplier = Multiplier(BPS_PER_UNIT);

    pub const fn from_bps(bps: u32) -> Self {
        Multiplier(bps)
    }

    /// Convert a decimal multiplier, rounding to the nearest basis point
    ///
    /// Returns `None` for NaN, infinities, negatives, and values too large
    /// to represent.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        let bps = (value * BPS_PER_UNIT as f64).round();
        if bps > u32::MAX as f64 {
            return None;
        }
        Some(Multiplier(bps as u32))
    }

    pub fn bps(self) -> u32 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / BPS_PER_UNIT as f64
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Multiplier::ONE
    }
}

impl TryFrom<f64> for Multiplier {
    type Error = TableError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Multiplier::from_f64(value).ok_or(TableError::InvalidMultiplier(value))
    }
}

impl From<Multiplier> for f64 {
    fn from(multiplier: Multiplier) -> Self {
        multiplier.as_f64()
    }
}

// ============================================================================
// PricingTables
// ============================================================================

/// Pricing configuration
///
/// Tables are immutable once built. The process-wide defaults are available
/// through [`PricingTables::builtin`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingTables {
    /// Explicit base cost per canonical disease (rupees)
    pub base_costs: BTreeMap<String, i64>,

    /// Severity tier per canonical disease
    pub disease_severity: BTreeMap<String, Severity>,

    /// Base cost for a tiered disease without an explicit entry (rupees)
    pub severity_base_costs: BTreeMap<Severity, i64>,

    /// Multiplier per canonical city, applied to non-mild tiers only
    pub city_factors: BTreeMap<String, Multiplier>,

    /// Multiplier per hospital ownership category
    pub hospital_type_multipliers: BTreeMap<HospitalType, Multiplier>,

    /// Multiplier for a type missing from `hospital_type_multipliers`
    #[serde(default = "default_unrecognized_type_multiplier")]
    pub unrecognized_type_multiplier: Multiplier,

    /// Base cost when neither the disease nor its tier is known (rupees)
    #[serde(default = "default_base_cost")]
    pub default_base_cost: i64,

    /// Lower edge of the range as a percentage of the total
    #[serde(default = "default_low_band_percent")]
    pub low_band_percent: u32,

    /// Upper edge of the range as a percentage of the total
    #[serde(default = "default_high_band_percent")]
    pub high_band_percent: u32,
}

fn default_unrecognized_type_multiplier() -> Multiplier {
    Multiplier::from_bps(12_000)
}

fn default_base_cost() -> i64 {
    500
}

fn default_low_band_percent() -> u32 {
    85
}

fn default_high_band_percent() -> u32 {
    115
}

impl Default for PricingTables {
    fn default() -> Self {
        let base_costs = BASE_COSTS
            .iter()
            .map(|(disease, cost)| (disease.to_string(), *cost))
            .collect();

        let disease_severity = DISEASE_SEVERITY
            .iter()
            .map(|(disease, severity)| (disease.to_string(), *severity))
            .collect();

        let severity_base_costs = BTreeMap::from([
            (Severity::Mild, 300),
            (Severity::Moderate, 5_000),
            (Severity::Severe, 50_000),
            (Severity::Critical, 150_000),
        ]);

        let city_factors = BTreeMap::from([
            ("Ahmedabad".to_string(), Multiplier::from_bps(10_500)),
            ("Mumbai".to_string(), Multiplier::from_bps(13_000)),
            ("Gandhinagar".to_string(), Multiplier::from_bps(12_000)),
            ("Delhi".to_string(), Multiplier::from_bps(12_500)),
            ("rural".to_string(), Multiplier::from_bps(8_500)),
        ]);

        let hospital_type_multipliers = BTreeMap::from([
            (HospitalType::Government, Multiplier::from_bps(5_000)),
            (HospitalType::Private, Multiplier::from_bps(13_000)),
            (HospitalType::Premium, Multiplier::from_bps(16_000)),
            (HospitalType::Trust, Multiplier::from_bps(8_000)),
            (HospitalType::Unknown, Multiplier::from_bps(12_000)),
        ]);

        Self {
            base_costs,
            disease_severity,
            severity_base_costs,
            city_factors,
            hospital_type_multipliers,
            unrecognized_type_multiplier: default_unrecognized_type_multiplier(),
            default_base_cost: default_base_cost(),
            low_band_percent: default_low_band_percent(),
            high_band_percent: default_high_band_percent(),
        }
    }
}

impl PricingTables {
    /// Process-wide built-in tables, constructed on first use
    pub fn builtin() -> &'static PricingTables {
        static BUILTIN: OnceLock<PricingTables> = OnceLock::new();
        BUILTIN.get_or_init(PricingTables::default)
    }

    /// Parse and validate tables from JSON
    pub fn from_json_str(json: &str) -> Result<Self, TableError> {
        let tables: PricingTables =
            serde_json::from_str(json).map_err(|e| TableError::Parse(e.to_string()))?;
        tables.validate()?;
        Ok(tables)
    }

    /// Check the table invariants
    ///
    /// - every severity tier has a fallback cost
    /// - fallback costs strictly increase from mild to critical
    /// - no cost is negative
    /// - the low band does not exceed the high band
    pub fn validate(&self) -> Result<(), TableError> {
        for (name, &cost) in &self.base_costs {
            if cost < 0 {
                return Err(TableError::NegativeCost {
                    name: name.clone(),
                    cost,
                });
            }
        }

        if self.default_base_cost < 0 {
            return Err(TableError::NegativeCost {
                name: "default_base_cost".to_string(),
                cost: self.default_base_cost,
            });
        }

        let mut previous: Option<(Severity, i64)> = None;
        for severity in Severity::ALL {
            let cost = *self
                .severity_base_costs
                .get(&severity)
                .ok_or(TableError::MissingSeverityCost(severity.as_str()))?;

            if cost < 0 {
                return Err(TableError::NegativeCost {
                    name: severity.as_str().to_string(),
                    cost,
                });
            }

            if let Some((lower, lower_cost)) = previous {
                if lower_cost >= cost {
                    return Err(TableError::SeverityOrder {
                        lower: lower.as_str(),
                        lower_cost,
                        higher: severity.as_str(),
                        higher_cost: cost,
                    });
                }
            }
            previous = Some((severity, cost));
        }

        if self.low_band_percent > self.high_band_percent {
            return Err(TableError::InvalidBand {
                low: self.low_band_percent,
                high: self.high_band_percent,
            });
        }

        Ok(())
    }

    pub fn severity_of(&self, disease: &str) -> Option<Severity> {
        self.disease_severity.get(disease).copied()
    }

    pub fn city_factor(&self, canonical_city: &str) -> Option<Multiplier> {
        self.city_factors.get(canonical_city).copied()
    }

    /// Multiplier for a hospital type, falling back to the unrecognized rate
    pub fn type_multiplier(&self, hospital_type: HospitalType) -> Multiplier {
        self.hospital_type_multipliers
            .get(&hospital_type)
            .copied()
            .unwrap_or(self.unrecognized_type_multiplier)
    }

    /// SHA-256 of the tables' JSON form, as lower-case hex
    ///
    /// Map fields are ordered, so equal tables always hash equally.
    pub fn fingerprint(&self) -> Result<String, TableError> {
        let json = serde_json::to_string(self).map_err(|e| TableError::Serialize(e.to_string()))?;

        let mut hasher = Sha256::new();
        hasher.update(json.as_bytes());
        Ok(format!("{:x}", hasher.finalize()))
    }
}

// ============================================================================
// BUILT-IN DATA
// ============================================================================

pub const BASE_COSTS: &[(&str, i64)] = &[
    // Serious conditions
    ("Angina", 40_000),
    ("Myocardial infarction", 150_000),
    ("Appendicitis", 50_000),
    ("Hip Replacement", 180_000),
    ("Dengue", 8_000),
    // Common problems
    ("Fever", 100),
    ("Cold", 100),
    ("Cough", 100),
    ("Viral Infection", 300),
    ("Stomach Pain", 400),
    ("Headache", 200),
    ("Body Pain", 300),
    ("Food Poisoning", 800),
    ("Minor Injury", 600),
    ("Skin Allergy", 400),
    ("UTI", 1_000),
    ("Sore Throat", 250),
    ("General Checkup", 300),
];

pub const DISEASE_SEVERITY: &[(&str, Severity)] = &[
    ("Fever", Severity::Mild),
    ("Cold", Severity::Mild),
    ("Cough", Severity::Mild),
    ("Headache", Severity::Mild),
    ("Sore Throat", Severity::Mild),
    ("Skin Allergy", Severity::Mild),
    ("General Checkup", Severity::Mild),
    ("Dengue", Severity::Moderate),
    ("Food Poisoning", Severity::Moderate),
    ("UTI", Severity::Moderate),
    ("Viral Infection", Severity::Moderate),
    ("Appendicitis", Severity::Severe),
    ("Hip Replacement", Severity::Severe),
    ("Myocardial infarction", Severity::Critical),
];
