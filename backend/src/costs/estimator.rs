//! Cost Estimator
//!
//! Prices a (disease, city, hospital) triple.
//!
//! # Steps
//!
//! 1. Symptom lists are classified into a disease first
//! 2. Severity tier is looked up (a disease may have none)
//! 3. Base cost: explicit entry → tier fallback → global default
//! 4. City factor applies to moderate, severe, and critical tiers only
//! 5. Hospital type multiplier, defaulting to the unrecognized rate
//! 6. Hospital base factor, defaulting to 1.0
//!
//! Every lookup has a default, so estimation cannot fail.
//!
//! # Arithmetic
//!
//! Base costs are whole rupees, the city and type multipliers are basis
//! points, and the hospital base factor is carried in units of 1e-8. The
//! band edges are computed as one exact integer quotient and rounded
//! half-up. Binary floating point never touches the rounding step.
//!
//! A base factor that cannot be carried at that scale (NaN, negative,
//! infinite, or above `i128::MAX / 1e8`) degrades to 1.0.

use tracing::{debug, warn};

use crate::models::{
    BaseCostSource, CostBreakdown, CostEstimate, DiseaseInput, HospitalRecord, Severity,
};
use crate::resolve::{CityResolver, HospitalTypeResolver, SymptomClassifier};
use crate::tables::{AliasTables, Multiplier, PricingTables, BPS_PER_UNIT};

/// Units of a hospital base factor of 1.0
pub const BASE_FACTOR_SCALE: i128 = 100_000_000;

/// Scale of `city × type × base factor` in fixed point
const TOTAL_SCALE: i128 = (BPS_PER_UNIT as i128) * (BPS_PER_UNIT as i128) * BASE_FACTOR_SCALE;

/// Prices diseases against the pricing and alias tables
///
/// # Example
/// ```
/// use medcost_core::costs::CostEstimator;
/// use medcost_core::tables::{AliasTables, PricingTables};
/// use medcost_core::Hospital;
///
/// let estimator = CostEstimator::new(PricingTables::builtin(), AliasTables::builtin());
/// let hospital = Hospital::new("Civil Hospital", "Ahmedabad")
///     .with_type("government")
///     .with_base_cost_factor(1.0);
///
/// let estimate = estimator.estimate("Fever", "Ahmedabad", &hospital);
/// assert_eq!((estimate.low, estimate.high), (43, 58));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CostEstimator<'a> {
    pricing: &'a PricingTables,
    aliases: &'a AliasTables,
}

impl<'a> CostEstimator<'a> {
    pub fn new(pricing: &'a PricingTables, aliases: &'a AliasTables) -> Self {
        Self { pricing, aliases }
    }

    /// Estimate the cost range for a disease or symptom list
    pub fn estimate<H>(&self, input: impl Into<DiseaseInput>, city: &str, hospital: &H) -> CostEstimate
    where
        H: HospitalRecord + ?Sized,
    {
        self.estimate_breakdown(input, city, hospital).into()
    }

    /// Estimate and report every factor that went into it
    pub fn estimate_breakdown<H>(
        &self,
        input: impl Into<DiseaseInput>,
        city: &str,
        hospital: &H,
    ) -> CostBreakdown
    where
        H: HospitalRecord + ?Sized,
    {
        let disease = self.resolve_disease(input.into());
        let severity = self.pricing.severity_of(&disease);
        let (base_cost, base_source) = self.base_cost(&disease, severity);

        let resolved_city = CityResolver::new(&self.aliases.city).resolve(city);
        let city_factor = match severity {
            Some(tier) if tier.applies_city_factor() => resolved_city
                .and_then(|c| self.pricing.city_factor(c))
                .unwrap_or(Multiplier::ONE),
            _ => Multiplier::ONE,
        };

        let hospital_type =
            HospitalTypeResolver::new(&self.aliases.hospital_type).resolve(hospital.hospital_type());
        let type_multiplier = self.pricing.type_multiplier(hospital_type);
        let base_factor = hospital_base_factor(hospital);

        let scaled_total = (base_cost as i128)
            .saturating_mul(city_factor.bps() as i128)
            .saturating_mul(type_multiplier.bps() as i128)
            .saturating_mul(base_factor);

        let low = band_edge(scaled_total, self.pricing.low_band_percent);
        let high = band_edge(scaled_total, self.pricing.high_band_percent);

        CostBreakdown {
            disease,
            severity,
            base_cost,
            base_source,
            city: resolved_city.unwrap_or(city.trim()).to_string(),
            city_factor: city_factor.as_f64(),
            hospital_type,
            hospital_type_multiplier: type_multiplier.as_f64(),
            hospital_base_factor: base_factor as f64 / BASE_FACTOR_SCALE as f64,
            total: scaled_total as f64 / TOTAL_SCALE as f64,
            low,
            high,
        }
    }

    fn resolve_disease(&self, input: DiseaseInput) -> String {
        match input {
            DiseaseInput::Disease(name) => name,
            DiseaseInput::Symptoms(symptoms) => SymptomClassifier::new(&self.aliases.symptom)
                .classify(&symptoms)
                .to_string(),
        }
    }

    fn base_cost(&self, disease: &str, severity: Option<Severity>) -> (i64, BaseCostSource) {
        if let Some(&cost) = self.pricing.base_costs.get(disease) {
            return (cost, BaseCostSource::Explicit);
        }

        if let Some(&cost) = severity.and_then(|tier| self.pricing.severity_base_costs.get(&tier)) {
            return (cost, BaseCostSource::SeverityFallback);
        }

        debug!(disease, "Disease not tabulated, using default base cost");
        (self.pricing.default_base_cost, BaseCostSource::GlobalDefault)
    }
}

/// Convert a base cost factor to units of 1e-8, rounding to the nearest unit
///
/// Returns `None` for NaN, infinities, negatives, and values whose scaled
/// form does not fit in an `i128`.
///
/// # Example
/// ```
/// use medcost_core::costs::estimator::scale_base_factor;
///
/// assert_eq!(scale_base_factor(1.23456), Some(123_456_000));
/// assert_eq!(scale_base_factor(500_000.0), Some(50_000_000_000_000));
/// assert_eq!(scale_base_factor(-0.5), None);
/// assert_eq!(scale_base_factor(1e40), None);
/// ```
pub fn scale_base_factor(factor: f64) -> Option<i128> {
    if !factor.is_finite() || factor < 0.0 {
        return None;
    }
    let scaled = (factor * BASE_FACTOR_SCALE as f64).round();
    // i128::MAX as f64 rounds up to 2^127, which is itself out of range
    if scaled >= i128::MAX as f64 {
        return None;
    }
    Some(scaled as i128)
}

/// Hospital base factor in units of 1e-8; invalid values degrade to 1.0
fn hospital_base_factor<H: HospitalRecord + ?Sized>(hospital: &H) -> i128 {
    match hospital.base_cost_factor() {
        None => BASE_FACTOR_SCALE,
        Some(factor) => scale_base_factor(factor).unwrap_or_else(|| {
            warn!(
                hospital = hospital.name(),
                factor, "Invalid base cost factor, using 1.0"
            );
            BASE_FACTOR_SCALE
        }),
    }
}

/// `scaled_total × percent / 100`, unscaled and rounded half away from zero
fn band_edge(scaled_total: i128, percent: u32) -> i64 {
    let numerator = scaled_total.saturating_mul(percent as i128);
    let denominator = TOTAL_SCALE * 100;
    let rounded = round_half_away_div(numerator, denominator);
    i64::try_from(rounded).unwrap_or(if rounded < 0 { i64::MIN } else { i64::MAX })
}

fn round_half_away_div(numerator: i128, denominator: i128) -> i128 {
    let half = denominator / 2;
    if numerator >= 0 {
        numerator.saturating_add(half) / denominator
    } else {
        numerator.saturating_sub(half) / denominator
    }
}
