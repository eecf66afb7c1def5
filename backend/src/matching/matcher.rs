//! Hospital Matcher
//!
//! Search pipeline:
//! 1. Normalize the requested speciality
//! 2. Take the hospitals in the requested city (case-insensitive exact)
//! 3. Keep hospitals whose speciality set contains the canonical speciality
//! 4. Price each survivor for the requested disease, or
//!    [`DEFAULT_SEARCH_DISEASE`] when none was given
//! 5. Attach a map link when both coordinates are known
//! 6. Drop hospitals whose low estimate exceeds the budget
//! 7. Return in candidate order unless another order was requested
//!
//! A malformed record aborts the whole search; no partial result set is
//! ever returned.

use tracing::{error, info};

use crate::costs::estimator::scale_base_factor;
use crate::costs::{format_cost_range, CostEstimator};
use crate::error::{EngineError, Result};
use crate::matching::query::{ResultOrder, SearchQuery, ValidatedQuery};
use crate::matching::source::HospitalSource;
use crate::models::enriched::map_url;
use crate::models::{ComputedCost, DiseaseInput, EnrichedHospital, HospitalRecord};
use crate::resolve::{same_city, HospitalTypeResolver, SchemeDirectory, SpecialityNormalizer};
use crate::tables::{AliasTables, PricingTables};

/// Disease priced when a search names no disease
///
/// Speciality-only searches still show a cost, so a common moderate
/// condition stands in for the unknown diagnosis.
pub const DEFAULT_SEARCH_DISEASE: &str = "Dengue";

/// Finds and prices hospitals for a speciality in a city
///
/// # Example
/// ```
/// use medcost_core::matching::HospitalMatcher;
/// use medcost_core::tables::{AliasTables, PricingTables};
/// use medcost_core::{Hospital, HospitalCatalog, SearchQuery};
///
/// let catalog = HospitalCatalog::new(vec![
///     Hospital::new("Civil Hospital", "Ahmedabad")
///         .with_type("government")
///         .with_specialities(&["Cardiology"]),
/// ]);
///
/// let matcher = HospitalMatcher::new(PricingTables::builtin(), AliasTables::builtin(), &catalog);
/// let results = matcher.search(&SearchQuery::new("heart specialist", "ahmedabad")).unwrap();
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].predicted_disease, "Dengue");
/// ```
pub struct HospitalMatcher<'a, S: HospitalSource + ?Sized> {
    pricing: &'a PricingTables,
    aliases: &'a AliasTables,
    source: &'a S,
}

impl<'a, S: HospitalSource + ?Sized> HospitalMatcher<'a, S> {
    pub fn new(pricing: &'a PricingTables, aliases: &'a AliasTables, source: &'a S) -> Self {
        Self {
            pricing,
            aliases,
            source,
        }
    }

    /// Run a search
    ///
    /// # Errors
    ///
    /// - `MissingParameter` / `InvalidParameter` for bad query fields
    /// - `MalformedRecord` if a matched hospital violates the record contract
    /// - whatever the hospital source reports
    ///
    /// An empty vector is a successful search with no matches.
    pub fn search(&self, query: &SearchQuery) -> Result<Vec<EnrichedHospital>> {
        let query = query.validate()?;

        self.run(&query).map_err(|e| {
            error!(
                speciality = query.speciality,
                city = query.city,
                error = %e,
                "Hospital search failed"
            );
            e
        })
    }

    fn run(&self, query: &ValidatedQuery<'_>) -> Result<Vec<EnrichedHospital>> {
        let speciality = SpecialityNormalizer::new(&self.aliases.speciality).normalize(query.speciality);

        let candidates: Vec<S::Record> = self
            .source
            .hospitals_in_city(query.city)?
            .into_iter()
            .filter(|h| same_city(h.city(), query.city))
            .filter(|h| h.offers_speciality(speciality))
            .collect();

        let default_disease = DiseaseInput::from(DEFAULT_SEARCH_DISEASE);
        let disease = query.disease.unwrap_or(&default_disease);

        let mut results = Vec::with_capacity(candidates.len());
        for hospital in &candidates {
            check_record(hospital)?;
            results.push(self.enrich(hospital, disease, query.city));
        }

        if let Some(budget) = query.budget {
            results.retain(|h| h.computed_cost.low as f64 <= budget);
        }

        sort_results(&mut results, query.order);

        info!(
            speciality,
            city = query.city,
            candidates = candidates.len(),
            results = results.len(),
            "Hospital search complete"
        );

        Ok(results)
    }

    fn enrich<R: HospitalRecord>(&self, hospital: &R, disease: &DiseaseInput, city: &str) -> EnrichedHospital {
        let estimate = CostEstimator::new(self.pricing, self.aliases).estimate(disease.clone(), city, hospital);
        let schemes = SchemeDirectory::new(&self.aliases.scheme_url);
        let beds = hospital.beds();

        EnrichedHospital {
            id: hospital.id(),
            name: hospital.name().to_string(),
            address: hospital.address().map(str::to_string),
            city: hospital.city().to_string(),
            rating: hospital.rating(),
            hospital_type: HospitalTypeResolver::new(&self.aliases.hospital_type)
                .resolve(hospital.hospital_type()),
            latitude: hospital.latitude(),
            longitude: hospital.longitude(),
            map_url: hospital.coordinates().map(|(lat, lng)| map_url(lat, lng)),
            cost_text: format_cost_range(estimate.low, estimate.high),
            computed_cost: ComputedCost {
                low: estimate.low,
                high: estimate.high,
            },
            predicted_disease: estimate.predicted_disease,
            schemes: hospital
                .accepted_schemes()
                .iter()
                .map(|scheme| schemes.link(scheme))
                .collect(),
            total_beds: beds.total,
            icu_beds: beds.icu,
            emergency_beds: beds.emergency,
        }
    }
}

/// Reject records the estimator would otherwise silently reinterpret
fn check_record<R: HospitalRecord>(hospital: &R) -> Result<()> {
    let malformed = |reason: String| EngineError::MalformedRecord {
        hospital: hospital.name().to_string(),
        reason,
    };

    if let Some(factor) = hospital.base_cost_factor() {
        if scale_base_factor(factor).is_none() {
            return Err(malformed(format!(
                "base_cost_factor {} is not a representable non-negative number",
                factor
            )));
        }
    }

    if let Some(lat) = hospital.latitude() {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(malformed(format!("latitude {} out of range", lat)));
        }
    }

    if let Some(lng) = hospital.longitude() {
        if !(-180.0..=180.0).contains(&lng) {
            return Err(malformed(format!("longitude {} out of range", lng)));
        }
    }

    Ok(())
}

fn sort_results(results: &mut [EnrichedHospital], order: ResultOrder) {
    match order {
        ResultOrder::AsListed => {}
        ResultOrder::CostAscending => results.sort_by_key(|h| h.computed_cost.low),
        ResultOrder::RatingDescending => {
            results.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        }
    }
}
