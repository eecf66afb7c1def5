//! Engine facade
//!
//! [`Engine`] bundles one set of pricing and alias tables and exposes the
//! operations calling layers use. It holds only shared references, so it is
//! `Copy` and can be used from any number of threads at once.

use crate::costs::CostEstimator;
use crate::error::Result;
use crate::matching::{HospitalMatcher, HospitalSource, SearchQuery};
use crate::models::{CostBreakdown, CostEstimate, DiseaseInput, EnrichedHospital, HospitalRecord};
use crate::resolve::{CityResolver, SchemeDirectory, SpecialityNormalizer, SymptomClassifier};
use crate::tables::{AliasTables, PricingTables, TableError};

/// Resolution and pricing engine over a fixed set of tables
///
/// # Example
/// ```
/// use medcost_core::{Engine, Hospital};
///
/// let engine = Engine::builtin();
/// let hospital = Hospital::new("Lilavati", "Mumbai")
///     .with_type("premium")
///     .with_base_cost_factor(1.4);
///
/// let estimate = engine.estimate_cost("Myocardial infarction", "Mumbai", &hospital);
/// assert_eq!((estimate.low, estimate.high), (371_280, 502_320));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Engine<'a> {
    pricing: &'a PricingTables,
    aliases: &'a AliasTables,
}

impl Engine<'static> {
    /// Engine over the process-wide built-in tables
    pub fn builtin() -> Self {
        Engine {
            pricing: PricingTables::builtin(),
            aliases: AliasTables::builtin(),
        }
    }
}

impl<'a> Engine<'a> {
    /// Engine over caller-supplied tables, validated first
    pub fn new(pricing: &'a PricingTables, aliases: &'a AliasTables) -> std::result::Result<Self, TableError> {
        pricing.validate()?;
        Ok(Engine { pricing, aliases })
    }

    pub fn pricing(&self) -> &'a PricingTables {
        self.pricing
    }

    pub fn aliases(&self) -> &'a AliasTables {
        self.aliases
    }

    pub fn estimator(&self) -> CostEstimator<'a> {
        CostEstimator::new(self.pricing, self.aliases)
    }

    pub fn normalizer(&self) -> SpecialityNormalizer<'a> {
        SpecialityNormalizer::new(&self.aliases.speciality)
    }

    pub fn classifier(&self) -> SymptomClassifier<'a> {
        SymptomClassifier::new(&self.aliases.symptom)
    }

    pub fn matcher<S: HospitalSource + ?Sized>(&self, source: &'a S) -> HospitalMatcher<'a, S> {
        HospitalMatcher::new(self.pricing, self.aliases, source)
    }

    pub fn estimate_cost<H>(&self, input: impl Into<DiseaseInput>, city: &str, hospital: &H) -> CostEstimate
    where
        H: HospitalRecord + ?Sized,
    {
        self.estimator().estimate(input, city, hospital)
    }

    pub fn estimate_breakdown<H>(&self, input: impl Into<DiseaseInput>, city: &str, hospital: &H) -> CostBreakdown
    where
        H: HospitalRecord + ?Sized,
    {
        self.estimator().estimate_breakdown(input, city, hospital)
    }

    pub fn normalize_speciality(&self, text: &str) -> &'a str {
        self.normalizer().normalize(text)
    }

    pub fn classify_symptoms<I, S>(&self, symptoms: I) -> &'a str
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.classifier().classify(symptoms)
    }

    pub fn search_hospitals<S: HospitalSource + ?Sized>(
        &self,
        source: &S,
        query: &SearchQuery,
    ) -> Result<Vec<EnrichedHospital>> {
        HospitalMatcher::new(self.pricing, self.aliases, source).search(query)
    }

    pub fn resolve_city(&self, city: &str) -> Option<&'a str> {
        CityResolver::new(&self.aliases.city).resolve(city)
    }

    pub fn scheme_url(&self, scheme_name: &str) -> Option<&'a str> {
        SchemeDirectory::new(&self.aliases.scheme_url).url(scheme_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_tables() {
        let mut pricing = PricingTables::default();
        pricing.low_band_percent = 120;
        let aliases = AliasTables::default();

        assert_eq!(
            Engine::new(&pricing, &aliases).err(),
            Some(TableError::InvalidBand { low: 120, high: 115 })
        );
    }

    #[test]
    fn test_custom_tables_change_prices() {
        let mut pricing = PricingTables::default();
        pricing.base_costs.insert("Fever".to_string(), 1_000);
        let aliases = AliasTables::default();
        let engine = Engine::new(&pricing, &aliases).unwrap();

        let hospital = crate::models::Hospital::new("A", "Delhi").with_type("private");
        let estimate = engine.estimate_cost("Fever", "Delhi", &hospital);
        assert_eq!((estimate.low, estimate.high), (1_105, 1_495));
    }

    #[test]
    fn test_engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine<'static>>();
    }
}
