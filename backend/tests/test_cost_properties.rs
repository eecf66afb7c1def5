//! Property tests for cost estimates
//!
//! Default 256 cases; override with PROPTEST_CASES.

use proptest::prelude::*;

use medcost_core::tables::{AliasTables, PricingTables};
use medcost_core::{estimate_cost, Engine, Hospital, Severity};

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

fn arb_disease() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => prop::sample::select(vec![
            "Fever", "Dengue", "Myocardial infarction", "Appendicitis",
            "Hip Replacement", "UTI", "Angina", "General Checkup",
        ])
        .prop_map(str::to_string),
        1 => "[A-Za-z ]{0,20}",
    ]
}

fn arb_city() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["Ahmedabad", "Mumbai", "bombay", "Delhi", "rural", "Pune", ""])
        .prop_map(str::to_string)
}

fn arb_type() -> impl Strategy<Value = Option<String>> {
    prop::option::of(
        prop::sample::select(vec!["government", "private", "premium", "trust", "govt", "boutique"])
            .prop_map(str::to_string),
    )
}

fn arb_factor() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        1 => Just(None),
        4 => (0.0..5.0f64).prop_map(Some),
    ]
}

fn hospital(hospital_type: Option<String>, factor: Option<f64>) -> Hospital {
    let mut hospital = Hospital::new("Property Hospital", "Anywhere");
    hospital.hospital_type = hospital_type;
    hospital.base_cost_factor = factor;
    hospital
}

proptest! {
    #![proptest_config(config())]

    #[test]
    fn prop_low_never_exceeds_high(
        disease in arb_disease(),
        city in arb_city(),
        hospital_type in arb_type(),
        factor in arb_factor(),
    ) {
        let estimate = estimate_cost(disease.as_str(), &city, &hospital(hospital_type, factor));
        prop_assert!(estimate.low >= 0);
        prop_assert!(estimate.low <= estimate.high);
    }

    #[test]
    fn prop_band_ratio_matches_percentages(
        disease in arb_disease(),
        city in arb_city(),
        hospital_type in arb_type(),
        factor in arb_factor(),
    ) {
        let breakdown = Engine::builtin().estimate_breakdown(disease.as_str(), &city, &hospital(hospital_type, factor));

        // Each edge is within half a rupee of the exact band
        prop_assert!((breakdown.low as f64 - breakdown.total * 0.85).abs() <= 0.5 + 1e-6);
        prop_assert!((breakdown.high as f64 - breakdown.total * 1.15).abs() <= 0.5 + 1e-6);

        if breakdown.low >= 100 {
            let ratio = breakdown.high as f64 / breakdown.low as f64;
            prop_assert!((ratio - 1.15 / 0.85).abs() < 0.02, "ratio {}", ratio);
        }
    }

    #[test]
    fn prop_estimate_echoes_disease_name(disease in arb_disease(), city in arb_city()) {
        let estimate = estimate_cost(disease.as_str(), &city, &hospital(None, None));
        prop_assert_eq!(estimate.predicted_disease, disease);
    }

    #[test]
    fn prop_mild_cost_is_city_independent(
        city_a in arb_city(),
        city_b in arb_city(),
        hospital_type in arb_type(),
    ) {
        let h = hospital(hospital_type, Some(1.0));
        prop_assert_eq!(estimate_cost("Fever", &city_a, &h), estimate_cost("Fever", &city_b, &h));
    }

    #[test]
    fn prop_higher_factor_never_lowers_cost(
        disease in arb_disease(),
        city in arb_city(),
        low_factor in 0.0..3.0f64,
        extra in 0.0..3.0f64,
    ) {
        let cheaper = estimate_cost(disease.as_str(), &city, &hospital(None, Some(low_factor)));
        let dearer = estimate_cost(disease.as_str(), &city, &hospital(None, Some(low_factor + extra)));
        prop_assert!(cheaper.low <= dearer.low);
        prop_assert!(cheaper.high <= dearer.high);
    }

    #[test]
    fn prop_severity_fallback_follows_tier_order(city in arb_city()) {
        // Price synthetic diseases that only have a tier
        let mut pricing = PricingTables::default();
        for (name, severity) in [
            ("Tier Mild", Severity::Mild),
            ("Tier Moderate", Severity::Moderate),
            ("Tier Severe", Severity::Severe),
            ("Tier Critical", Severity::Critical),
        ] {
            pricing.disease_severity.insert(name.to_string(), severity);
        }
        let engine = Engine::new(&pricing, AliasTables::builtin()).unwrap();
        let h = hospital(Some("private".to_string()), None);

        let lows: Vec<i64> = ["Tier Mild", "Tier Moderate", "Tier Severe", "Tier Critical"]
            .iter()
            .map(|d| engine.estimate_cost(*d, &city, &h).low)
            .collect();
        prop_assert!(lows.windows(2).all(|pair| pair[0] < pair[1]), "{:?}", lows);
    }
}
