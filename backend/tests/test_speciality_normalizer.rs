//! Tests for speciality normalization
//!
//! Resolution order: exact alias, then first alias contained in the text
//! (table order), then General Medicine.

use medcost_core::resolve::{SpecialityNormalizer, DEFAULT_SPECIALITY};
use medcost_core::tables::{AliasTable, AliasTables};
use medcost_core::{normalize_speciality, Engine};

#[test]
fn test_heart_specialist() {
    assert_eq!(normalize_speciality("Heart Specialist"), "Cardiology");
}

#[test]
fn test_unmapped_text_defaults() {
    assert_eq!(normalize_speciality("xyz-unmapped"), "General Medicine");
    assert_eq!(DEFAULT_SPECIALITY, "General Medicine");
}

#[test]
fn test_empty_text_defaults() {
    assert_eq!(normalize_speciality(""), DEFAULT_SPECIALITY);
    assert_eq!(normalize_speciality(" \t "), DEFAULT_SPECIALITY);
}

#[test]
fn test_case_and_whitespace_are_ignored() {
    assert_eq!(normalize_speciality("  SKIN SPECIALIST  "), "Dermatology");
    assert_eq!(normalize_speciality("Pediatrician"), "Pediatrics");
}

#[test]
fn test_canonical_names_resolve_to_themselves() {
    let aliases = AliasTables::builtin();
    for canonical in aliases.speciality.canonical_values() {
        assert_eq!(normalize_speciality(canonical), canonical, "{}", canonical);
    }
}

#[test]
fn test_free_text_complaint_matches_contained_alias() {
    assert_eq!(normalize_speciality("severe knee pain since monday"), "Orthopedics");
    assert_eq!(normalize_speciality("my father has high bp"), "Cardiology");
    assert_eq!(normalize_speciality("recurring acidity after meals"), "Gastroenterology");
}

#[test]
fn test_exact_match_beats_substring_scan() {
    // "child fever" contains "fever", which appears earlier in the table
    assert_eq!(normalize_speciality("child fever"), "Pediatrics");
    assert_eq!(normalize_speciality("fever in my child"), "General Medicine");
}

#[test]
fn test_substring_scan_uses_table_order() {
    // "persistent" contains "ent", listed before "migraine"
    assert_eq!(normalize_speciality("persistent migraine"), "ENT");
    assert_eq!(normalize_speciality("bad migraine"), "Neurology");
}

#[test]
fn test_custom_alias_table() {
    let table = AliasTable::from_pairs(&[("sports injury", "Sports Medicine"), ("injury", "Emergency Care")]);
    let normalizer = SpecialityNormalizer::new(&table);

    assert_eq!(normalizer.normalize("old sports injury"), "Sports Medicine");
    assert_eq!(normalizer.normalize("road injury"), "Emergency Care");
    assert_eq!(normalizer.normalize("cardiac"), DEFAULT_SPECIALITY);
}

#[test]
fn test_engine_and_free_function_agree() {
    let engine = Engine::builtin();
    for text in ["ent", "Eye Doctor", "asthma attack", "unknown"] {
        assert_eq!(engine.normalize_speciality(text), normalize_speciality(text));
    }
}
