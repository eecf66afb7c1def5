//! Tests for symptom classification

use medcost_core::resolve::{symptom_key, SymptomClassifier, DEFAULT_DISEASE};
use medcost_core::tables::AliasTable;
use medcost_core::{classify_symptoms, DiseaseInput};

#[test]
fn test_first_recognised_symptom_wins() {
    assert_eq!(classify_symptoms(["Joint Pain", "Fever"]), "Fever");
    assert_eq!(classify_symptoms(["vomiting", "fever"]), "Food Poisoning");
    assert_eq!(classify_symptoms(["fever", "vomiting"]), "Fever");
}

#[test]
fn test_single_phrase() {
    assert_eq!(classify_symptoms(["Sore Throat"]), "Sore Throat");
    assert_eq!(classify_symptoms(["  URINE "]), "UTI");
}

#[test]
fn test_internal_whitespace_is_removed() {
    assert_eq!(symptom_key("Body  Pain"), "bodypain");
    assert_eq!(classify_symptoms(["Body  Pain"]), "Body Pain");
    assert_eq!(classify_symptoms(["stomach\npain"]), "Stomach Pain");
}

#[test]
fn test_no_match_defaults_to_general_checkup() {
    assert_eq!(classify_symptoms(["dizziness", "joint pain"]), DEFAULT_DISEASE);
    assert_eq!(DEFAULT_DISEASE, "General Checkup");
}

#[test]
fn test_empty_input_defaults() {
    let nothing: Vec<String> = Vec::new();
    assert_eq!(classify_symptoms(nothing), DEFAULT_DISEASE);
    assert_eq!(classify_symptoms([""]), DEFAULT_DISEASE);
}

#[test]
fn test_lookup_is_exact_not_substring() {
    // "highfever" is not an alias even though it contains "fever"
    assert_eq!(classify_symptoms(["high fever"]), DEFAULT_DISEASE);
}

#[test]
fn test_owned_strings_are_accepted() {
    let symptoms = vec!["Cough".to_string(), "Cold".to_string()];
    assert_eq!(classify_symptoms(&symptoms), "Cough");
}

#[test]
fn test_custom_table() {
    let table = AliasTable::from_pairs(&[("rash", "Skin Allergy"), ("chestpain", "Angina")]);
    let classifier = SymptomClassifier::new(&table);

    assert_eq!(classifier.classify(["Chest Pain"]), "Angina");
    assert_eq!(classifier.classify_one("fever"), DEFAULT_DISEASE);
}

#[test]
fn test_disease_input_from_symptom_array() {
    assert_eq!(
        DiseaseInput::from(["a", "b"]),
        DiseaseInput::Symptoms(vec!["a".to_string(), "b".to_string()])
    );
}
