//! Keyword triage used when the AI collaborator is unavailable
//!
//! Rules are checked in order and the first matching rule decides:
//! fever, chest pain, head, stomach, cough/cold, then a generic checkup.

use super::{PossibleDisease, TriageHint, Urgency};

const FALLBACK_CONFIDENCE: f64 = 0.5;

fn disease(name: &str, probability: f64, notes: &str) -> PossibleDisease {
    PossibleDisease {
        name: name.to_string(),
        probability,
        notes: notes.to_string(),
    }
}

/// Build a triage hint from keywords in free text
///
/// # Example
/// ```
/// use medcost_core::triage::{fallback_triage, Urgency};
///
/// let hint = fallback_triage("High fever with joint pain");
/// assert_eq!(hint.possible_diseases[0].name, "Dengue Fever");
/// assert_eq!(hint.urgency, Urgency::Medium);
/// ```
pub fn fallback_triage(symptoms_text: &str) -> TriageHint {
    let text = symptoms_text.to_lowercase();
    let mentions = |words: &[&str]| words.iter().any(|w| text.contains(w));

    let (possible_diseases, speciality, urgency) = if text.contains("fever") {
        if mentions(&["joint", "muscle", "pain"]) {
            (
                vec![
                    disease("Dengue Fever", 0.6, "Fever with joint/muscle pain"),
                    disease("Viral Infection", 0.3, "Common viral symptoms"),
                ],
                "General Medicine",
                Urgency::Medium,
            )
        } else {
            (
                vec![
                    disease("Viral Fever", 0.7, "Common fever symptoms"),
                    disease("Flu", 0.2, "Influenza-like illness"),
                ],
                "General Medicine",
                Urgency::Low,
            )
        }
    } else if text.contains("chest") && text.contains("pain") {
        (
            vec![
                disease("Angina", 0.5, "Chest pain, needs evaluation"),
                disease("Gastritis", 0.3, "Acid reflux related"),
            ],
            "Cardiology",
            Urgency::High,
        )
    } else if text.contains("head") {
        (
            vec![
                disease("Tension Headache", 0.6, "Common headache"),
                disease("Migraine", 0.3, "Severe headache"),
            ],
            "Neurology",
            Urgency::Low,
        )
    } else if mentions(&["stomach", "abdominal", "vomit"]) {
        (
            vec![
                disease("Gastroenteritis", 0.6, "Stomach infection"),
                disease("Food Poisoning", 0.3, "Food-related illness"),
            ],
            "Gastroenterology",
            Urgency::Low,
        )
    } else if mentions(&["cough", "cold"]) {
        (
            vec![
                disease("Upper Respiratory Infection", 0.7, "Common cold"),
                disease("Bronchitis", 0.2, "Chest infection"),
            ],
            "General Medicine",
            Urgency::Low,
        )
    } else {
        (
            vec![disease("General Checkup Recommended", 0.5, "Consult a doctor")],
            "General Physician",
            Urgency::Low,
        )
    };

    TriageHint {
        possible_diseases,
        speciality: speciality.to_string(),
        urgency,
        confidence: FALLBACK_CONFIDENCE,
    }
}
