//! Triage hints
//!
//! Symptom triage is done by an external AI collaborator. Its answer is
//! modelled by [`TriageHint`] and can be turned into a [`SearchQuery`].
//! When the collaborator is unavailable, [`fallback_triage`] produces a
//! hint from keyword rules instead.
//!
//! The engine never calls the collaborator itself.

pub mod fallback;

use serde::{Deserialize, Serialize};

use crate::matching::SearchQuery;

pub use fallback::fallback_triage;

/// How soon the patient should be seen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    #[default]
    Low,
    Medium,
    High,
}

/// One candidate disease in a triage hint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PossibleDisease {
    pub name: String,
    #[serde(default)]
    pub probability: f64,
    #[serde(default)]
    pub notes: String,
}

/// Structured triage result
///
/// Field names match the collaborator's JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageHint {
    #[serde(default)]
    pub possible_diseases: Vec<PossibleDisease>,
    pub speciality: String,
    #[serde(default)]
    pub urgency: Urgency,
    #[serde(default)]
    pub confidence: f64,
}

impl TriageHint {
    /// Most probable disease; earlier entries win ties
    pub fn primary_disease(&self) -> Option<&PossibleDisease> {
        self.possible_diseases
            .iter()
            .enumerate()
            .max_by(|(ia, a), (ib, b)| {
                a.probability
                    .total_cmp(&b.probability)
                    .then_with(|| ib.cmp(ia))
            })
            .map(|(_, disease)| disease)
    }

    /// Search query for this hint's speciality and primary disease
    ///
    /// # Example
    /// ```
    /// use medcost_core::triage::fallback_triage;
    ///
    /// let query = fallback_triage("crushing chest pain").to_query("Mumbai");
    /// assert_eq!(query.speciality.as_deref(), Some("Cardiology"));
    /// assert_eq!(query.city.as_deref(), Some("Mumbai"));
    /// ```
    pub fn to_query(&self, city: impl Into<String>) -> SearchQuery {
        let query = SearchQuery::new(self.speciality.clone(), city);
        match self.primary_disease() {
            Some(disease) => query.with_disease(disease.name.clone()),
            None => query,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_collaborator_json() {
        let json = r#"{
            "possible_diseases": [
                {"name": "Migraine", "probability": 0.3, "notes": "Severe headache"},
                {"name": "Tension Headache", "probability": 0.6}
            ],
            "speciality": "Neurology",
            "urgency": "medium",
            "confidence": 0.7
        }"#;

        let hint: TriageHint = serde_json::from_str(json).unwrap();
        assert_eq!(hint.urgency, Urgency::Medium);
        assert_eq!(hint.primary_disease().unwrap().name, "Tension Headache");
    }

    #[test]
    fn test_primary_disease_tie_keeps_first() {
        let hint = TriageHint {
            possible_diseases: vec![
                PossibleDisease { name: "A".to_string(), probability: 0.5, notes: String::new() },
                PossibleDisease { name: "B".to_string(), probability: 0.5, notes: String::new() },
            ],
            speciality: "ENT".to_string(),
            urgency: Urgency::Low,
            confidence: 0.5,
        };
        assert_eq!(hint.primary_disease().unwrap().name, "A");
    }

    #[test]
    fn test_query_without_diseases() {
        let hint = TriageHint {
            possible_diseases: Vec::new(),
            speciality: "ENT".to_string(),
            urgency: Urgency::Low,
            confidence: 0.1,
        };
        assert_eq!(hint.to_query("Delhi").disease, None);
    }
}
