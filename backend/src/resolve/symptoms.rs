//! Symptom classification
//!
//! Symptoms are checked in caller order; the first one with an alias decides
//! the disease. Earlier symptoms therefore take priority.

use tracing::debug;

use crate::tables::AliasTable;

/// Disease reported when no symptom is recognised
pub const DEFAULT_DISEASE: &str = "General Checkup";

/// Lookup key for a symptom: lower-case with all whitespace removed
///
/// # Example
/// ```
/// use medcost_core::resolve::symptom_key;
///
/// assert_eq!(symptom_key("  Sore Throat "), "sorethroat");
/// ```
pub fn symptom_key(symptom: &str) -> String {
    symptom
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Maps symptom phrases to a canonical disease
#[derive(Debug, Clone, Copy)]
pub struct SymptomClassifier<'a> {
    aliases: &'a AliasTable,
}

impl<'a> SymptomClassifier<'a> {
    pub fn new(aliases: &'a AliasTable) -> Self {
        Self { aliases }
    }

    /// Disease for the first recognised symptom, or [`DEFAULT_DISEASE`]
    ///
    /// # Example
    /// ```
    /// use medcost_core::resolve::SymptomClassifier;
    /// use medcost_core::tables::AliasTables;
    ///
    /// let classifier = SymptomClassifier::new(&AliasTables::builtin().symptom);
    /// assert_eq!(classifier.classify(["Joint Pain", "Fever"]), "Fever");
    /// assert_eq!(classifier.classify(["sore throat"]), "Sore Throat");
    /// ```
    pub fn classify<I, S>(&self, symptoms: I) -> &'a str
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for symptom in symptoms {
            let key = symptom_key(symptom.as_ref());
            if let Some(disease) = self.aliases.exact(&key) {
                return disease;
            }
        }

        debug!("No symptom recognised, using default disease");
        DEFAULT_DISEASE
    }

    /// Classify a single phrase
    pub fn classify_one(&self, symptom: &str) -> &'a str {
        self.classify(std::iter::once(symptom))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::AliasTables;

    fn classifier() -> SymptomClassifier<'static> {
        SymptomClassifier::new(&AliasTables::builtin().symptom)
    }

    #[test]
    fn test_first_recognised_symptom_wins() {
        assert_eq!(classifier().classify(["cough", "fever"]), "Cough");
        assert_eq!(classifier().classify(["fever", "cough"]), "Fever");
    }

    #[test]
    fn test_internal_whitespace_removed() {
        assert_eq!(classifier().classify_one("Stomach  Pain"), "Stomach Pain");
        assert_eq!(classifier().classify_one("body\tpain"), "Body Pain");
    }

    #[test]
    fn test_no_substring_matching() {
        // "high fever" becomes "highfever", which has no entry
        assert_eq!(classifier().classify_one("high fever"), DEFAULT_DISEASE);
    }

    #[test]
    fn test_empty_sequence_defaults() {
        let none: [&str; 0] = [];
        assert_eq!(classifier().classify(none), DEFAULT_DISEASE);
    }
}
