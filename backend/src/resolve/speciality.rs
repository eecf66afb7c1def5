//! Speciality normalization
//!
//! Resolution order:
//! 1. Empty input → [`DEFAULT_SPECIALITY`]
//! 2. Lower-cased, trimmed input equal to an alias → that alias's speciality
//! 3. First alias, in table order, contained in the input → its speciality
//! 4. Otherwise → [`DEFAULT_SPECIALITY`]

use tracing::debug;

use crate::tables::AliasTable;

/// Speciality used when nothing else matches
pub const DEFAULT_SPECIALITY: &str = "General Medicine";

/// Resolves free-text speciality or complaint phrases to a canonical speciality
///
/// # Example
/// ```
/// use medcost_core::resolve::SpecialityNormalizer;
/// use medcost_core::tables::AliasTables;
///
/// let normalizer = SpecialityNormalizer::new(&AliasTables::builtin().speciality);
/// assert_eq!(normalizer.normalize("Heart Specialist"), "Cardiology");
/// assert_eq!(normalizer.normalize("severe knee pain since monday"), "Orthopedics");
/// assert_eq!(normalizer.normalize(""), "General Medicine");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SpecialityNormalizer<'a> {
    aliases: &'a AliasTable,
}

impl<'a> SpecialityNormalizer<'a> {
    pub fn new(aliases: &'a AliasTable) -> Self {
        Self { aliases }
    }

    /// Resolve `text` to a canonical speciality; never fails
    pub fn normalize(&self, text: &str) -> &'a str {
        let normalized = text.trim().to_lowercase();
        if normalized.is_empty() {
            return DEFAULT_SPECIALITY;
        }

        if let Some(speciality) = self.aliases.exact(&normalized) {
            return speciality;
        }

        if let Some(speciality) = self.aliases.first_contained_in(&normalized) {
            debug!(input = %normalized, speciality, "Speciality resolved by partial match");
            return speciality;
        }

        debug!(input = %normalized, "No speciality alias matched, using default");
        DEFAULT_SPECIALITY
    }

    /// Absent input is treated like empty input
    pub fn normalize_opt(&self, text: Option<&str>) -> &'a str {
        self.normalize(text.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::AliasTables;

    fn normalizer() -> SpecialityNormalizer<'static> {
        SpecialityNormalizer::new(&AliasTables::builtin().speciality)
    }

    #[test]
    fn test_exact_match_ignores_case_and_padding() {
        assert_eq!(normalizer().normalize("  CARDIOLOGIST "), "Cardiology");
        assert_eq!(normalizer().normalize("Eye Doctor"), "Ophthalmology");
    }

    #[test]
    fn test_exact_match_beats_earlier_substring() {
        // "child fever" contains "fever", which sits earlier in the table
        assert_eq!(normalizer().normalize("child fever"), "Pediatrics");
    }

    #[test]
    fn test_partial_match_takes_first_alias_in_order() {
        // "fever" (General Medicine) precedes "child specialist" (Pediatrics)
        assert_eq!(normalizer().normalize("fever in my child"), "General Medicine");
        assert_eq!(normalizer().normalize("sudden chest pain"), "Cardiology");
    }

    #[test]
    fn test_unmapped_and_absent_input_default() {
        assert_eq!(normalizer().normalize("xyz-unmapped"), DEFAULT_SPECIALITY);
        assert_eq!(normalizer().normalize("   "), DEFAULT_SPECIALITY);
        assert_eq!(normalizer().normalize_opt(None), DEFAULT_SPECIALITY);
    }
}
