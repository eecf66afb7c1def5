//! Alias Tables
//!
//! Ordered (alias → canonical) pairs used for fuzzy resolution of free text.
//!
//! # Ordering
//!
//! Substring resolution walks a table front to back and stops at the first
//! alias contained in the input, so entry order is part of the behaviour.
//! Tables are stored as sequences, never as hash maps, and the built-in
//! speciality table is kept in the grouped order below.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// AliasTable
// ============================================================================

/// One (alias → canonical) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    /// Lower-case free-text variant
    pub alias: String,
    /// Canonical value the alias resolves to
    pub canonical: String,
}

/// Ordered alias table with an exact-match index
///
/// Serializes as a JSON array of `[alias, canonical]` pairs so the order
/// survives a round trip through configuration files.
///
/// # Example
/// ```
/// use medcost_core::tables::AliasTable;
///
/// let table = AliasTable::from_pairs(&[("cardiac", "Cardiology"), ("ent", "ENT")]);
/// assert_eq!(table.exact("cardiac"), Some("Cardiology"));
/// assert_eq!(table.first_contained_in("recurring cardiac pain"), Some("Cardiology"));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<(String, String)>", into = "Vec<(String, String)>")]
pub struct AliasTable {
    entries: Vec<AliasEntry>,
    /// alias → position of its first occurrence
    index: HashMap<String, usize>,
}

impl AliasTable {
    /// Build a table from static pairs, preserving their order
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        pairs
            .iter()
            .map(|(alias, canonical)| (alias.to_string(), canonical.to_string()))
            .collect::<Vec<_>>()
            .into()
    }

    /// Canonical value whose alias equals `key` exactly
    ///
    /// When an alias appears twice, the earlier entry wins.
    pub fn exact(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&position| self.entries[position].canonical.as_str())
    }

    /// Canonical value of the first alias (in table order) that occurs as a
    /// substring of `haystack`
    pub fn first_contained_in(&self, haystack: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| !entry.alias.is_empty() && haystack.contains(entry.alias.as_str()))
            .map(|entry| entry.canonical.as_str())
    }

    /// Entries in priority order
    pub fn iter(&self) -> impl Iterator<Item = &AliasEntry> {
        self.entries.iter()
    }

    /// Distinct canonical values in first-seen order
    pub fn canonical_values(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !seen.contains(&entry.canonical.as_str()) {
                seen.push(entry.canonical.as_str());
            }
        }
        seen
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<(String, String)>> for AliasTable {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let mut entries = Vec::with_capacity(pairs.len());
        let mut index = HashMap::with_capacity(pairs.len());

        for (position, (alias, canonical)) in pairs.into_iter().enumerate() {
            index.entry(alias.clone()).or_insert(position);
            entries.push(AliasEntry { alias, canonical });
        }

        Self { entries, index }
    }
}

impl From<AliasTable> for Vec<(String, String)> {
    fn from(table: AliasTable) -> Self {
        table
            .entries
            .into_iter()
            .map(|entry| (entry.alias, entry.canonical))
            .collect()
    }
}

// ============================================================================
// AliasTables
// ============================================================================

/// Every alias table the engine resolves against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AliasTables {
    /// Free-text speciality/complaint → canonical speciality
    pub speciality: AliasTable,

    /// Whitespace-free lower-case symptom → canonical disease
    pub symptom: AliasTable,

    /// Lower-case city spelling → canonical city
    #[serde(default = "default_city_aliases")]
    pub city: AliasTable,

    /// Lower-case ownership label → canonical hospital type name
    #[serde(default = "default_hospital_type_aliases")]
    pub hospital_type: AliasTable,

    /// Lower-case scheme name → official scheme URL
    #[serde(default = "default_scheme_urls")]
    pub scheme_url: AliasTable,
}

impl Default for AliasTables {
    fn default() -> Self {
        Self {
            speciality: AliasTable::from_pairs(SPECIALITY_ALIASES),
            symptom: AliasTable::from_pairs(SYMPTOM_ALIASES),
            city: default_city_aliases(),
            hospital_type: default_hospital_type_aliases(),
            scheme_url: default_scheme_urls(),
        }
    }
}

impl AliasTables {
    /// Process-wide built-in tables, constructed on first use
    pub fn builtin() -> &'static AliasTables {
        static BUILTIN: OnceLock<AliasTables> = OnceLock::new();
        BUILTIN.get_or_init(AliasTables::default)
    }
}

fn default_city_aliases() -> AliasTable {
    AliasTable::from_pairs(CITY_ALIASES)
}

fn default_hospital_type_aliases() -> AliasTable {
    AliasTable::from_pairs(HOSPITAL_TYPE_ALIASES)
}

fn default_scheme_urls() -> AliasTable {
    AliasTable::from_pairs(SCHEME_URLS)
}

// ============================================================================
// BUILT-IN DATA
// ============================================================================

/// Speciality aliases in substring-priority order
pub const SPECIALITY_ALIASES: &[(&str, &str)] = &[
    // General Medicine
    ("general physician", "General Medicine"),
    ("general doctor", "General Medicine"),
    ("general practice", "General Medicine"),
    ("family doctor", "General Medicine"),
    ("family medicine", "General Medicine"),
    ("internal medicine", "General Medicine"),
    ("gp", "General Medicine"),
    ("primary care", "General Medicine"),
    ("general checkup", "General Medicine"),
    ("fever", "General Medicine"),
    ("cold", "General Medicine"),
    ("cough", "General Medicine"),
    ("viral", "General Medicine"),
    ("flu", "General Medicine"),
    ("infection", "General Medicine"),
    ("weakness", "General Medicine"),
    ("body pain", "General Medicine"),
    // ENT
    ("ent", "ENT"),
    ("ear specialist", "ENT"),
    ("nose specialist", "ENT"),
    ("throat specialist", "ENT"),
    ("ear nose throat", "ENT"),
    ("sinus", "ENT"),
    ("tonsils", "ENT"),
    ("ear pain", "ENT"),
    ("hearing problem", "ENT"),
    // Eye
    ("eye specialist", "Ophthalmology"),
    ("eye doctor", "Ophthalmology"),
    ("vision problem", "Ophthalmology"),
    ("blur vision", "Ophthalmology"),
    ("eye pain", "Ophthalmology"),
    ("optometrist", "Ophthalmology"),
    ("ophthalmologist", "Ophthalmology"),
    // Heart
    ("heart specialist", "Cardiology"),
    ("cardiologist", "Cardiology"),
    ("heart problem", "Cardiology"),
    ("chest pain", "Cardiology"),
    ("heart pain", "Cardiology"),
    ("bp problem", "Cardiology"),
    ("high bp", "Cardiology"),
    ("low bp", "Cardiology"),
    ("cardiac", "Cardiology"),
    ("heart attack", "Cardiology"),
    // Brain / nerves
    ("brain specialist", "Neurology"),
    ("neurologist", "Neurology"),
    ("headache", "Neurology"),
    ("migraine", "Neurology"),
    ("seizures", "Neurology"),
    ("epilepsy", "Neurology"),
    ("nerve problem", "Neurology"),
    ("paralysis", "Neurology"),
    ("stroke", "Neurology"),
    // Bone
    ("bone specialist", "Orthopedics"),
    ("orthopedic", "Orthopedics"),
    ("joint pain", "Orthopedics"),
    ("knee pain", "Orthopedics"),
    ("back pain", "Orthopedics"),
    ("shoulder pain", "Orthopedics"),
    ("fracture", "Orthopedics"),
    ("slip disc", "Orthopedics"),
    ("arthritis", "Orthopedics"),
    // Skin
    ("skin specialist", "Dermatology"),
    ("dermatologist", "Dermatology"),
    ("skin allergy", "Dermatology"),
    ("rashes", "Dermatology"),
    ("itching", "Dermatology"),
    ("acne", "Dermatology"),
    ("pimples", "Dermatology"),
    ("hair fall", "Dermatology"),
    // Child
    ("child specialist", "Pediatrics"),
    ("pediatrician", "Pediatrics"),
    ("baby doctor", "Pediatrics"),
    ("newborn", "Pediatrics"),
    ("child fever", "Pediatrics"),
    ("vaccination", "Pediatrics"),
    // Women
    ("gynecologist", "Gynecology"),
    ("pregnancy", "Gynecology"),
    ("period problem", "Gynecology"),
    ("pcos", "Gynecology"),
    ("women health", "Gynecology"),
    ("delivery", "Gynecology"),
    ("pregnant", "Gynecology"),
    // Stomach
    ("stomach pain", "Gastroenterology"),
    ("acidity", "Gastroenterology"),
    ("gas", "Gastroenterology"),
    ("indigestion", "Gastroenterology"),
    ("constipation", "Gastroenterology"),
    ("diarrhea", "Gastroenterology"),
    ("vomiting", "Gastroenterology"),
    ("liver", "Gastroenterology"),
    // Kidney / urine
    ("kidney", "Nephrology"),
    ("urine problem", "Urology"),
    ("urinary infection", "Urology"),
    ("uti", "Urology"),
    ("bladder", "Urology"),
    // Lung
    ("lung", "Pulmonology"),
    ("breathing problem", "Pulmonology"),
    ("asthma", "Pulmonology"),
    ("shortness of breath", "Pulmonology"),
    ("coughing blood", "Pulmonology"),
    // Mental health
    ("depression", "Psychiatry"),
    ("anxiety", "Psychiatry"),
    ("panic attack", "Psychiatry"),
    ("stress", "Psychiatry"),
    ("sleep problem", "Psychiatry"),
    ("insomnia", "Psychiatry"),
    // Emergency
    ("emergency", "Emergency Care"),
    ("accident", "Emergency Care"),
    ("injury", "Emergency Care"),
    ("bleeding", "Emergency Care"),
    ("unconscious", "Emergency Care"),
    ("burn", "Emergency Care"),
    // Diabetes / hormone
    ("diabetes", "Endocrinology"),
    ("thyroid", "Endocrinology"),
    ("hormone", "Endocrinology"),
    ("sugar problem", "Endocrinology"),
    // Canonical names resolve to themselves
    ("general medicine", "General Medicine"),
    ("ophthalmology", "Ophthalmology"),
    ("cardiology", "Cardiology"),
    ("neurology", "Neurology"),
    ("orthopedics", "Orthopedics"),
    ("dermatology", "Dermatology"),
    ("pediatrics", "Pediatrics"),
    ("gynecology", "Gynecology"),
    ("gastroenterology", "Gastroenterology"),
    ("nephrology", "Nephrology"),
    ("urology", "Urology"),
    ("pulmonology", "Pulmonology"),
    ("psychiatry", "Psychiatry"),
    ("emergency care", "Emergency Care"),
    ("endocrinology", "Endocrinology"),
];

/// Symptom keys are lower-case with all whitespace removed
pub const SYMPTOM_ALIASES: &[(&str, &str)] = &[
    ("cold", "Cold"),
    ("fever", "Fever"),
    ("cough", "Cough"),
    ("headache", "Headache"),
    ("throat", "Sore Throat"),
    ("sorethroat", "Sore Throat"),
    ("vomiting", "Food Poisoning"),
    ("stomach", "Stomach Pain"),
    ("stomachpain", "Stomach Pain"),
    ("bodypain", "Body Pain"),
    ("weakness", "Viral Infection"),
    ("allergy", "Skin Allergy"),
    ("urine", "UTI"),
    ("injury", "Minor Injury"),
];

pub const CITY_ALIASES: &[(&str, &str)] = &[
    ("ahmedabad", "Ahmedabad"),
    ("amdavad", "Ahmedabad"),
    ("mumbai", "Mumbai"),
    ("bombay", "Mumbai"),
    ("gandhinagar", "Gandhinagar"),
    ("delhi", "Delhi"),
    ("new delhi", "Delhi"),
    ("rural", "rural"),
];

pub const HOSPITAL_TYPE_ALIASES: &[(&str, &str)] = &[
    ("government", "government"),
    ("govt", "government"),
    ("gov", "government"),
    ("public", "government"),
    ("private", "private"),
    ("pvt", "private"),
    ("premium", "premium"),
    ("corporate", "premium"),
    ("trust", "trust"),
    ("charitable", "trust"),
    ("charitable trust", "trust"),
    ("unknown", "unknown"),
];

pub const SCHEME_URLS: &[(&str, &str)] = &[
    ("ayushman bharat pm-jay", "https://pmjay.gov.in"),
    ("pmjay", "https://pmjay.gov.in"),
    ("pm-jay", "https://pmjay.gov.in"),
    ("mukhyamantri amrutum yojana", "https://magujarat.com"),
    ("ma yojana", "https://magujarat.com"),
    ("cghs", "https://cghs.gov.in"),
    ("central government health scheme", "https://cghs.gov.in"),
    ("esic", "https://esic.gov.in"),
    ("employees state insurance", "https://esic.gov.in"),
    ("esi", "https://esic.gov.in"),
    ("rashtriya swasthya bima yojana", "https://rsby.gov.in"),
    ("rsby", "https://rsby.gov.in"),
    ("pradhan mantri jan arogya yojana", "https://pmjay.gov.in"),
];
