//! Free-text resolution
//!
//! Every resolver maps arbitrary text onto a limited canonical vocabulary
//! and falls back to a documented default instead of failing.

pub mod city;
pub mod hospital_type;
pub mod scheme;
pub mod speciality;
pub mod symptoms;

// Re-exports
pub use city::{same_city, CityResolver};
pub use hospital_type::HospitalTypeResolver;
pub use scheme::SchemeDirectory;
pub use speciality::{SpecialityNormalizer, DEFAULT_SPECIALITY};
pub use symptoms::{symptom_key, SymptomClassifier, DEFAULT_DISEASE};
