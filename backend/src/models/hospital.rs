//! Hospital model
//!
//! Hospitals are owned by an external persistence layer. The engine reads
//! them through [`HospitalRecord`], whose optional accessors carry defaults,
//! so a record that lacks a field is a normal case rather than an error:
//! - missing hospital type → [`HospitalType::Unknown`]
//! - missing base cost factor → 1.0
//! - missing coordinates → no map link
//!
//! [`Hospital`] is the concrete record used by the in-memory catalog and by
//! JSON catalog files.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ownership category of a hospital, which drives its price multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HospitalType {
    Government,
    Private,
    Premium,
    Trust,
    Unknown,
}

impl HospitalType {
    /// Map a canonical type name to its variant
    ///
    /// Only the lower-case canonical names are accepted here; free-text
    /// labels go through the hospital-type alias table first.
    ///
    /// # Example
    /// ```
    /// use medcost_core::HospitalType;
    ///
    /// assert_eq!(HospitalType::from_canonical("trust"), HospitalType::Trust);
    /// assert_eq!(HospitalType::from_canonical("Trust"), HospitalType::Unknown);
    /// ```
    pub fn from_canonical(name: &str) -> Self {
        match name {
            "government" => HospitalType::Government,
            "private" => HospitalType::Private,
            "premium" => HospitalType::Premium,
            "trust" => HospitalType::Trust,
            _ => HospitalType::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HospitalType::Government => "government",
            HospitalType::Private => "private",
            HospitalType::Premium => "premium",
            HospitalType::Trust => "trust",
            HospitalType::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for HospitalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Government or insurance scheme accepted by a hospital
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptedScheme {
    #[serde(rename = "schemeName", alias = "scheme_name")]
    pub scheme_name: String,
    #[serde(rename = "schemeId", alias = "scheme_id", default)]
    pub scheme_id: Option<String>,
}

/// Bed counts reported by a hospital
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BedCapacity {
    pub total: u32,
    pub icu: u32,
    pub emergency: u32,
}

// ============================================================================
// HospitalRecord
// ============================================================================

/// Read-only view of a hospital as supplied by a persistence collaborator
///
/// Only the identity, city, and speciality set are required. Every other
/// accessor has a default so that absence is a typed case.
pub trait HospitalRecord {
    fn name(&self) -> &str;

    fn city(&self) -> &str;

    /// Canonical speciality names offered by the hospital
    fn specialities(&self) -> &[String];

    fn id(&self) -> Option<Uuid> {
        None
    }

    fn address(&self) -> Option<&str> {
        None
    }

    /// Raw hospital type label, resolved through the alias table when priced
    fn hospital_type(&self) -> Option<&str> {
        None
    }

    /// Institution-specific price factor relative to its type baseline
    fn base_cost_factor(&self) -> Option<f64> {
        None
    }

    fn rating(&self) -> f64 {
        0.0
    }

    fn latitude(&self) -> Option<f64> {
        None
    }

    fn longitude(&self) -> Option<f64> {
        None
    }

    fn accepted_schemes(&self) -> &[AcceptedScheme] {
        &[]
    }

    fn beds(&self) -> BedCapacity {
        BedCapacity::default()
    }

    /// Exact membership test against the speciality set
    fn offers_speciality(&self, canonical: &str) -> bool {
        self.specialities().iter().any(|s| s == canonical)
    }

    /// Both coordinates, or `None` if either is missing
    fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude()?, self.longitude()?))
    }
}

impl<T: HospitalRecord + ?Sized> HospitalRecord for &T {
    fn name(&self) -> &str {
        (**self).name()
    }
    fn city(&self) -> &str {
        (**self).city()
    }
    fn specialities(&self) -> &[String] {
        (**self).specialities()
    }
    fn id(&self) -> Option<Uuid> {
        (**self).id()
    }
    fn address(&self) -> Option<&str> {
        (**self).address()
    }
    fn hospital_type(&self) -> Option<&str> {
        (**self).hospital_type()
    }
    fn base_cost_factor(&self) -> Option<f64> {
        (**self).base_cost_factor()
    }
    fn rating(&self) -> f64 {
        (**self).rating()
    }
    fn latitude(&self) -> Option<f64> {
        (**self).latitude()
    }
    fn longitude(&self) -> Option<f64> {
        (**self).longitude()
    }
    fn accepted_schemes(&self) -> &[AcceptedScheme] {
        (**self).accepted_schemes()
    }
    fn beds(&self) -> BedCapacity {
        (**self).beds()
    }
}

// ============================================================================
// Hospital
// ============================================================================

/// Concrete hospital record
///
/// Field names follow the catalog JSON; `lat`/`lng` and `acceptedSchemes`
/// are accepted as spelled by the persistence layer.
///
/// # Example
/// ```
/// use medcost_core::{Hospital, HospitalRecord};
///
/// let hospital = Hospital::new("City Heart Institute", "Ahmedabad")
///     .with_type("private")
///     .with_specialities(&["Cardiology", "General Medicine"])
///     .with_base_cost_factor(1.2);
///
/// assert!(hospital.offers_speciality("Cardiology"));
/// assert!(!hospital.offers_speciality("cardiology"));
/// assert_eq!(hospital.base_cost_factor(), Some(1.2));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hospital {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    pub name: String,

    #[serde(default)]
    pub address: Option<String>,

    pub city: String,

    #[serde(default)]
    pub pincode: Option<String>,

    #[serde(default, alias = "lat")]
    pub latitude: Option<f64>,

    #[serde(default, alias = "lng")]
    pub longitude: Option<f64>,

    #[serde(default)]
    pub contact: Option<String>,

    #[serde(default)]
    pub ambulance_contact: Option<String>,

    #[serde(default)]
    pub specialities: Vec<String>,

    #[serde(default)]
    pub hospital_type: Option<String>,

    #[serde(default)]
    pub rating: f64,

    #[serde(default, rename = "acceptedSchemes", alias = "accepted_schemes")]
    pub accepted_schemes: Vec<AcceptedScheme>,

    #[serde(default)]
    pub base_cost_factor: Option<f64>,

    #[serde(default)]
    pub total_beds: u32,

    #[serde(default)]
    pub icu_beds: u32,

    #[serde(default)]
    pub emergency_beds: u32,
}

impl Hospital {
    /// Create a hospital with only its required fields set
    pub fn new(name: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            address: None,
            city: city.into(),
            pincode: None,
            latitude: None,
            longitude: None,
            contact: None,
            ambulance_contact: None,
            specialities: Vec::new(),
            hospital_type: None,
            rating: 0.0,
            accepted_schemes: Vec::new(),
            base_cost_factor: None,
            total_beds: 0,
            icu_beds: 0,
            emergency_beds: 0,
        }
    }

    pub fn with_type(mut self, hospital_type: impl Into<String>) -> Self {
        self.hospital_type = Some(hospital_type.into());
        self
    }

    pub fn with_specialities(mut self, specialities: &[&str]) -> Self {
        self.specialities = specialities.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_base_cost_factor(mut self, factor: f64) -> Self {
        self.base_cost_factor = Some(factor);
        self
    }

    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_scheme(mut self, scheme_name: impl Into<String>) -> Self {
        self.accepted_schemes.push(AcceptedScheme {
            scheme_name: scheme_name.into(),
            scheme_id: None,
        });
        self
    }
}

impl HospitalRecord for Hospital {
    fn name(&self) -> &str {
        &self.name
    }

    fn city(&self) -> &str {
        &self.city
    }

    fn specialities(&self) -> &[String] {
        &self.specialities
    }

    fn id(&self) -> Option<Uuid> {
        Some(self.id)
    }

    fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    fn hospital_type(&self) -> Option<&str> {
        self.hospital_type.as_deref()
    }

    fn base_cost_factor(&self) -> Option<f64> {
        self.base_cost_factor
    }

    fn rating(&self) -> f64 {
        self.rating
    }

    fn latitude(&self) -> Option<f64> {
        self.latitude
    }

    fn longitude(&self) -> Option<f64> {
        self.longitude
    }

    fn accepted_schemes(&self) -> &[AcceptedScheme] {
        &self.accepted_schemes
    }

    fn beds(&self) -> BedCapacity {
        BedCapacity {
            total: self.total_beds,
            icu: self.icu_beds,
            emergency: self.emergency_beds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Record that only implements the required accessors
    struct Minimal {
        specialities: Vec<String>,
    }

    impl HospitalRecord for Minimal {
        fn name(&self) -> &str {
            "Minimal"
        }
        fn city(&self) -> &str {
            "Delhi"
        }
        fn specialities(&self) -> &[String] {
            &self.specialities
        }
    }

    #[test]
    fn test_minimal_record_defaults() {
        let record = Minimal { specialities: vec!["ENT".to_string()] };
        assert_eq!(record.hospital_type(), None);
        assert_eq!(record.base_cost_factor(), None);
        assert_eq!(record.rating(), 0.0);
        assert_eq!(record.coordinates(), None);
        assert!(record.accepted_schemes().is_empty());
        assert_eq!(record.beds(), BedCapacity::default());
        assert!(record.offers_speciality("ENT"));
    }

    #[test]
    fn test_coordinates_require_both() {
        let mut hospital = Hospital::new("A", "Mumbai");
        hospital.latitude = Some(19.07);
        assert_eq!(hospital.coordinates(), None);

        hospital.longitude = Some(72.87);
        assert_eq!(hospital.coordinates(), Some((19.07, 72.87)));
    }

    #[test]
    fn test_deserialize_catalog_spelling() {
        let json = r#"{
            "name": "Civil Hospital",
            "city": "Ahmedabad",
            "lat": 23.05,
            "lng": 72.6,
            "specialities": ["General Medicine"],
            "hospital_type": "government",
            "acceptedSchemes": [{"schemeName": "PMJAY", "schemeId": "PM-1"}],
            "icu_beds": 40
        }"#;

        let hospital: Hospital = serde_json::from_str(json).unwrap();
        assert_eq!(hospital.latitude, Some(23.05));
        assert_eq!(hospital.longitude, Some(72.6));
        assert_eq!(hospital.base_cost_factor, None);
        assert_eq!(hospital.accepted_schemes[0].scheme_id.as_deref(), Some("PM-1"));
        assert_eq!(hospital.beds().icu, 40);
        assert_eq!(hospital.rating, 0.0);
    }

    #[test]
    fn test_hospital_type_names_round_trip() {
        for kind in [
            HospitalType::Government,
            HospitalType::Private,
            HospitalType::Premium,
            HospitalType::Trust,
            HospitalType::Unknown,
        ] {
            assert_eq!(HospitalType::from_canonical(kind.as_str()), kind);
        }
    }
}
