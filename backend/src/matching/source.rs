//! Hospital sources
//!
//! The engine does not own hospital data. A [`HospitalSource`] supplies the
//! hospitals of one city; [`HospitalCatalog`] is the in-memory implementation
//! used by the CLI, the Python bindings, and tests.

use std::path::Path;

use crate::error::Result;
use crate::models::{Hospital, HospitalRecord};
use crate::resolve::same_city;

/// Supplier of hospital records
pub trait HospitalSource {
    type Record: HospitalRecord;

    /// Hospitals whose stored city equals `city`, case-insensitively
    ///
    /// Implementations may return a superset; the matcher re-checks the city.
    fn hospitals_in_city(&self, city: &str) -> Result<Vec<Self::Record>>;
}

/// In-memory hospital catalog, iterated in insertion order
#[derive(Debug, Clone, Default)]
pub struct HospitalCatalog {
    hospitals: Vec<Hospital>,
}

impl HospitalCatalog {
    pub fn new(hospitals: Vec<Hospital>) -> Self {
        Self { hospitals }
    }

    /// Parse a JSON array of hospital records
    ///
    /// # Example
    /// ```
    /// use medcost_core::HospitalCatalog;
    ///
    /// let catalog = HospitalCatalog::from_json_str(
    ///     r#"[{"name": "Civil Hospital", "city": "Ahmedabad", "specialities": ["ENT"]}]"#,
    /// ).unwrap();
    /// assert_eq!(catalog.len(), 1);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let hospitals: Vec<Hospital> = serde_json::from_str(json)?;
        Ok(Self::new(hospitals))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn push(&mut self, hospital: Hospital) {
        self.hospitals.push(hospital);
    }

    pub fn hospitals(&self) -> &[Hospital] {
        &self.hospitals
    }

    pub fn len(&self) -> usize {
        self.hospitals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hospitals.is_empty()
    }
}

impl HospitalSource for HospitalCatalog {
    type Record = Hospital;

    fn hospitals_in_city(&self, city: &str) -> Result<Vec<Hospital>> {
        Ok(self
            .hospitals
            .iter()
            .filter(|h| same_city(&h.city, city))
            .cloned()
            .collect())
    }
}
