//! Enriched hospital search result

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::HospitalType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputedCost {
    pub low: i64,
    pub high: i64,
}

/// Accepted scheme with its official link, when the scheme is known
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeLink {
    pub name: String,
    pub url: Option<String>,
}

/// A matched hospital with its estimated cost attached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedHospital {
    pub id: Option<Uuid>,
    pub name: String,
    pub address: Option<String>,
    pub city: String,
    pub rating: f64,
    pub hospital_type: HospitalType,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Present only when both coordinates are known
    pub map_url: Option<String>,
    pub predicted_disease: String,
    pub computed_cost: ComputedCost,
    pub cost_text: String,
    pub schemes: Vec<SchemeLink>,
    pub total_beds: u32,
    pub icu_beds: u32,
    pub emergency_beds: u32,
}

/// Map link for a coordinate pair
pub fn map_url(latitude: f64, longitude: f64) -> String {
    format!("https://www.google.com/maps?q={},{}", latitude, longitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_url_format() {
        assert_eq!(
            map_url(23.0225, 72.5714),
            "https://www.google.com/maps?q=23.0225,72.5714"
        );
    }
}
