//! Search query

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::models::DiseaseInput;

/// Order of search results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultOrder {
    /// Candidate iteration order, as supplied by the hospital source
    #[default]
    AsListed,
    /// Lowest estimated cost first; ties keep candidate order
    CostAscending,
    /// Highest rating first; ties keep candidate order
    RatingDescending,
}

/// Parameters of a hospital search
///
/// `speciality` and `city` are required. Both are optional here so that an
/// absent value can be reported as a validation error instead of a panic.
///
/// # Example
/// ```
/// use medcost_core::SearchQuery;
///
/// let query = SearchQuery::new("heart specialist", "Ahmedabad").with_budget(100_000.0);
/// assert_eq!(query.budget, Some(100_000.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub speciality: Option<String>,
    pub city: Option<String>,
    /// Disease (or symptoms) to price; a placeholder is priced when absent
    #[serde(default)]
    pub disease: Option<DiseaseInput>,
    /// Maximum acceptable low estimate (rupees)
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub order: ResultOrder,
}

/// Query whose required fields have been checked
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ValidatedQuery<'q> {
    pub speciality: &'q str,
    pub city: &'q str,
    pub disease: Option<&'q DiseaseInput>,
    pub budget: Option<f64>,
    pub order: ResultOrder,
}

impl SearchQuery {
    pub fn new(speciality: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            speciality: Some(speciality.into()),
            city: Some(city.into()),
            ..Self::default()
        }
    }

    pub fn with_disease(mut self, disease: impl Into<DiseaseInput>) -> Self {
        self.disease = Some(disease.into());
        self
    }

    pub fn with_budget(mut self, budget: f64) -> Self {
        self.budget = Some(budget);
        self
    }

    pub fn with_order(mut self, order: ResultOrder) -> Self {
        self.order = order;
        self
    }

    /// Check required fields and the budget
    ///
    /// Blank strings count as missing. A budget must be a finite,
    /// non-negative number.
    pub(crate) fn validate(&self) -> Result<ValidatedQuery<'_>> {
        let speciality = required(self.speciality.as_deref(), "speciality")?;
        let city = required(self.city.as_deref(), "city")?;

        if let Some(budget) = self.budget {
            if !budget.is_finite() || budget < 0.0 {
                return Err(EngineError::InvalidParameter {
                    name: "budget",
                    reason: format!("{} is not a finite non-negative amount", budget),
                });
            }
        }

        Ok(ValidatedQuery {
            speciality,
            city,
            disease: self.disease.as_ref(),
            budget: self.budget,
            order: self.order,
        })
    }
}

fn required<'q>(value: Option<&'q str>, name: &'static str) -> Result<&'q str> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(EngineError::MissingParameter(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_speciality() {
        let query = SearchQuery {
            city: Some("Mumbai".to_string()),
            ..SearchQuery::default()
        };
        assert!(matches!(
            query.validate(),
            Err(EngineError::MissingParameter("speciality"))
        ));
    }

    #[test]
    fn test_blank_city_is_missing() {
        let query = SearchQuery::new("ENT", "   ");
        assert!(matches!(query.validate(), Err(EngineError::MissingParameter("city"))));
    }

    #[test]
    fn test_budget_must_be_finite_and_non_negative() {
        for budget in [-1.0, f64::NAN, f64::INFINITY] {
            let query = SearchQuery::new("ENT", "Mumbai").with_budget(budget);
            assert!(matches!(
                query.validate(),
                Err(EngineError::InvalidParameter { name: "budget", .. })
            ));
        }
        assert!(SearchQuery::new("ENT", "Mumbai").with_budget(0.0).validate().is_ok());
    }

    #[test]
    fn test_values_are_trimmed() {
        let query = SearchQuery::new(" ent ", " Mumbai ");
        let validated = query.validate().unwrap();
        assert_eq!(validated.speciality, "ent");
        assert_eq!(validated.city, "Mumbai");
    }
}
