//! Domain models for the cost estimation engine

pub mod enriched;
pub mod estimate;
pub mod hospital;

// Re-exports
pub use enriched::{ComputedCost, EnrichedHospital, SchemeLink};
pub use estimate::{BaseCostSource, CostBreakdown, CostEstimate, DiseaseInput, Severity};
pub use hospital::{AcceptedScheme, BedCapacity, Hospital, HospitalRecord, HospitalType};
