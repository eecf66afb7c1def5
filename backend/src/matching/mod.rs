//! Hospital matching
//!
//! This module provides:
//! - The hospital collaborator seam and an in-memory catalog (`source`)
//! - Search parameters and their validation (`query`)
//! - The search pipeline (`matcher`)

pub mod matcher;
pub mod query;
pub mod source;

// Re-exports
pub use matcher::{HospitalMatcher, DEFAULT_SEARCH_DISEASE};
pub use query::{ResultOrder, SearchQuery};
pub use source::{HospitalCatalog, HospitalSource};
