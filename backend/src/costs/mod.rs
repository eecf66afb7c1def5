//! Cost estimation
//!
//! This module provides:
//! - The multi-factor cost estimator (`estimator`)
//! - Rupee range formatting for display (`format`)
//!
//! # Formula
//!
//! ```text
//! total = base × city_factor × hospital_type_multiplier × hospital_base_factor
//! low   = round(total × 0.85)
//! high  = round(total × 1.15)
//! ```

pub mod estimator;
pub mod format;

// Re-exports
pub use estimator::CostEstimator;
pub use format::{format_cost_range, format_rupees};
