//! Lookup tables
//!
//! This module provides:
//! - Ordered alias tables for free-text resolution (`aliases`)
//! - Base costs, severity tiers, and multipliers (`pricing`)
//!
//! All tables are plain data. Built-in copies are created once per process
//! and shared by reference.

pub mod aliases;
pub mod pricing;

// Re-exports
pub use aliases::{AliasEntry, AliasTable, AliasTables};
pub use pricing::{Multiplier, PricingTables, TableError, BPS_PER_UNIT};
