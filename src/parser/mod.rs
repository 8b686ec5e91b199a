//! Source file parsing and record definitions.
//!
//! This module handles:
//! - Reading the case and fee files
//! - Checking required columns
//! - Converting rows into typed records

pub mod csv_source;
pub mod schema;

// Re-export main types
pub use csv_source::{load, load_cases, load_fees, SourceConfig};
pub use schema::{CaseRecord, FeeRecord, JoinedRecord};
