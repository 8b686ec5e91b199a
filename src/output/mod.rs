//! Output writers for report data.
//!
//! This module handles:
//! - JSON reports (write and read back)
//! - Plain-text summaries for the terminal

pub mod json;
pub mod schema;
pub mod text;

// Re-export main functions
pub use json::{read_report, validate_path, write_report};
pub use schema::{Report, ReportSources};
pub use text::{format_currency, render_metrics, render_records, render_report};
