//! Aggregation of loaded records into joined rows and metrics.
//!
//! This module transforms parsed case and fee records into:
//! - Joined records with the derived fee (hash join)
//! - Summary metrics
//! - Status-filtered views

pub mod filter;
pub mod join;
pub mod metrics;

// Re-export main types and functions
pub use filter::{filter_by_status, status_options, StatusFilter};
pub use join::{join_and_derive, round_cents};
pub use metrics::{dashboard_metrics, summarize, top_values, DashboardMetrics, Summary, TopValues};
