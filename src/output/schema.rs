//! Output JSON schema definitions for report data.
//!
//! This module defines the structure of JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use crate::aggregator::{DashboardMetrics, StatusFilter, TopValues};
use crate::parser::schema::JoinedRecord;
use crate::utils::config::REPORT_SCHEMA_VERSION;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Schema version for compatibility checking
    pub version: String,

    /// Timestamp when the report was generated (RFC 3339, UTC)
    pub generated_at: String,

    /// Case and fee files the report was built from
    pub sources: ReportSources,

    /// Status filter applied to `records`
    pub filter: StatusFilter,

    /// Metrics over the full joined set, before filtering
    pub metrics: DashboardMetrics,

    /// Maxima over `records`, absent when nothing matched the filter
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub top_values: Option<TopValues>,

    /// Joined records selected by `filter`, sorted by deadline
    pub records: Vec<JoinedRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSources {
    pub cases: String,
    pub fees: String,
}

impl Report {
    /// Assemble a report stamped with the current schema version and time
    pub fn new(
        sources: ReportSources,
        filter: StatusFilter,
        metrics: DashboardMetrics,
        top_values: Option<TopValues>,
        records: Vec<JoinedRecord>,
    ) -> Self {
        Self {
            version: REPORT_SCHEMA_VERSION.to_string(),
            generated_at: Utc::now().to_rfc3339(),
            sources,
            filter,
            metrics,
            top_values,
            records,
        }
    }
}
