//! Summary metrics over joined records.
//!
//! Every function here is total: an empty slice yields zero counts and a
//! zero fee total.

use super::join::round_cents;
use crate::parser::schema::JoinedRecord;
use crate::utils::config::{STATUS_CONCLUDED, STATUS_IN_PROGRESS};
use log::debug;
use serde::{Deserialize, Serialize};

/// Counts and totals for one status label
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of joined records
    pub record_count: usize,

    /// Sum of estimated fees
    pub fee_total: f64,

    /// Records whose status contains the label, ignoring case
    pub status_matches: usize,
}

/// The headline numbers shown above the record listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    pub total_cases: usize,
    pub fee_total: f64,
    pub in_progress: usize,
    pub concluded: usize,
}

/// Largest claim value and largest estimated fee in a set of records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopValues {
    pub max_claim_value: f64,
    pub max_estimated_fee: f64,
}

/// Summarize joined records against a status label
///
/// **Public** - main entry point for metrics calculation
///
/// # Arguments
/// * `records` - Joined records
/// * `label` - Status text to count; matched as a case-insensitive substring
pub fn summarize(records: &[JoinedRecord], label: &str) -> Summary {
    let fee_total = round_cents(records.iter().map(|r| r.estimated_fee).sum());

    let summary = Summary {
        record_count: records.len(),
        fee_total,
        status_matches: count_status(records, label),
    };

    debug!("Summary for '{}': {:?}", label, summary);

    summary
}

/// Compute the headline metrics
///
/// **Public** - combines two `summarize` passes over the same records
pub fn dashboard_metrics(records: &[JoinedRecord]) -> DashboardMetrics {
    let in_progress = summarize(records, STATUS_IN_PROGRESS);

    DashboardMetrics {
        total_cases: in_progress.record_count,
        fee_total: in_progress.fee_total,
        in_progress: in_progress.status_matches,
        concluded: count_status(records, STATUS_CONCLUDED),
    }
}

/// Find the highest claim value and estimated fee
///
/// Returns `None` for an empty slice.
pub fn top_values(records: &[JoinedRecord]) -> Option<TopValues> {
    if records.is_empty() {
        return None;
    }

    let max_of = |f: fn(&JoinedRecord) -> f64| {
        records.iter().map(f).fold(f64::NEG_INFINITY, f64::max)
    };

    Some(TopValues {
        max_claim_value: max_of(|r| r.claim_value),
        max_estimated_fee: max_of(|r| r.estimated_fee),
    })
}

/// Case-insensitive substring count
///
/// **Private** - internal helper
fn count_status(records: &[JoinedRecord], label: &str) -> usize {
    let needle = label.to_lowercase();
    records
        .iter()
        .filter(|r| r.status.to_lowercase().contains(&needle))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(id: &str, claim: f64, fee: f64, status: &str) -> JoinedRecord {
        JoinedRecord {
            case_id: id.to_string(),
            opposing_party: String::new(),
            claim_value: claim,
            deadline: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            status: status.to_string(),
            fee_percentage: 10.0,
            estimated_fee: fee,
        }
    }

    #[test]
    fn test_summarize() {
        let records = vec![
            record("1", 1000.0, 100.0, "Em Andamento"),
            record("2", 2000.0, 200.5, "em andamento - recurso"),
            record("3", 3000.0, 300.0, "Concluído"),
        ];

        let summary = summarize(&records, "EM ANDAMENTO");

        assert_eq!(summary.record_count, 3);
        assert_eq!(summary.fee_total, 600.5);
        assert_eq!(summary.status_matches, 2);
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[], "Concluído");
        assert_eq!(summary, Summary::default());
        assert_eq!(summary.fee_total, 0.0);
    }

    #[test]
    fn test_dashboard_metrics() {
        let records = vec![
            record("1", 1000.0, 100.0, "Em Andamento"),
            record("2", 2000.0, 200.0, "CONCLUÍDO"),
            record("3", 3000.0, 300.0, "Suspenso"),
        ];

        let metrics = dashboard_metrics(&records);

        assert_eq!(metrics.total_cases, 3);
        assert_eq!(metrics.fee_total, 600.0);
        assert_eq!(metrics.in_progress, 1);
        assert_eq!(metrics.concluded, 1);
    }

    #[test]
    fn test_top_values() {
        let records = vec![
            record("1", 1000.0, 300.0, "x"),
            record("2", 5000.0, 50.0, "x"),
        ];

        let top = top_values(&records).unwrap();
        assert_eq!(top.max_claim_value, 5000.0);
        assert_eq!(top.max_estimated_fee, 300.0);
        assert!(top_values(&[]).is_none());
    }
}
