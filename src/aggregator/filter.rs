//! Status filter over joined records.

use crate::parser::schema::JoinedRecord;
use crate::utils::config::ALL_STATUSES;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Which records to keep
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "status", rename_all = "snake_case")]
pub enum StatusFilter {
    /// Keep everything
    #[default]
    All,
    /// Keep records whose status equals this value exactly
    Exact(String),
}

impl StatusFilter {
    /// Build a filter from user input; the sentinel maps to `All`
    pub fn parse(value: &str) -> Self {
        if value == ALL_STATUSES {
            StatusFilter::All
        } else {
            StatusFilter::Exact(value.to_string())
        }
    }

    pub fn matches(&self, record: &JoinedRecord) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Exact(status) => record.status == *status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str(ALL_STATUSES),
            StatusFilter::Exact(status) => f.write_str(status),
        }
    }
}

/// Keep the records selected by `filter`, preserving order
///
/// **Public** - `StatusFilter::All` returns the input unchanged
pub fn filter_by_status(records: &[JoinedRecord], filter: &StatusFilter) -> Vec<JoinedRecord> {
    match filter {
        StatusFilter::All => records.to_vec(),
        StatusFilter::Exact(_) => records.iter().filter(|r| filter.matches(r)).cloned().collect(),
    }
}

/// Filter choices: the sentinel, then each distinct status in first-seen order
pub fn status_options(records: &[JoinedRecord]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut options = vec![ALL_STATUSES.to_string()];
    for record in records {
        if seen.insert(record.status.as_str()) {
            options.push(record.status.clone());
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(id: &str, status: &str) -> JoinedRecord {
        JoinedRecord {
            case_id: id.to_string(),
            opposing_party: String::new(),
            claim_value: 100.0,
            deadline: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            status: status.to_string(),
            fee_percentage: 10.0,
            estimated_fee: 10.0,
        }
    }

    #[test]
    fn test_filter_all_is_identity() {
        let records = vec![record("1", "Em Andamento"), record("2", "Concluído")];
        assert_eq!(filter_by_status(&records, &StatusFilter::All), records);
    }

    #[test]
    fn test_filter_exact() {
        let records = vec![
            record("1", "Em Andamento"),
            record("2", "Concluído"),
            record("3", "em andamento"),
        ];

        let filtered = filter_by_status(&records, &StatusFilter::parse("Em Andamento"));

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].case_id, "1");
    }

    #[test]
    fn test_parse_sentinel() {
        assert_eq!(StatusFilter::parse("Todos"), StatusFilter::All);
        assert_eq!(
            StatusFilter::parse("todos"),
            StatusFilter::Exact("todos".to_string())
        );
    }

    #[test]
    fn test_status_options() {
        let records = vec![
            record("1", "Concluído"),
            record("2", "Em Andamento"),
            record("3", "Concluído"),
        ];

        assert_eq!(
            status_options(&records),
            vec!["Todos", "Concluído", "Em Andamento"]
        );
        assert_eq!(status_options(&[]), vec!["Todos"]);
    }

    #[test]
    fn test_status_options_many_duplicates() {
        let records: Vec<JoinedRecord> = (0..500)
            .map(|i| record(&i.to_string(), &format!("Status {}", i % 7)))
            .collect();

        let options = status_options(&records);

        assert_eq!(options.len(), 8);
        assert_eq!(options[1], "Status 0");
        assert_eq!(options[7], "Status 6");
    }

    #[test]
    fn test_status_named_like_sentinel_is_kept() {
        let records = vec![record("1", "Todos"), record("2", "Todos")];
        assert_eq!(status_options(&records), vec!["Todos", "Todos"]);
    }
}
