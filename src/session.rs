//! Scoped data session.
//!
//! A `DataSession` owns both loaded tables for the length of one command.
//! Opening it loads everything or nothing; dropping it releases the tables.

use crate::aggregator::join_and_derive;
use crate::parser::{load, CaseRecord, FeeRecord, JoinedRecord, SourceConfig};
use crate::utils::error::DataSourceError;
use log::debug;
use std::collections::HashSet;

/// Loaded case and fee tables
#[derive(Debug)]
pub struct DataSession {
    config: SourceConfig,
    cases: Vec<CaseRecord>,
    fees: Vec<FeeRecord>,
}

/// How the two tables line up on the case identifier
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchStats {
    /// Cases with at least one fee row
    pub matched_cases: usize,
    /// Case identifiers with no fee row
    pub unmatched_cases: Vec<String>,
    /// Fee identifiers with no case row
    pub unmatched_fees: Vec<String>,
}

impl DataSession {
    /// Load both sources
    ///
    /// **Public** - main entry point for acquiring data
    ///
    /// # Errors
    /// Any `DataSourceError` from loading; no session exists on failure.
    pub fn open(config: &SourceConfig) -> Result<Self, DataSourceError> {
        debug!(
            "Opening session: cases={}, fees={}",
            config.cases_path.display(),
            config.fees_path.display()
        );

        let (cases, fees) = load(config)?;

        Ok(Self {
            config: config.clone(),
            cases,
            fees,
        })
    }

    /// Build a session from records already in memory
    pub fn from_records(config: SourceConfig, cases: Vec<CaseRecord>, fees: Vec<FeeRecord>) -> Self {
        Self { config, cases, fees }
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    pub fn cases(&self) -> &[CaseRecord] {
        &self.cases
    }

    pub fn fees(&self) -> &[FeeRecord] {
        &self.fees
    }

    /// Join the tables, derive fees and sort by deadline
    pub fn joined(&self) -> Vec<JoinedRecord> {
        join_and_derive(&self.cases, &self.fees)
    }

    /// Report which identifiers the join will drop
    ///
    /// The join itself drops these silently; this is for operators checking
    /// their files.
    pub fn match_stats(&self) -> MatchStats {
        let fee_ids: HashSet<&str> = self.fees.iter().map(|f| f.case_id.as_str()).collect();
        let case_ids: HashSet<&str> = self.cases.iter().map(|c| c.case_id.as_str()).collect();

        let mut stats = MatchStats::default();
        for case in &self.cases {
            if fee_ids.contains(case.case_id.as_str()) {
                stats.matched_cases += 1;
            } else {
                stats.unmatched_cases.push(case.case_id.clone());
            }
        }

        let mut seen = HashSet::new();
        for fee in &self.fees {
            let id = fee.case_id.as_str();
            if !case_ids.contains(id) && seen.insert(id) {
                stats.unmatched_fees.push(fee.case_id.clone());
            }
        }

        stats
    }
}

impl Drop for DataSession {
    fn drop(&mut self) {
        debug!(
            "Closing session ({} cases, {} fees released)",
            self.cases.len(),
            self.fees.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn case(id: &str) -> CaseRecord {
        CaseRecord {
            case_id: id.to_string(),
            opposing_party: String::new(),
            claim_value: 100.0,
            deadline: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            status: "Em Andamento".to_string(),
        }
    }

    fn fee(id: &str) -> FeeRecord {
        FeeRecord {
            case_id: id.to_string(),
            fee_percentage: 10.0,
        }
    }

    #[test]
    fn test_match_stats() {
        let session = DataSession::from_records(
            SourceConfig::default(),
            vec![case("1"), case("2")],
            vec![fee("1"), fee("9"), fee("9")],
        );

        let stats = session.match_stats();

        assert_eq!(stats.matched_cases, 1);
        assert_eq!(stats.unmatched_cases, vec!["2"]);
        assert_eq!(stats.unmatched_fees, vec!["9"]);
    }

    #[test]
    fn test_joined_from_session() {
        let session = DataSession::from_records(
            SourceConfig::default(),
            vec![case("1"), case("2")],
            vec![fee("2")],
        );

        let joined = session.joined();
        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].case_id, "2");
        assert_eq!(joined[0].estimated_fee, 10.0);
    }

    #[test]
    fn test_open_missing_sources() {
        let config = SourceConfig::new("/nope/processos.csv", "/nope/honorarios.csv");
        assert!(matches!(
            DataSession::open(&config),
            Err(DataSourceError::NotFound(_))
        ));
    }
}
