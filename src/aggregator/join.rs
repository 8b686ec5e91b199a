//! Hash join of case records with fee records.
//!
//! The fee file is indexed by case identifier, then each case is probed in
//! file order. Cases without a fee, and fees without a case, are dropped.

use crate::parser::schema::{CaseRecord, FeeRecord, JoinedRecord};
use log::debug;
use std::collections::HashMap;

/// Join cases with fees and derive the estimated fee
///
/// **Public** - main entry point for the join
///
/// # Returns
/// One joined record per (case, fee) pair sharing an identifier, sorted by
/// deadline ascending. The sort is stable, so cases with the same deadline
/// keep their file order.
pub fn join_and_derive(cases: &[CaseRecord], fees: &[FeeRecord]) -> Vec<JoinedRecord> {
    debug!("Joining {} cases with {} fees", cases.len(), fees.len());

    let mut fee_index: HashMap<&str, Vec<&FeeRecord>> = HashMap::with_capacity(fees.len());
    for fee in fees {
        fee_index.entry(fee.case_id.as_str()).or_default().push(fee);
    }

    let mut joined: Vec<JoinedRecord> = cases
        .iter()
        .flat_map(|case| {
            fee_index
                .get(case.case_id.as_str())
                .into_iter()
                .flatten()
                .map(move |fee| derive(case, fee))
        })
        .collect();

    joined.sort_by_key(|record| record.deadline);

    debug!("Join produced {} records", joined.len());

    joined
}

/// Round to cents, half away from zero
///
/// **Public** - the rounding rule for every derived amount
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Build a joined record from a matching pair
///
/// **Private** - internal conversion
fn derive(case: &CaseRecord, fee: &FeeRecord) -> JoinedRecord {
    JoinedRecord {
        case_id: case.case_id.clone(),
        opposing_party: case.opposing_party.clone(),
        claim_value: case.claim_value,
        deadline: case.deadline,
        status: case.status.clone(),
        fee_percentage: fee.fee_percentage,
        estimated_fee: round_cents(case.claim_value * fee.fee_percentage / 100.0),
    }
}
