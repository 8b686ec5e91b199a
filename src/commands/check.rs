//! Source inspection commands: `check` and `statuses`.

use crate::aggregator::status_options;
use crate::parser::SourceConfig;
use crate::session::{DataSession, MatchStats};
use anyhow::{Context, Result};
use log::info;

/// Load both sources and report how they line up
///
/// **Public** - called from main.rs
pub fn execute_check(sources: &SourceConfig) -> Result<MatchStats> {
    let session = DataSession::open(sources).context("Failed to load source files")?;
    let stats = session.match_stats();

    println!("✓ Cases: {} ({})", session.cases().len(), sources.cases_path.display());
    println!("✓ Fees:  {} ({})", session.fees().len(), sources.fees_path.display());
    println!("  Matched cases:   {}", stats.matched_cases);
    println!("  Cases without fee: {}", format_ids(&stats.unmatched_cases));
    println!("  Fees without case: {}", format_ids(&stats.unmatched_fees));

    info!(
        "Check complete: {} matched, {} unmatched cases, {} unmatched fees",
        stats.matched_cases,
        stats.unmatched_cases.len(),
        stats.unmatched_fees.len()
    );

    Ok(stats)
}

/// Print the status filter options for the joined data
///
/// **Public** - called from main.rs
pub fn execute_statuses(sources: &SourceConfig) -> Result<Vec<String>> {
    let session = DataSession::open(sources).context("Failed to load source files")?;
    let options = status_options(&session.joined());

    for option in &options {
        println!("{}", option);
    }

    Ok(options)
}

/// Count plus identifiers, e.g. `2 [7, 9]`
fn format_ids(ids: &[String]) -> String {
    if ids.is_empty() {
        "0".to_string()
    } else {
        format!("{} [{}]", ids.len(), ids.join(", "))
    }
}
