//! Report command implementation.
//!
//! The report command:
//! 1. Opens a data session over both source files
//! 2. Joins cases with fees and derives estimated fees
//! 3. Calculates metrics
//! 4. Applies the status filter
//! 5. Writes/prints outputs

use super::models::ReportArgs;
use crate::aggregator::{dashboard_metrics, filter_by_status, summarize, top_values, StatusFilter};
use crate::output::{render_report, validate_path, write_report, Report, ReportSources};
use crate::session::DataSession;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::time::Instant;

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The assembled report, after it has been printed and/or written
///
/// # Errors
/// * Missing or malformed source files (`DataSourceError`)
/// * Report write errors
pub fn execute_report(args: ReportArgs) -> Result<Report> {
    let start_time = Instant::now();

    info!(
        "Building report from {} and {}",
        args.sources.cases_path.display(),
        args.sources.fees_path.display()
    );

    // Step 1: Load sources
    info!("Step 1/5: Loading source files...");
    let session = DataSession::open(&args.sources).context("Failed to load source files")?;

    // Step 2: Join
    info!("Step 2/5: Joining cases with fees...");
    let joined = session.joined();
    if joined.is_empty() {
        warn!("No case matched a fee record");
    }
    debug!(
        "{} of {} cases joined",
        joined.len(),
        session.cases().len()
    );

    // Step 3: Metrics
    info!("Step 3/5: Calculating metrics...");
    let metrics = dashboard_metrics(&joined);
    debug!("Metrics: {:?}", metrics);

    let label_summary = args.label.as_deref().map(|label| (label, summarize(&joined, label)));

    // Step 4: Filter
    info!("Step 4/5: Applying status filter '{}'...", args.filter);
    let records = filter_by_status(&joined, &args.filter);
    if records.is_empty() {
        warn!("No records match status filter '{}'", args.filter);
    }

    let report = Report::new(
        ReportSources {
            cases: session.config().cases_path.display().to_string(),
            fees: session.config().fees_path.display().to_string(),
        },
        args.filter.clone(),
        metrics,
        top_values(&records),
        records,
    );

    drop(session);

    // Step 5: Outputs
    info!("Step 5/5: Writing outputs...");
    if let Some(path) = &args.output_json {
        write_report(&report, path).context("Failed to write report JSON")?;
        info!("✓ Report written to: {}", path.display());
    }

    if args.print_summary {
        println!("{}", render_report(&report));
        if let Some((label, summary)) = label_summary {
            println!(
                "Processos com status contendo '{}': {} de {}",
                label, summary.status_matches, summary.record_count
            );
        }
    }

    let elapsed = start_time.elapsed();
    info!("Report completed in {:.2}s", elapsed.as_secs_f64());

    Ok(report)
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    let sources = &args.sources;

    if sources.cases_path.as_os_str().is_empty() {
        anyhow::bail!("Case file path cannot be empty");
    }

    if sources.fees_path.as_os_str().is_empty() {
        anyhow::bail!("Fee file path cannot be empty");
    }

    if sources.cases_path == sources.fees_path {
        anyhow::bail!("Case and fee files must be different files");
    }

    if let StatusFilter::Exact(status) = &args.filter {
        if status.trim().is_empty() {
            anyhow::bail!("Status filter cannot be empty (use 'Todos' for no filter)");
        }
    }

    if let Some(label) = &args.label {
        if label.trim().is_empty() {
            anyhow::bail!("Status label cannot be empty");
        }
    }

    if let Some(path) = &args.output_json {
        validate_path(path).context("Invalid report output path")?;
    }

    Ok(())
}
