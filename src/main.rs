//! Case Fee Report CLI
//!
//! Loads a case file and a fee file, joins them on the case identifier and
//! prints metrics plus a status-filtered listing.

use anyhow::Result;
use case_fee_report::aggregator::StatusFilter;
use case_fee_report::commands::{
    display_version, execute_check, execute_report, execute_statuses, validate_args, ReportArgs,
};
use case_fee_report::parser::SourceConfig;
use case_fee_report::utils::config::{ALL_STATUSES, DEFAULT_CASES_FILE, DEFAULT_FEES_FILE};
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

/// Case Fee Report - estimated fees per legal case
#[derive(Parser, Debug)]
#[command(name = "case-fee")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Source file locations shared by every data command
#[derive(Args, Debug)]
struct SourceOpts {
    /// Case file (numero_processo, parte_contraria, valor_causa, prazo_final, status)
    #[arg(short, long, env = "CASES_CSV", default_value = DEFAULT_CASES_FILE)]
    cases: PathBuf,

    /// Fee file (numero_processo, honorario_percentual)
    #[arg(short, long, env = "FEES_CSV", default_value = DEFAULT_FEES_FILE)]
    fees: PathBuf,

    /// Field delimiter for both files
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,
}

impl SourceOpts {
    fn into_config(self) -> Result<SourceConfig> {
        if !self.delimiter.is_ascii() {
            anyhow::bail!("Delimiter must be a single ASCII character");
        }
        Ok(SourceConfig::new(self.cases, self.fees).with_delimiter(self.delimiter as u8))
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Join the sources and print metrics and records
    Report {
        #[command(flatten)]
        sources: SourceOpts,

        /// Only list records with exactly this status
        #[arg(short, long, default_value = ALL_STATUSES)]
        status: String,

        /// Also count statuses containing this text (case-insensitive)
        #[arg(short, long)]
        label: Option<String>,

        /// Output path for JSON report (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Do not print the text summary
        #[arg(short, long)]
        quiet: bool,
    },

    /// Load the sources and report unmatched identifiers
    Check {
        #[command(flatten)]
        sources: SourceOpts,
    },

    /// List the status filter options
    Statuses {
        #[command(flatten)]
        sources: SourceOpts,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Report {
            sources,
            status,
            label,
            output,
            quiet,
        } => {
            let args = ReportArgs {
                sources: sources.into_config()?,
                filter: StatusFilter::parse(&status),
                label,
                output_json: output,
                print_summary: !quiet,
            };

            // Validate args first
            validate_args(&args)?;

            execute_report(args)?;
        }

        Commands::Check { sources } => {
            execute_check(&sources.into_config()?)?;
        }

        Commands::Statuses { sources } => {
            execute_statuses(&sources.into_config()?)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
