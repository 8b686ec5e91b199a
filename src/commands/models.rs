use crate::aggregator::StatusFilter;
use crate::parser::SourceConfig;
use std::path::PathBuf;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Case and fee files
    pub sources: SourceConfig,

    /// Status filter for the record listing
    pub filter: StatusFilter,

    /// Extra status label to count (case-insensitive substring)
    pub label: Option<String>,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Print the text summary to stdout
    pub print_summary: bool,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            sources: SourceConfig::default(),
            filter: StatusFilter::All,
            label: None,
            output_json: None,
            print_summary: true,
        }
    }
}
