//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod check;
pub mod models;
pub mod report;
pub mod utils;

// Re-export main command functions
pub use check::{execute_check, execute_statuses};
pub use models::ReportArgs;
pub use report::{execute_report, validate_args};
pub use utils::display_version;
