//! Configuration and constants for the CLI.

/// Current report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Default case file, relative to the working directory
pub const DEFAULT_CASES_FILE: &str = "processos.csv";

/// Default fee file, relative to the working directory
pub const DEFAULT_FEES_FILE: &str = "honorarios.csv";

/// Default field delimiter for both sources
pub const DEFAULT_DELIMITER: u8 = b',';

/// Filter value meaning "no status filter"
pub const ALL_STATUSES: &str = "Todos";

// Headline status labels shown in the metrics block
pub const STATUS_IN_PROGRESS: &str = "Em Andamento";
pub const STATUS_CONCLUDED: &str = "Concluído";

// Column names shared by both sources
pub const COL_CASE_ID: &str = "numero_processo";
pub const COL_OPPOSING_PARTY: &str = "parte_contraria";
pub const COL_CLAIM_VALUE: &str = "valor_causa";
pub const COL_DEADLINE: &str = "prazo_final";
pub const COL_STATUS: &str = "status";
pub const COL_FEE_PERCENTAGE: &str = "honorario_percentual";

/// Columns the case file must carry (opposing party is optional)
pub const REQUIRED_CASE_COLUMNS: &[&str] = &[COL_CASE_ID, COL_CLAIM_VALUE, COL_DEADLINE, COL_STATUS];

/// Columns the fee file must carry
pub const REQUIRED_FEE_COLUMNS: &[&str] = &[COL_CASE_ID, COL_FEE_PERCENTAGE];

/// Accepted deadline formats: ISO first, then the Brazilian day-first form
pub const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];
