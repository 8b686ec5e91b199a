//! Loading of the case and fee files.
//!
//! Both files are delimited text with a header row. Column presence is
//! checked up front so a missing column is reported by name instead of
//! as a row-level deserialization failure.

use super::schema::{CaseRecord, FeeRecord};
use crate::utils::config::{
    DEFAULT_CASES_FILE, DEFAULT_DELIMITER, DEFAULT_FEES_FILE, REQUIRED_CASE_COLUMNS,
    REQUIRED_FEE_COLUMNS,
};
use crate::utils::error::DataSourceError;
use csv::{ErrorKind, ReaderBuilder, StringRecord, Trim};
use log::{debug, info};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Where to find the two source files and how they are delimited
#[derive(Debug, Clone, PartialEq)]
pub struct SourceConfig {
    pub cases_path: PathBuf,
    pub fees_path: PathBuf,
    pub delimiter: u8,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            cases_path: PathBuf::from(DEFAULT_CASES_FILE),
            fees_path: PathBuf::from(DEFAULT_FEES_FILE),
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl SourceConfig {
    pub fn new(cases_path: impl Into<PathBuf>, fees_path: impl Into<PathBuf>) -> Self {
        Self {
            cases_path: cases_path.into(),
            fees_path: fees_path.into(),
            ..Self::default()
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Load both source files
///
/// **Public** - main entry point for loading
///
/// # Errors
/// Any `DataSourceError` from either file. The case file is read first;
/// nothing is returned unless both files load completely.
pub fn load(config: &SourceConfig) -> Result<(Vec<CaseRecord>, Vec<FeeRecord>), DataSourceError> {
    let cases = load_cases(&config.cases_path, config.delimiter)?;
    let fees = load_fees(&config.fees_path, config.delimiter)?;
    Ok((cases, fees))
}

/// Load the case file
pub fn load_cases(path: impl AsRef<Path>, delimiter: u8) -> Result<Vec<CaseRecord>, DataSourceError> {
    let path = path.as_ref();
    let cases = read_records(open_source(path)?, path, delimiter, REQUIRED_CASE_COLUMNS)?;
    info!("Loaded {} case records from {}", cases.len(), path.display());
    Ok(cases)
}

/// Load the fee file
pub fn load_fees(path: impl AsRef<Path>, delimiter: u8) -> Result<Vec<FeeRecord>, DataSourceError> {
    let path = path.as_ref();
    let fees = read_records(open_source(path)?, path, delimiter, REQUIRED_FEE_COLUMNS)?;
    info!("Loaded {} fee records from {}", fees.len(), path.display());
    Ok(fees)
}

/// Open a source file, separating "absent" from "present but unreadable"
///
/// **Private** - internal helper
fn open_source(path: &Path) -> Result<File, DataSourceError> {
    if path.is_dir() {
        return Err(DataSourceError::Unreadable {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "path is a directory"),
        });
    }

    File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DataSourceError::NotFound(path.to_path_buf()),
        _ => DataSourceError::Unreadable {
            path: path.to_path_buf(),
            source: e,
        },
    })
}

/// Parse every row of `reader` into `T`
///
/// `path` is only used for error reporting.
fn read_records<T, R>(
    reader: R,
    path: &Path,
    delimiter: u8,
    required: &[&str],
) -> Result<Vec<T>, DataSourceError>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| map_csv_error(e, path))?
        .clone();
    check_columns(&headers, path, required)?;
    debug!("{}: columns {:?}", path.display(), headers.iter().collect::<Vec<_>>());

    rdr.deserialize::<T>()
        .map(|row| row.map_err(|e| map_csv_error(e, path)))
        .collect()
}

/// Verify that every required column is in the header row
fn check_columns(headers: &StringRecord, path: &Path, required: &[&str]) -> Result<(), DataSourceError> {
    match required.iter().find(|col| !headers.iter().any(|h| h == **col)) {
        Some(missing) => Err(DataSourceError::MissingColumn {
            path: path.to_path_buf(),
            column: missing.to_string(),
        }),
        None => Ok(()),
    }
}

/// Map a csv error onto the source error taxonomy
///
/// Row-level conversion failures keep their line number; anything else is
/// a structural problem with the file.
fn map_csv_error(err: csv::Error, path: &Path) -> DataSourceError {
    if let ErrorKind::Deserialize { pos, err: de_err } = err.kind() {
        return DataSourceError::InvalidValue {
            path: path.to_path_buf(),
            row: pos.as_ref().map(|p| p.line()).unwrap_or(0),
            message: de_err.to_string(),
        };
    }

    DataSourceError::Malformed {
        path: path.to_path_buf(),
        source: err,
    }
}
