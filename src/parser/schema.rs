//! Record definitions for the two source files and their join.
//!
//! Field names follow the column headers of the source files so the same
//! structs deserialize from CSV and serialize into the JSON report.

use crate::utils::config::DATE_FORMATS;
use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize};

/// One row of the case file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseRecord {
    /// Case identifier, the join key
    #[serde(rename = "numero_processo")]
    pub case_id: String,

    /// Opposing party name (column is optional)
    #[serde(rename = "parte_contraria", default)]
    pub opposing_party: String,

    /// Claim value in BRL
    #[serde(rename = "valor_causa", deserialize_with = "deserialize_amount")]
    pub claim_value: f64,

    /// Final deadline
    #[serde(rename = "prazo_final", deserialize_with = "deserialize_date")]
    pub deadline: NaiveDate,

    /// Free-text status, e.g. "Em Andamento"
    pub status: String,
}

/// One row of the fee file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeRecord {
    /// Case identifier this fee applies to
    #[serde(rename = "numero_processo")]
    pub case_id: String,

    /// Fee percentage, 0-100
    #[serde(rename = "honorario_percentual", deserialize_with = "deserialize_amount")]
    pub fee_percentage: f64,
}

/// A case combined with its fee and the derived fee amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinedRecord {
    #[serde(rename = "numero_processo")]
    pub case_id: String,

    #[serde(rename = "parte_contraria")]
    pub opposing_party: String,

    #[serde(rename = "valor_causa")]
    pub claim_value: f64,

    #[serde(rename = "prazo_final", deserialize_with = "deserialize_date")]
    pub deadline: NaiveDate,

    pub status: String,

    #[serde(rename = "honorario_percentual")]
    pub fee_percentage: f64,

    /// `round(claim_value * fee_percentage / 100, 2)`
    #[serde(rename = "honorario_estimado")]
    pub estimated_fee: f64,
}

/// Parse a deadline in any of the accepted formats
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).ok_or_else(|| de::Error::custom(format!("unrecognised date '{}'", raw)))
}

/// Amounts must be finite; `NaN` and `inf` parse as f64 but are not money
fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(de::Error::custom(format!("non-finite amount '{}'", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_iso() {
        assert_eq!(parse_date("2024-03-15"), NaiveDate::from_ymd_opt(2024, 3, 15));
    }

    #[test]
    fn test_parse_date_day_first() {
        assert_eq!(parse_date(" 15/03/2024 "), NaiveDate::from_ymd_opt(2024, 3, 15));
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(parse_date("next tuesday").is_none());
        assert!(parse_date("").is_none());
    }
}
