use case_fee_report::parser::{load, load_cases, load_fees, SourceConfig};
use case_fee_report::utils::DataSourceError;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CASES: &str = "\
numero_processo,parte_contraria,valor_causa,prazo_final,status
0001234-56.2024.8.26.0100,Banco Alfa S.A.,1000.00,2024-01-01,Em Andamento
0007890-12.2023.8.26.0001,\"Silva, João\",2500.50,2024-02-10,Concluído
";

const FEES: &str = "\
numero_processo,honorario_percentual
0001234-56.2024.8.26.0100,10
0007890-12.2023.8.26.0001,12.5
";

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_both_sources() {
    let dir = TempDir::new().unwrap();
    let config = SourceConfig::new(
        write(dir.path(), "processos.csv", CASES),
        write(dir.path(), "honorarios.csv", FEES),
    );

    let (cases, fees) = load(&config).unwrap();

    assert_eq!(cases.len(), 2);
    assert_eq!(fees.len(), 2);
    assert_eq!(cases[1].opposing_party, "Silva, João");
    assert_eq!(cases[1].deadline, NaiveDate::from_ymd_opt(2024, 2, 10).unwrap());
    assert_eq!(fees[1].fee_percentage, 12.5);
}

#[test]
fn test_missing_fee_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let config = SourceConfig::new(
        write(dir.path(), "processos.csv", CASES),
        dir.path().join("honorarios.csv"),
    );

    match load(&config) {
        Err(DataSourceError::NotFound(path)) => assert!(path.ends_with("honorarios.csv")),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_missing_fee_column() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "honorarios.csv", "numero_processo,percentual\n1,10\n");

    let err = load_fees(&path, b',').unwrap_err();
    assert!(err.to_string().contains("honorario_percentual"));
}

#[test]
fn test_empty_file_has_no_columns() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "processos.csv", "");

    assert!(matches!(
        load_cases(&path, b','),
        Err(DataSourceError::MissingColumn { .. })
    ));
}

#[test]
fn test_header_only_file_loads_empty() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "honorarios.csv", "numero_processo,honorario_percentual\n");

    assert!(load_fees(&path, b',').unwrap().is_empty());
}

#[test]
fn test_semicolon_files_with_padded_headers() {
    let dir = TempDir::new().unwrap();
    let cases = write(
        dir.path(),
        "processos.csv",
        "numero_processo ; valor_causa ; prazo_final ; status\n1;1000;01/01/2024;Em Andamento\n",
    );
    let fees = write(dir.path(), "honorarios.csv", "numero_processo;honorario_percentual\n1;10\n");

    let config = SourceConfig::new(cases, fees).with_delimiter(b';');
    let (cases, fees) = load(&config).unwrap();

    assert_eq!(cases[0].deadline, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    assert_eq!(fees[0].case_id, "1");
}

#[test]
fn test_error_messages_name_the_file() {
    let dir = TempDir::new().unwrap();
    let path = write(
        dir.path(),
        "processos.csv",
        "numero_processo,valor_causa,prazo_final,status\n1,mil reais,2024-01-01,A\n",
    );

    let err = load_cases(&path, b',').unwrap_err();
    let message = err.to_string();
    assert!(message.contains("processos.csv"));
    assert!(message.contains("row 2"));
}

#[test]
fn test_non_finite_amounts_are_rejected() {
    let dir = TempDir::new().unwrap();
    let cases = write(
        dir.path(),
        "processos.csv",
        "numero_processo,valor_causa,prazo_final,status\n1,NaN,2024-01-01,A\n",
    );
    let fees = write(
        dir.path(),
        "honorarios.csv",
        "numero_processo,honorario_percentual\n1,10\n2,inf\n",
    );

    assert!(matches!(
        load_cases(&cases, b','),
        Err(DataSourceError::InvalidValue { row: 2, .. })
    ));
    assert!(matches!(
        load_fees(&fees, b','),
        Err(DataSourceError::InvalidValue { row: 3, .. })
    ));
}
