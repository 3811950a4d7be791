//! Tabular export of filtered case rows as CSV or XLSX.
//!
//! Only canonical columns are written — the derived reporting fields
//! (latitude/longitude, year/month buckets) never leak into an export. An
//! empty row set produces a header-only artifact.

use casefile_core::case::Case;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
  #[error("csv error: {0}")]
  Csv(#[from] csv::Error),

  #[error("csv buffer error: {0}")]
  CsvIntoInner(String),

  #[error("xlsx error: {0}")]
  Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

pub type Result<T, E = ExportError> = std::result::Result<T, E>;

/// The export file formats offered to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
  #[default]
  Csv,
  Xlsx,
}

impl ExportFormat {
  pub fn content_type(self) -> &'static str {
    match self {
      ExportFormat::Csv => "text/csv",
      ExportFormat::Xlsx => {
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
      }
    }
  }

  pub fn file_name(self) -> &'static str {
    match self {
      ExportFormat::Csv => "fraud_cases_report.csv",
      ExportFormat::Xlsx => "fraud_cases_report.xlsx",
    }
  }
}

/// Canonical column order, matching the `cases` table.
const HEADERS: [&str; 19] = [
  "case_id",
  "case_name",
  "case_type",
  "status",
  "description",
  "location",
  "amount_involved",
  "currency",
  "date_detected",
  "date_reported",
  "date_resolved",
  "parties_involved",
  "investigation_agency",
  "court_reference",
  "source_url",
  "created_by",
  "created_at",
  "updated_at",
  "severity",
];

fn field_values(case: &Case) -> [String; 19] {
  let date = |d: Option<chrono::NaiveDate>| {
    d.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
  };
  [
    case.case_id.to_string(),
    case.case_name.clone(),
    case.case_type.clone(),
    case.status.clone(),
    case.description.clone(),
    case.location.clone(),
    case.amount_involved.to_string(),
    case.currency.clone(),
    date(case.date_detected),
    date(case.date_reported),
    date(case.date_resolved),
    case.parties_involved.clone(),
    case.investigation_agency.clone(),
    case.court_reference.clone().unwrap_or_default(),
    case.source_url.clone().unwrap_or_default(),
    case.created_by.clone(),
    case.created_at.to_rfc3339(),
    case.updated_at.to_rfc3339(),
    case.severity.to_string(),
  ]
}

/// Render `cases` as UTF-8 CSV bytes with a header row.
pub fn to_csv(cases: &[&Case]) -> Result<Vec<u8>> {
  let mut writer = csv::Writer::from_writer(Vec::new());
  writer.write_record(HEADERS)?;
  for case in cases {
    writer.write_record(field_values(case))?;
  }
  writer
    .into_inner()
    .map_err(|e| ExportError::CsvIntoInner(e.to_string()))
}

/// Render `cases` as a single-sheet XLSX workbook ("Report").
pub fn to_xlsx(cases: &[&Case]) -> Result<Vec<u8>> {
  let mut workbook = rust_xlsxwriter::Workbook::new();
  let sheet = workbook.add_worksheet();
  sheet.set_name("Report")?;

  for (col, header) in HEADERS.iter().enumerate() {
    sheet.write(0, col as u16, *header)?;
  }
  for (row, case) in cases.iter().enumerate() {
    let values = field_values(case);
    for (col, value) in values.iter().enumerate() {
      // Keep the amount a real number so spreadsheet formulas work on it.
      if HEADERS[col] == "amount_involved" {
        sheet.write(row as u32 + 1, col as u16, case.amount_involved)?;
      } else {
        sheet.write(row as u32 + 1, col as u16, value.as_str())?;
      }
    }
  }

  Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
mod tests {
  use casefile_core::case::Severity;

  use super::*;
  use crate::testutil::{case, date};

  #[test]
  fn csv_has_header_and_one_row_per_case() {
    let cases = vec![
      case("Ponzi Scheme", "Harare", 100_000.0, Some(date(2024, 3, 1)), Severity::High),
      case("Bank Fraud", "Gweru", 500.0, None, Severity::Low),
    ];
    let refs: Vec<&_> = cases.iter().collect();

    let bytes = to_csv(&refs).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("case_id,case_name,case_type"));
    assert!(lines[1].contains("Ponzi Scheme"));
    assert!(lines[1].contains("100000"));
    assert!(lines[1].contains("2024-03-01"));
  }

  #[test]
  fn csv_omits_derived_columns() {
    let bytes = to_csv(&[]).unwrap();
    let header = String::from_utf8(bytes).unwrap();
    assert!(!header.contains("latitude"));
    assert!(!header.contains("longitude"));
    assert!(!header.contains("year"));
    assert!(!header.contains("month"));
  }

  #[test]
  fn empty_export_is_header_only() {
    let bytes = to_csv(&[]).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert_eq!(text.lines().count(), 1);
  }

  #[test]
  fn xlsx_produces_a_nonempty_workbook() {
    let cases =
      vec![case("Bank Fraud", "Harare", 42.0, None, Severity::Medium)];
    let refs: Vec<&_> = cases.iter().collect();

    let bytes = to_xlsx(&refs).unwrap();
    // XLSX files are ZIP containers; check the magic instead of parsing.
    assert_eq!(&bytes[..2], b"PK");
  }

  #[test]
  fn format_metadata() {
    assert_eq!(ExportFormat::Csv.content_type(), "text/csv");
    assert!(ExportFormat::Xlsx.file_name().ends_with(".xlsx"));
  }
}
