//! Encoding and decoding helpers between the domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings, calendar dates as `YYYY-MM-DD`,
//! severity as its canonical string. Calendar dates decode leniently: a
//! malformed stored date becomes `None` so one bad row cannot abort a full
//! listing (the aggregation layer then excludes it from date buckets).

use std::str::FromStr as _;

use casefile_core::case::{Case, Severity};
use chrono::{DateTime, NaiveDate, Utc};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── NaiveDate ───────────────────────────────────────────────────────────────

pub fn encode_date(d: NaiveDate) -> String { d.format("%Y-%m-%d").to_string() }

/// Lenient: `None` for anything that is not a valid `YYYY-MM-DD` date.
pub fn decode_date(s: Option<&str>) -> Option<NaiveDate> {
  s.and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}

// ─── Severity ────────────────────────────────────────────────────────────────

pub fn decode_severity(s: &str) -> Result<Severity> {
  Ok(Severity::from_str(s)?)
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `cases` row.
pub struct RawCase {
  pub case_id:              i64,
  pub case_name:            String,
  pub case_type:            String,
  pub status:               String,
  pub description:          String,
  pub location:             String,
  pub amount_involved:      f64,
  pub currency:             String,
  pub date_detected:        Option<String>,
  pub date_reported:        Option<String>,
  pub date_resolved:        Option<String>,
  pub parties_involved:     String,
  pub investigation_agency: String,
  pub court_reference:      Option<String>,
  pub source_url:           Option<String>,
  pub created_by:           String,
  pub created_at:           String,
  pub updated_at:           String,
  pub severity:             String,
}

impl RawCase {
  pub fn into_case(self) -> Result<Case> {
    Ok(Case {
      case_id:              self.case_id,
      case_name:            self.case_name,
      case_type:            self.case_type,
      status:               self.status,
      description:          self.description,
      location:             self.location,
      amount_involved:      self.amount_involved,
      currency:             self.currency,
      date_detected:        decode_date(self.date_detected.as_deref()),
      date_reported:        decode_date(self.date_reported.as_deref()),
      date_resolved:        decode_date(self.date_resolved.as_deref()),
      parties_involved:     self.parties_involved,
      investigation_agency: self.investigation_agency,
      court_reference:      self.court_reference,
      source_url:           self.source_url,
      created_by:           self.created_by,
      created_at:           decode_dt(&self.created_at)?,
      updated_at:           decode_dt(&self.updated_at)?,
      severity:             decode_severity(&self.severity)?,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn date_round_trip() {
    let d = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    assert_eq!(decode_date(Some(&encode_date(d))), Some(d));
  }

  #[test]
  fn malformed_date_decodes_as_none() {
    assert_eq!(decode_date(Some("not-a-date")), None);
    assert_eq!(decode_date(Some("2024-13-40")), None);
    assert_eq!(decode_date(None), None);
  }
}
