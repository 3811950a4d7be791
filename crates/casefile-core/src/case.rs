//! Case types — the fundamental unit of the casefile store.
//!
//! A case is one fraud investigation record. Cases are created once through
//! the case builder and never edited or deleted afterwards; every reporting
//! view reads the full collection and aggregates in memory.

use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ─── Severity ────────────────────────────────────────────────────────────────

/// Enumerated impact rating for a case.
///
/// This is a closed set: the strings `Low`, `Medium`, `High` and `Critical`
/// round-trip through [`FromStr`]/[`fmt::Display`], and anything else is a
/// constraint violation rejected at the boundary.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
  Deserialize,
)]
pub enum Severity {
  Low,
  Medium,
  High,
  Critical,
}

impl Severity {
  /// All severities in ascending order of impact.
  pub const ALL: [Severity; 4] =
    [Severity::Low, Severity::Medium, Severity::High, Severity::Critical];

  /// The string stored in the `severity` column.
  pub fn as_str(self) -> &'static str {
    match self {
      Severity::Low => "Low",
      Severity::Medium => "Medium",
      Severity::High => "High",
      Severity::Critical => "Critical",
    }
  }
}

impl fmt::Display for Severity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Severity {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "Low" => Ok(Severity::Low),
      "Medium" => Ok(Severity::Medium),
      "High" => Ok(Severity::High),
      "Critical" => Ok(Severity::Critical),
      other => Err(Error::InvalidSeverity(other.to_owned())),
    }
  }
}

// ─── Case ────────────────────────────────────────────────────────────────────

/// A persisted fraud case row.
///
/// `case_id` is assigned by the store and stable forever after. The three
/// calendar dates carry no enforced ordering between them, and `date_resolved`
/// is absent for open cases. Dates that fail to parse on read decode as
/// `None` rather than aborting the whole result set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Case {
  pub case_id:              i64,
  pub case_name:            String,
  pub case_type:            String,
  pub status:               String,
  pub description:          String,
  pub location:             String,
  pub amount_involved:      f64,
  pub currency:             String,
  pub date_detected:        Option<NaiveDate>,
  pub date_reported:        Option<NaiveDate>,
  pub date_resolved:        Option<NaiveDate>,
  pub parties_involved:     String,
  pub investigation_agency: String,
  pub court_reference:      Option<String>,
  pub source_url:           Option<String>,
  pub created_by:           String,
  pub created_at:           DateTime<Utc>,
  pub updated_at:           DateTime<Utc>,
  pub severity:             Severity,
}

impl Case {
  /// Calendar year of the report date, if one is recorded.
  pub fn report_year(&self) -> Option<i32> {
    use chrono::Datelike as _;
    self.date_reported.map(|d| d.year())
  }
}

/// Input for [`CaseStore::add_case`](crate::store::CaseStore::add_case).
///
/// The id, creation timestamps and default status are assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCase {
  pub case_name:            String,
  pub case_type:            String,
  pub description:          String,
  pub location:             String,
  pub amount_involved:      f64,
  pub currency:             String,
  pub date_detected:        Option<NaiveDate>,
  pub date_reported:        Option<NaiveDate>,
  pub date_resolved:        Option<NaiveDate>,
  pub parties_involved:     String,
  pub investigation_agency: String,
  pub court_reference:      Option<String>,
  pub source_url:           Option<String>,
  pub created_by:           String,
  pub severity:             Severity,
}

impl NewCase {
  /// Field-level constraints checked before any row is written.
  pub fn validate(&self) -> Result<()> {
    if self.case_name.trim().is_empty() {
      return Err(Error::EmptyCaseName);
    }
    if self.amount_involved < 0.0 {
      return Err(Error::NegativeAmount(self.amount_involved));
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn severity_round_trips() {
    for sev in Severity::ALL {
      assert_eq!(sev.as_str().parse::<Severity>().unwrap(), sev);
    }
  }

  #[test]
  fn severity_rejects_unknown_values() {
    assert!("Severe".parse::<Severity>().is_err());
    assert!("low".parse::<Severity>().is_err());
    assert!("".parse::<Severity>().is_err());
  }

  #[test]
  fn new_case_rejects_blank_name() {
    let case = NewCase {
      case_name:            "  ".into(),
      case_type:            "Bank Fraud".into(),
      description:          String::new(),
      location:             "Harare".into(),
      amount_involved:      100.0,
      currency:             "USD".into(),
      date_detected:        None,
      date_reported:        None,
      date_resolved:        None,
      parties_involved:     String::new(),
      investigation_agency: String::new(),
      court_reference:      None,
      source_url:           None,
      created_by:           "admin".into(),
      severity:             Severity::Low,
    };
    assert!(matches!(case.validate(), Err(Error::EmptyCaseName)));
  }

  #[test]
  fn new_case_rejects_negative_amount() {
    let case = NewCase {
      case_name:            "Test".into(),
      case_type:            "Bank Fraud".into(),
      description:          String::new(),
      location:             "Harare".into(),
      amount_involved:      -1.0,
      currency:             "USD".into(),
      date_detected:        None,
      date_reported:        None,
      date_resolved:        None,
      parties_involved:     String::new(),
      investigation_agency: String::new(),
      court_reference:      None,
      source_url:           None,
      created_by:           "admin".into(),
      severity:             Severity::Low,
    };
    assert!(matches!(case.validate(), Err(Error::NegativeAmount(_))));
  }
}
