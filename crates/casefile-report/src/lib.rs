//! Aggregation and reporting engine for casefile.
//!
//! Every function here is a pure, stateless transform over a `&[Case]`
//! snapshot — the store hands over the full case list and this crate groups,
//! sorts and sums in memory. Nothing in this crate touches storage or HTTP.
//!
//! Empty inputs short-circuit to an explicit "no data" outcome (`None` or an
//! empty collection) instead of computing statistics over nothing.

pub mod export;
pub mod filter;
pub mod geo;
pub mod overview;
pub mod pattern;
pub mod timeseries;

pub use export::{ExportError, ExportFormat};
pub use filter::ReportFilter;

#[cfg(test)]
pub(crate) mod testutil {
  use casefile_core::case::{Case, Severity};
  use chrono::{NaiveDate, TimeZone as _, Utc};

  pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  /// A minimal case with the fields the aggregations care about.
  pub fn case(
    case_type: &str,
    location: &str,
    amount: f64,
    reported: Option<NaiveDate>,
    severity: Severity,
  ) -> Case {
    let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    Case {
      case_id:              0,
      case_name:            format!("{case_type} in {location}"),
      case_type:            case_type.into(),
      status:               "Open".into(),
      description:          String::new(),
      location:             location.into(),
      amount_involved:      amount,
      currency:             "USD".into(),
      date_detected:        None,
      date_reported:        reported,
      date_resolved:        None,
      parties_involved:     String::new(),
      investigation_agency: String::new(),
      court_reference:      None,
      source_url:           None,
      created_by:           "admin".into(),
      created_at:           created,
      updated_at:           created,
      severity,
    }
  }
}
