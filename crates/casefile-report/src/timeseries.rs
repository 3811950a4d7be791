//! Time-series bucketing by month, quarter or year.
//!
//! Monthly buckets are ordered January…December — calendar order, not the
//! lexical order a naive string sort would give ("April" before "January").

use std::collections::BTreeMap;

use casefile_core::case::Case;
use chrono::Datelike as _;
use serde::{Deserialize, Serialize};

pub const MONTH_NAMES: [&str; 12] = [
  "January", "February", "March", "April", "May", "June", "July", "August",
  "September", "October", "November", "December",
];

/// Name for a 1-based calendar month number. Out-of-range inputs clamp to
/// the nearest valid month rather than indexing out of bounds.
fn month_name(month: u32) -> &'static str {
  MONTH_NAMES[(month.clamp(1, 12) - 1) as usize]
}

/// Caller-selectable bucketing granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
  Monthly,
  Quarterly,
  #[default]
  Yearly,
}

/// One bucket of the series: the year, a human-readable bucket label
/// ("January", "Q2", "2024") and the case count.
#[derive(Debug, Clone, Serialize)]
pub struct SeriesPoint {
  pub year:   i32,
  pub bucket: String,
  pub count:  usize,
}

/// Bucket report dates at the requested granularity. Rows without a report
/// date are excluded.
pub fn time_series(cases: &[Case], period: Period) -> Vec<SeriesPoint> {
  let dated = cases.iter().filter_map(|c| c.date_reported);

  match period {
    Period::Monthly => {
      // (month, year) -> count; month is the primary sort key so January of
      // any year precedes December of any year.
      let mut buckets: BTreeMap<(u32, i32), usize> = BTreeMap::new();
      for d in dated {
        *buckets.entry((d.month(), d.year())).or_insert(0) += 1;
      }
      buckets
        .into_iter()
        .map(|((month, year), count)| SeriesPoint {
          year,
          bucket: month_name(month).to_owned(),
          count,
        })
        .collect()
    }
    Period::Quarterly => {
      let mut buckets: BTreeMap<(i32, u32), usize> = BTreeMap::new();
      for d in dated {
        let quarter = (d.month() - 1) / 3 + 1;
        *buckets.entry((d.year(), quarter)).or_insert(0) += 1;
      }
      buckets
        .into_iter()
        .map(|((year, quarter), count)| SeriesPoint {
          year,
          bucket: format!("Q{quarter}"),
          count,
        })
        .collect()
    }
    Period::Yearly => {
      let mut buckets: BTreeMap<i32, usize> = BTreeMap::new();
      for d in dated {
        *buckets.entry(d.year()).or_insert(0) += 1;
      }
      buckets
        .into_iter()
        .map(|(year, count)| SeriesPoint {
          year,
          bucket: year.to_string(),
          count,
        })
        .collect()
    }
  }
}

#[cfg(test)]
mod tests {
  use casefile_core::case::Severity;

  use super::*;
  use crate::testutil::{case, date};

  #[test]
  fn monthly_series_uses_calendar_order() {
    let cases = vec![
      case("A", "Harare", 0.0, Some(date(2023, 12, 5)), Severity::Low),
      case("A", "Harare", 0.0, Some(date(2024, 1, 9)), Severity::Low),
    ];

    let series = time_series(&cases, Period::Monthly);
    assert_eq!(series.len(), 2);
    // January before December, not alphabetical order.
    assert_eq!(series[0].bucket, "January");
    assert_eq!(series[1].bucket, "December");
  }

  #[test]
  fn quarterly_series_assigns_quarters() {
    let cases = vec![
      case("A", "Harare", 0.0, Some(date(2024, 2, 1)), Severity::Low),
      case("A", "Harare", 0.0, Some(date(2024, 7, 1)), Severity::Low),
      case("A", "Harare", 0.0, Some(date(2024, 8, 1)), Severity::Low),
    ];

    let series = time_series(&cases, Period::Quarterly);
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].bucket, "Q1");
    assert_eq!(series[0].count, 1);
    assert_eq!(series[1].bucket, "Q3");
    assert_eq!(series[1].count, 2);
  }

  #[test]
  fn yearly_series_excludes_undated_rows() {
    let cases = vec![
      case("A", "Harare", 0.0, Some(date(2024, 2, 1)), Severity::Low),
      case("A", "Harare", 0.0, None, Severity::Low),
    ];

    let series = time_series(&cases, Period::Yearly);
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].year, 2024);
    assert_eq!(series[0].count, 1);
  }

  #[test]
  fn empty_input_yields_empty_series() {
    assert!(time_series(&[], Period::Monthly).is_empty());
  }

  #[test]
  fn month_name_clamps_out_of_range_input() {
    assert_eq!(month_name(1), "January");
    assert_eq!(month_name(12), "December");
    assert_eq!(month_name(0), "January");
    assert_eq!(month_name(13), "December");
  }
}
