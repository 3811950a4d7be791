//! Intersection filtering for report export.

use casefile_core::case::{Case, Severity};
use serde::Deserialize;

/// Filter over the three report dimensions.
///
/// Each dimension is a set; an empty set means "no restriction on that
/// dimension". A case must match every non-empty dimension to pass
/// (intersection semantics).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportFilter {
  pub types:      Vec<String>,
  pub severities: Vec<Severity>,
  pub years:      Vec<i32>,
}

impl ReportFilter {
  pub fn matches(&self, case: &Case) -> bool {
    if !self.types.is_empty() && !self.types.contains(&case.case_type) {
      return false;
    }
    if !self.severities.is_empty() && !self.severities.contains(&case.severity)
    {
      return false;
    }
    if !self.years.is_empty() {
      // A case without a report date has no year and cannot match a
      // year-restricted filter.
      match case.report_year() {
        Some(year) if self.years.contains(&year) => {}
        _ => return false,
      }
    }
    true
  }

  /// The cases passing the filter, in input order.
  pub fn apply<'a>(&self, cases: &'a [Case]) -> Vec<&'a Case> {
    cases.iter().filter(|c| self.matches(c)).collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testutil::{case, date};

  fn fixture() -> Vec<Case> {
    vec![
      case("Ponzi Scheme", "Harare", 100.0, Some(date(2023, 6, 1)), Severity::High),
      case("Bank Fraud", "Gweru", 200.0, Some(date(2024, 1, 1)), Severity::Low),
      case("Bank Fraud", "Harare", 300.0, None, Severity::Critical),
    ]
  }

  #[test]
  fn empty_filter_returns_everything() {
    let cases = fixture();
    assert_eq!(ReportFilter::default().apply(&cases).len(), cases.len());
  }

  #[test]
  fn type_filter_restricts_to_named_types() {
    let cases = fixture();
    let filter = ReportFilter {
      types: vec!["Bank Fraud".into()],
      ..Default::default()
    };
    let matched = filter.apply(&cases);
    assert_eq!(matched.len(), 2);
    assert!(matched.iter().all(|c| c.case_type == "Bank Fraud"));
  }

  #[test]
  fn dimensions_intersect() {
    let cases = fixture();
    let filter = ReportFilter {
      types:      vec!["Bank Fraud".into()],
      severities: vec![Severity::Low],
      years:      vec![2024],
    };
    let matched = filter.apply(&cases);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].location, "Gweru");
  }

  #[test]
  fn absent_types_yield_empty_result_without_error() {
    let cases = fixture();
    let filter = ReportFilter {
      types: vec!["Money Laundering".into()],
      ..Default::default()
    };
    assert!(filter.apply(&cases).is_empty());
  }

  #[test]
  fn year_filter_excludes_undated_cases() {
    let cases = fixture();
    let filter = ReportFilter { years: vec![2023, 2024], ..Default::default() };
    let matched = filter.apply(&cases);
    assert_eq!(matched.len(), 2);
    assert!(matched.iter().all(|c| c.date_reported.is_some()));
  }
}
