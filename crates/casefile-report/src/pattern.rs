//! Cross-tabulations and the per-type pattern summary.

use std::collections::BTreeMap;

use casefile_core::case::{Case, Severity};
use chrono::{Datelike as _, NaiveDate};
use serde::Serialize;

// ─── Mode ────────────────────────────────────────────────────────────────────

/// Most frequent value; ties break to the smallest key so the result is
/// deterministic. `None` only for an empty input.
fn mode<K: Ord>(values: impl IntoIterator<Item = K>) -> Option<K> {
  let mut counts: BTreeMap<K, usize> = BTreeMap::new();
  for v in values {
    *counts.entry(v).or_insert(0) += 1;
  }
  counts
    .into_iter()
    .max_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(&a.0)))
    .map(|(k, _)| k)
}

// ─── Cross-tabulation ────────────────────────────────────────────────────────

/// One cell of the (type, severity) cross-tabulation.
#[derive(Debug, Clone, Serialize)]
pub struct CrosstabCell {
  pub case_type: String,
  pub severity:  Severity,
  pub count:     usize,
}

/// Counts per (type, severity) pair, ordered by type then severity.
pub fn severity_crosstab(cases: &[Case]) -> Vec<CrosstabCell> {
  let mut cells: BTreeMap<(&str, Severity), usize> = BTreeMap::new();
  for case in cases {
    *cells.entry((&case.case_type, case.severity)).or_insert(0) += 1;
  }
  cells
    .into_iter()
    .map(|((case_type, severity), count)| CrosstabCell {
      case_type: case_type.into(),
      severity,
      count,
    })
    .collect()
}

/// Counts per severity within one case type. Severities with no rows are
/// absent, so an unknown type yields an empty map.
pub fn severity_counts_for_type(
  cases: &[Case],
  case_type: &str,
) -> BTreeMap<Severity, usize> {
  let mut counts = BTreeMap::new();
  for case in cases.iter().filter(|c| c.case_type == case_type) {
    *counts.entry(case.severity).or_insert(0) += 1;
  }
  counts
}

#[derive(Debug, Clone, Serialize)]
pub struct TypeAverage {
  pub case_type:      String,
  pub average_amount: f64,
}

/// Mean amount per type, over rows with a positive amount only. Types with no
/// positive-amount rows are omitted.
pub fn avg_amount_by_type(cases: &[Case]) -> Vec<TypeAverage> {
  let mut sums: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
  for case in cases.iter().filter(|c| c.amount_involved > 0.0) {
    let entry = sums.entry(&case.case_type).or_insert((0.0, 0));
    entry.0 += case.amount_involved;
    entry.1 += 1;
  }
  sums
    .into_iter()
    .map(|(case_type, (sum, n))| TypeAverage {
      case_type:      case_type.into(),
      average_amount: sum / n as f64,
    })
    .collect()
}

// ─── Per-type pattern summary ────────────────────────────────────────────────

/// Dominant characteristics of a single case type.
#[derive(Debug, Clone, Serialize)]
pub struct TypePattern {
  pub case_type:       String,
  pub case_count:      usize,
  pub average_amount:  f64,
  pub modal_severity:  Severity,
  pub modal_location:  String,
  /// Full severity distribution within the type, not just the mode.
  pub severity_counts: BTreeMap<Severity, usize>,
  pub earliest_report: Option<NaiveDate>,
  pub latest_report:   Option<NaiveDate>,
  /// Case counts per calendar month, January first.
  pub monthly_counts:  [usize; 12],
}

/// Summarise one case type. Returns `None` when the type has zero rows — the
/// modes and the mean are undefined on an empty selection, so the guard comes
/// before any statistic.
pub fn type_pattern(cases: &[Case], case_type: &str) -> Option<TypePattern> {
  let selected: Vec<&Case> =
    cases.iter().filter(|c| c.case_type == case_type).collect();
  if selected.is_empty() {
    return None;
  }

  let total: f64 = selected.iter().map(|c| c.amount_involved).sum();
  let modal_severity = mode(selected.iter().map(|c| c.severity))?;
  let modal_location = mode(selected.iter().map(|c| c.location.as_str()))?;
  let reported: Vec<NaiveDate> =
    selected.iter().filter_map(|c| c.date_reported).collect();

  let mut monthly_counts = [0usize; 12];
  for d in &reported {
    monthly_counts[d.month0() as usize] += 1;
  }

  Some(TypePattern {
    case_type:       case_type.to_owned(),
    case_count:      selected.len(),
    average_amount:  total / selected.len() as f64,
    modal_severity,
    modal_location:  modal_location.to_owned(),
    severity_counts: severity_counts_for_type(cases, case_type),
    earliest_report: reported.iter().min().copied(),
    latest_report:   reported.iter().max().copied(),
    monthly_counts,
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testutil::{case, date};

  #[test]
  fn crosstab_counts_type_severity_pairs() {
    let cases = vec![
      case("Bank Fraud", "Harare", 0.0, None, Severity::High),
      case("Bank Fraud", "Harare", 0.0, None, Severity::High),
      case("Bank Fraud", "Harare", 0.0, None, Severity::Low),
      case("Tax Evasion", "Gweru", 0.0, None, Severity::High),
    ];

    let cells = severity_crosstab(&cases);
    assert_eq!(cells.len(), 3);

    let bank_high = cells
      .iter()
      .find(|c| c.case_type == "Bank Fraud" && c.severity == Severity::High)
      .unwrap();
    assert_eq!(bank_high.count, 2);
  }

  #[test]
  fn avg_amount_ignores_zero_amount_rows() {
    let cases = vec![
      case("Bank Fraud", "Harare", 0.0, None, Severity::Low),
      case("Bank Fraud", "Harare", 200.0, None, Severity::Low),
      case("Bank Fraud", "Harare", 400.0, None, Severity::Low),
    ];
    let averages = avg_amount_by_type(&cases);
    assert_eq!(averages.len(), 1);
    assert_eq!(averages[0].average_amount, 300.0);
  }

  #[test]
  fn avg_amount_omits_types_without_positive_amounts() {
    let cases = vec![case("Identity Theft", "Bulawayo", 0.0, None, Severity::High)];
    assert!(avg_amount_by_type(&cases).is_empty());
  }

  #[test]
  fn type_pattern_summarises_a_type() {
    let cases = vec![
      case("Ponzi Scheme", "Harare", 100.0, Some(date(2023, 6, 1)), Severity::High),
      case("Ponzi Scheme", "Harare", 300.0, Some(date(2024, 1, 15)), Severity::High),
      case("Ponzi Scheme", "Gweru", 200.0, Some(date(2022, 3, 5)), Severity::Low),
      case("Bank Fraud", "Harare", 999.0, Some(date(2024, 2, 2)), Severity::Low),
    ];

    let pattern = type_pattern(&cases, "Ponzi Scheme").unwrap();
    assert_eq!(pattern.case_count, 3);
    assert_eq!(pattern.average_amount, 200.0);
    assert_eq!(pattern.modal_severity, Severity::High);
    assert_eq!(pattern.modal_location, "Harare");
    assert_eq!(pattern.earliest_report, Some(date(2022, 3, 5)));
    assert_eq!(pattern.latest_report, Some(date(2024, 1, 15)));
    assert_eq!(pattern.monthly_counts.iter().sum::<usize>(), 3);
    assert_eq!(pattern.severity_counts.get(&Severity::High), Some(&2));
    assert_eq!(pattern.severity_counts.get(&Severity::Low), Some(&1));
  }

  #[test]
  fn severity_counts_cover_only_the_selected_type() {
    let cases = vec![
      case("Bank Fraud", "Harare", 0.0, None, Severity::High),
      case("Bank Fraud", "Harare", 0.0, None, Severity::High),
      case("Bank Fraud", "Harare", 0.0, None, Severity::Critical),
      case("Tax Evasion", "Gweru", 0.0, None, Severity::Low),
    ];

    let counts = severity_counts_for_type(&cases, "Bank Fraud");
    assert_eq!(counts.get(&Severity::High), Some(&2));
    assert_eq!(counts.get(&Severity::Critical), Some(&1));
    // Severities present only on other types do not leak in.
    assert!(!counts.contains_key(&Severity::Low));
    assert_eq!(counts.values().sum::<usize>(), 3);

    assert!(severity_counts_for_type(&cases, "Money Laundering").is_empty());
  }

  #[test]
  fn type_pattern_guards_empty_selection() {
    let cases = vec![case("Bank Fraud", "Harare", 0.0, None, Severity::Low)];
    assert!(type_pattern(&cases, "Money Laundering").is_none());
    assert!(type_pattern(&[], "Bank Fraud").is_none());
  }

  #[test]
  fn mode_ties_break_to_smallest_key() {
    assert_eq!(mode(["b", "a"]), Some("a"));
    assert_eq!(mode(Vec::<&str>::new()), None);
  }
}
