//! Dashboard overview aggregations — headline metrics, year buckets and the
//! top-ten type rankings.

use std::collections::BTreeMap;

use casefile_core::case::Case;
use serde::Serialize;

/// Rankings are truncated to this many entries.
pub const TOP_N: usize = 10;

// ─── Headline metrics ────────────────────────────────────────────────────────

/// The three headline dashboard metrics.
#[derive(Debug, Clone, Serialize)]
pub struct Overview {
  pub total_cases:    usize,
  pub total_amount:   f64,
  pub average_amount: f64,
}

/// `None` for an empty case set — the caller renders an explicit "no data"
/// state instead of a zero-division result.
pub fn overview(cases: &[Case]) -> Option<Overview> {
  if cases.is_empty() {
    return None;
  }
  let total_amount: f64 = cases.iter().map(|c| c.amount_involved).sum();
  Some(Overview {
    total_cases: cases.len(),
    total_amount,
    average_amount: total_amount / cases.len() as f64,
  })
}

// ─── Year buckets ────────────────────────────────────────────────────────────

/// Case counts keyed by calendar year of the report date, ascending.
///
/// Rows without a parseable report date have no year and are excluded from
/// the buckets entirely.
pub fn cases_by_year(cases: &[Case]) -> BTreeMap<i32, usize> {
  let mut buckets = BTreeMap::new();
  for year in cases.iter().filter_map(Case::report_year) {
    *buckets.entry(year).or_insert(0) += 1;
  }
  buckets
}

/// Summed amounts per report year, over rows with a positive amount.
pub fn amount_by_year(cases: &[Case]) -> BTreeMap<i32, f64> {
  let mut buckets = BTreeMap::new();
  for case in cases.iter().filter(|c| c.amount_involved > 0.0) {
    if let Some(year) = case.report_year() {
      *buckets.entry(year).or_insert(0.0) += case.amount_involved;
    }
  }
  buckets
}

// ─── Type rankings ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct TypeCount {
  pub case_type: String,
  pub count:     usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TypeAmount {
  pub case_type:    String,
  pub total_amount: f64,
}

/// Every case type with its count, descending — the full distribution, no
/// truncation. Feeds the distribution chart, which shows all types however
/// many there are.
pub fn type_counts(cases: &[Case]) -> Vec<TypeCount> {
  let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
  for case in cases {
    *counts.entry(&case.case_type).or_insert(0) += 1;
  }

  let mut ranked: Vec<TypeCount> = counts
    .into_iter()
    .map(|(case_type, count)| TypeCount { case_type: case_type.into(), count })
    .collect();
  ranked.sort_by(|a, b| b.count.cmp(&a.count));
  ranked
}

/// The ten most frequent case types, descending by count.
pub fn top_types_by_count(cases: &[Case]) -> Vec<TypeCount> {
  let mut ranked = type_counts(cases);
  ranked.truncate(TOP_N);
  ranked
}

/// The ten highest-impact case types, descending by summed amount.
pub fn top_types_by_amount(cases: &[Case]) -> Vec<TypeAmount> {
  let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
  for case in cases {
    *totals.entry(&case.case_type).or_insert(0.0) += case.amount_involved;
  }

  let mut ranked: Vec<TypeAmount> = totals
    .into_iter()
    .map(|(case_type, total_amount)| TypeAmount {
      case_type: case_type.into(),
      total_amount,
    })
    .collect();
  ranked.sort_by(|a, b| b.total_amount.total_cmp(&a.total_amount));
  ranked.truncate(TOP_N);
  ranked
}
