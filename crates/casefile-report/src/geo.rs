//! Geographic binning for the map view.
//!
//! A small fixed set of known location names maps to fixed coordinate pairs;
//! every unrecognised location falls back to one shared default point (the
//! centre of Zimbabwe). Distinct real-world locations can therefore collapse
//! onto the same map point — this is a deliberate approximation, not a
//! geocoder.

use std::collections::BTreeMap;

use casefile_core::case::{Case, Severity};
use chrono::NaiveDate;
use serde::Serialize;

/// Fallback coordinate for locations not in the known set.
pub const DEFAULT_COORDINATES: (f64, f64) = (-19.0154, 29.1549);

/// Coordinates for `location`, falling back to [`DEFAULT_COORDINATES`].
pub fn coordinates(location: &str) -> (f64, f64) {
  match location {
    "Harare" => (-17.8292, 31.0522),
    "Bulawayo" => (-20.1325, 28.6265),
    "Chinhoyi" => (-17.3667, 30.2000),
    "Gweru" => (-19.4500, 29.8167),
    "Beitbridge" => (-22.2167, 30.0000),
    "Nationwide" => DEFAULT_COORDINATES,
    _ => DEFAULT_COORDINATES,
  }
}

/// One plottable case for the map view.
#[derive(Debug, Clone, Serialize)]
pub struct GeoPoint {
  pub case_id:         i64,
  pub case_name:       String,
  pub case_type:       String,
  pub severity:        Severity,
  pub amount_involved: f64,
  pub date_reported:   Option<NaiveDate>,
  pub latitude:        f64,
  pub longitude:       f64,
}

/// Every case with its binned coordinates attached.
pub fn geo_points(cases: &[Case]) -> Vec<GeoPoint> {
  cases
    .iter()
    .map(|c| {
      let (latitude, longitude) = coordinates(&c.location);
      GeoPoint {
        case_id: c.case_id,
        case_name: c.case_name.clone(),
        case_type: c.case_type.clone(),
        severity: c.severity,
        amount_involved: c.amount_involved,
        date_reported: c.date_reported,
        latitude,
        longitude,
      }
    })
    .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct LocationCount {
  pub location: String,
  pub count:    usize,
}

/// Case counts per location name, descending by count.
pub fn location_counts(cases: &[Case]) -> Vec<LocationCount> {
  let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
  for case in cases {
    *counts.entry(&case.location).or_insert(0) += 1;
  }

  let mut ranked: Vec<LocationCount> = counts
    .into_iter()
    .map(|(location, count)| LocationCount { location: location.into(), count })
    .collect();
  ranked.sort_by(|a, b| b.count.cmp(&a.count));
  ranked
}

#[cfg(test)]
mod tests {
  use casefile_core::case::Severity;

  use super::*;
  use crate::testutil::case;

  #[test]
  fn known_locations_have_distinct_coordinates() {
    assert_ne!(coordinates("Harare"), coordinates("Bulawayo"));
    assert_ne!(coordinates("Gweru"), DEFAULT_COORDINATES);
  }

  #[test]
  fn unknown_locations_collapse_to_the_default_point() {
    assert_eq!(coordinates("Mutare"), DEFAULT_COORDINATES);
    assert_eq!(coordinates("Lisbon"), coordinates("Mutare"));
    assert_eq!(coordinates(""), DEFAULT_COORDINATES);
  }

  #[test]
  fn geo_points_carry_binned_coordinates() {
    let cases = vec![
      case("Bank Fraud", "Harare", 10.0, None, Severity::Low),
      case("Bank Fraud", "Elsewhere", 10.0, None, Severity::Low),
    ];
    let points = geo_points(&cases);
    assert_eq!(points.len(), 2);
    assert_eq!((points[0].latitude, points[0].longitude), (-17.8292, 31.0522));
    assert_eq!(
      (points[1].latitude, points[1].longitude),
      DEFAULT_COORDINATES
    );
  }

  #[test]
  fn location_counts_are_descending() {
    let cases = vec![
      case("A", "Harare", 0.0, None, Severity::Low),
      case("A", "Harare", 0.0, None, Severity::Low),
      case("A", "Gweru", 0.0, None, Severity::Low),
    ];
    let counts = location_counts(&cases);
    assert_eq!(counts[0].location, "Harare");
    assert_eq!(counts[0].count, 2);
  }
}
