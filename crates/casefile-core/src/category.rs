//! Case categories — the fixed classification lookup table.
//!
//! Categories are seeded once at store initialisation and read-only
//! thereafter. Note that [`CaseStore::list_case_types`] reports the distinct
//! types actually present on stored cases, which can omit seeded categories
//! that have never been used.
//!
//! [`CaseStore::list_case_types`]: crate::store::CaseStore::list_case_types

use serde::{Deserialize, Serialize};

/// A classification label for cases (e.g. "Ponzi Scheme").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseCategory {
  pub category_id: i64,
  pub name:        String,
  pub description: String,
}
