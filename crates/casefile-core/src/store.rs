//! The `CaseStore` trait.
//!
//! The trait is implemented by storage backends (e.g.
//! `casefile-store-sqlite`). Higher layers (`casefile-api`,
//! `casefile-report` consumers) depend on this abstraction, not on any
//! concrete backend.

use std::future::Future;

use crate::{
  case::{Case, NewCase},
  category::CaseCategory,
};

/// Abstraction over a casefile storage backend.
///
/// The store is the sole mutator of persisted rows. Every operation is a
/// single synchronous statement at the storage layer; there are no
/// multi-statement transactions to roll back.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait CaseStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Cases ─────────────────────────────────────────────────────────────

  /// All cases, ordered by report date descending.
  ///
  /// Unbounded result set — there is no pagination. Rows without a report
  /// date sort last under the descending order.
  fn list_cases(
    &self,
  ) -> impl Future<Output = Result<Vec<Case>, Self::Error>> + Send + '_;

  /// Distinct `case_type` values present in stored cases.
  ///
  /// This is not the category seed list: a seeded category with no cases
  /// does not appear here.
  fn list_case_types(
    &self,
  ) -> impl Future<Output = Result<Vec<String>, Self::Error>> + Send + '_;

  /// Insert one case. The id, timestamps and default status are assigned by
  /// the store; the persisted row is returned.
  ///
  /// Constraint violations (blank name, negative amount, a severity outside
  /// the four allowed values at the SQL layer) fail the single insert and
  /// leave the table untouched.
  fn add_case(
    &self,
    input: NewCase,
  ) -> impl Future<Output = Result<Case, Self::Error>> + Send + '_;

  /// Number of stored cases.
  fn case_count(
    &self,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;

  // ── Categories ────────────────────────────────────────────────────────

  /// The seeded category lookup table.
  fn list_categories(
    &self,
  ) -> impl Future<Output = Result<Vec<CaseCategory>, Self::Error>> + Send + '_;

  // ── Users ─────────────────────────────────────────────────────────────

  /// Store a new user with an already-hashed password.
  ///
  /// Returns `false` (not an error) if the username is taken.
  fn create_user(
    &self,
    username: String,
    password_hash: String,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// The stored password hash for `username`, or `None` if unregistered.
  fn password_hash(
    &self,
    username: String,
  ) -> impl Future<Output = Result<Option<String>, Self::Error>> + Send + '_;
}
