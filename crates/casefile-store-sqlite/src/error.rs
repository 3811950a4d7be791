//! Error type for `casefile-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] casefile_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),
}

impl Error {
  /// Whether this error is a constraint violation on a single write — the
  /// caller-reportable "the insert did not apply" case, as opposed to the
  /// storage layer being unavailable.
  pub fn is_constraint_violation(&self) -> bool {
    match self {
      Error::Core(_) => true,
      Error::Database(tokio_rusqlite::Error::Rusqlite(
        rusqlite::Error::SqliteFailure(e, _),
      )) => e.code == rusqlite::ErrorCode::ConstraintViolation,
      _ => false,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
