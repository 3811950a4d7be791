//! Error types for `casefile-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid severity: {0:?} (expected Low, Medium, High or Critical)")]
  InvalidSeverity(String),

  #[error("case name must not be empty")]
  EmptyCaseName,

  #[error("amount involved must not be negative: {0}")]
  NegativeAmount(f64),

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
