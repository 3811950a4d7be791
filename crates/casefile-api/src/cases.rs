//! Handlers for `/cases` and `/categories`.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/cases` | Full list, report date descending |
//! | `GET`  | `/cases/types` | Distinct types present in stored cases |
//! | `POST` | `/cases` | Authenticated; admin-gated when configured |
//! | `GET`  | `/categories` | The seeded classification list |

use std::str::FromStr as _;

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;

use casefile_core::{
  case::{Case, NewCase, Severity},
  category::CaseCategory,
  store::CaseStore,
};

use crate::{AppState, auth::Session, error::ApiError};

// ─── Reads ───────────────────────────────────────────────────────────────────

/// `GET /cases`
pub async fn list<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<Case>>, ApiError>
where
  S: CaseStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let cases = state.store.list_cases().await.map_err(ApiError::store)?;
  Ok(Json(cases))
}

/// `GET /cases/types`
pub async fn types<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<String>>, ApiError>
where
  S: CaseStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let types =
    state.store.list_case_types().await.map_err(ApiError::store)?;
  Ok(Json(types))
}

/// `GET /categories`
pub async fn categories<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<CaseCategory>>, ApiError>
where
  S: CaseStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let categories =
    state.store.list_categories().await.map_err(ApiError::store)?;
  Ok(Json(categories))
}

// ─── Create ──────────────────────────────────────────────────────────────────

/// Case-builder submission. Severity arrives as a string and is parsed at
/// this boundary; the author is taken from the session, never the body.
#[derive(Debug, Deserialize)]
pub struct CreateCase {
  pub case_name:            String,
  pub case_type:            String,
  #[serde(default)]
  pub description:          String,
  #[serde(default)]
  pub location:             String,
  #[serde(default)]
  pub amount_involved:      f64,
  #[serde(default = "default_currency")]
  pub currency:             String,
  pub date_detected:        Option<NaiveDate>,
  pub date_reported:        Option<NaiveDate>,
  pub date_resolved:        Option<NaiveDate>,
  #[serde(default)]
  pub parties_involved:     String,
  #[serde(default)]
  pub investigation_agency: String,
  pub court_reference:      Option<String>,
  pub source_url:           Option<String>,
  pub severity:             String,
}

fn default_currency() -> String { "USD".to_owned() }

/// `POST /cases`
pub async fn create<S>(
  session: Session,
  State(state): State<AppState<S>>,
  Json(body): Json<CreateCase>,
) -> Result<impl IntoResponse, ApiError>
where
  S: CaseStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  if state.config.admin_username.is_some() && !session.is_admin {
    return Err(ApiError::Forbidden(
      "only the admin can access the case builder".to_owned(),
    ));
  }

  let severity = Severity::from_str(&body.severity)
    .map_err(|e| ApiError::Constraint(e.to_string()))?;

  let input = NewCase {
    case_name:            body.case_name,
    case_type:            body.case_type,
    description:          body.description,
    location:             body.location,
    amount_involved:      body.amount_involved,
    currency:             body.currency,
    date_detected:        body.date_detected,
    date_reported:        body.date_reported,
    date_resolved:        body.date_resolved,
    parties_involved:     body.parties_involved,
    investigation_agency: body.investigation_agency,
    court_reference:      body.court_reference,
    source_url:           body.source_url,
    created_by:           session.username,
    severity,
  };

  input.validate().map_err(|e| ApiError::Constraint(e.to_string()))?;

  let case = state.store.add_case(input).await.map_err(ApiError::store)?;
  tracing::info!(case_id = case.case_id, "case added");
  Ok((StatusCode::CREATED, Json(case)))
}
