//! Handlers for `/reports/*` — each one reads a fresh case snapshot from the
//! store and runs the pure aggregations from `casefile-report` over it.

use std::{collections::BTreeMap, str::FromStr as _};

use axum::{
  Json,
  extract::{Query, State},
  http::header,
  response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use casefile_core::{
  case::{Case, Severity},
  store::CaseStore,
};
use casefile_report::{
  ReportFilter, export,
  export::ExportFormat,
  geo as geo_report, overview as overview_report, pattern as pattern_report,
  timeseries,
};

use crate::{AppState, error::ApiError};

async fn snapshot<S>(state: &AppState<S>) -> Result<Vec<Case>, ApiError>
where
  S: CaseStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  state.store.list_cases().await.map_err(ApiError::store)
}

/// Wrapper for aggregations that are undefined over an empty selection: the
/// caller gets an explicit no-data outcome, never a division by zero.
#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ReportOutcome<T> {
  Ok { data: T },
  NoData,
}

impl<T> From<Option<T>> for ReportOutcome<T> {
  fn from(value: Option<T>) -> Self {
    match value {
      Some(data) => ReportOutcome::Ok { data },
      None => ReportOutcome::NoData,
    }
  }
}

// ─── Dashboard ───────────────────────────────────────────────────────────────

/// `GET /reports/overview`
pub async fn overview<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<ReportOutcome<overview_report::Overview>>, ApiError>
where
  S: CaseStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let cases = snapshot(&state).await?;
  Ok(Json(overview_report::overview(&cases).into()))
}

#[derive(Debug, Serialize)]
pub struct YearBuckets {
  pub counts:  BTreeMap<i32, usize>,
  pub amounts: BTreeMap<i32, f64>,
}

/// `GET /reports/by-year`
pub async fn by_year<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<YearBuckets>, ApiError>
where
  S: CaseStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let cases = snapshot(&state).await?;
  Ok(Json(YearBuckets {
    counts:  overview_report::cases_by_year(&cases),
    amounts: overview_report::amount_by_year(&cases),
  }))
}

#[derive(Debug, Serialize)]
pub struct TopTypes {
  pub by_count:  Vec<overview_report::TypeCount>,
  pub by_amount: Vec<overview_report::TypeAmount>,
}

/// `GET /reports/top-types`
pub async fn top_types<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<TopTypes>, ApiError>
where
  S: CaseStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let cases = snapshot(&state).await?;
  Ok(Json(TopTypes {
    by_count:  overview_report::top_types_by_count(&cases),
    by_amount: overview_report::top_types_by_amount(&cases),
  }))
}

// ─── Analysis ────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct TimeSeriesParams {
  #[serde(default)]
  pub period: timeseries::Period,
}

/// `GET /reports/time-series?period=monthly|quarterly|yearly`
pub async fn time_series<S>(
  State(state): State<AppState<S>>,
  Query(params): Query<TimeSeriesParams>,
) -> Result<Json<Vec<timeseries::SeriesPoint>>, ApiError>
where
  S: CaseStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let cases = snapshot(&state).await?;
  Ok(Json(timeseries::time_series(&cases, params.period)))
}

#[derive(Debug, Serialize)]
pub struct GeoReport {
  pub points:    Vec<geo_report::GeoPoint>,
  pub locations: Vec<geo_report::LocationCount>,
}

/// `GET /reports/geo`
pub async fn geo<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<GeoReport>, ApiError>
where
  S: CaseStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let cases = snapshot(&state).await?;
  Ok(Json(GeoReport {
    points:    geo_report::geo_points(&cases),
    locations: geo_report::location_counts(&cases),
  }))
}

#[derive(Debug, Serialize)]
pub struct Crosstab {
  pub cells:       Vec<pattern_report::CrosstabCell>,
  pub averages:    Vec<pattern_report::TypeAverage>,
  /// The untruncated per-type distribution, unlike the top-ten rankings.
  pub type_counts: Vec<overview_report::TypeCount>,
}

/// `GET /reports/crosstab`
pub async fn crosstab<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Crosstab>, ApiError>
where
  S: CaseStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let cases = snapshot(&state).await?;
  Ok(Json(Crosstab {
    cells:       pattern_report::severity_crosstab(&cases),
    averages:    pattern_report::avg_amount_by_type(&cases),
    type_counts: overview_report::type_counts(&cases),
  }))
}

#[derive(Debug, Deserialize)]
pub struct PatternParams {
  pub case_type: String,
}

/// `GET /reports/pattern?case_type=…` — no-data outcome for an unknown type.
pub async fn pattern<S>(
  State(state): State<AppState<S>>,
  Query(params): Query<PatternParams>,
) -> Result<Json<ReportOutcome<pattern_report::TypePattern>>, ApiError>
where
  S: CaseStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let cases = snapshot(&state).await?;
  Ok(Json(pattern_report::type_pattern(&cases, &params.case_type).into()))
}

// ─── Export ──────────────────────────────────────────────────────────────────

/// Filter dimensions arrive as comma-separated lists; an absent parameter
/// leaves that dimension unrestricted.
#[derive(Debug, Default, Deserialize)]
pub struct ExportParams {
  #[serde(default)]
  pub format:     ExportFormat,
  pub types:      Option<String>,
  pub severities: Option<String>,
  pub years:      Option<String>,
}

fn parse_filter(params: &ExportParams) -> Result<ReportFilter, ApiError> {
  let split = |s: &str| -> Vec<String> {
    s.split(',')
      .map(str::trim)
      .filter(|p| !p.is_empty())
      .map(str::to_owned)
      .collect()
  };

  let types = params.types.as_deref().map(&split).unwrap_or_default();

  let severities = params
    .severities
    .as_deref()
    .map(&split)
    .unwrap_or_default()
    .into_iter()
    .map(|s| {
      Severity::from_str(&s).map_err(|e| ApiError::BadRequest(e.to_string()))
    })
    .collect::<Result<Vec<_>, _>>()?;

  let years = params
    .years
    .as_deref()
    .map(&split)
    .unwrap_or_default()
    .into_iter()
    .map(|y| {
      y.parse::<i32>()
        .map_err(|_| ApiError::BadRequest(format!("invalid year: {y:?}")))
    })
    .collect::<Result<Vec<_>, _>>()?;

  Ok(ReportFilter { types, severities, years })
}

/// `GET /reports/export?format=csv|xlsx&types=…&severities=…&years=…`
pub async fn export<S>(
  State(state): State<AppState<S>>,
  Query(params): Query<ExportParams>,
) -> Result<impl IntoResponse, ApiError>
where
  S: CaseStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let filter = parse_filter(&params)?;
  let cases = snapshot(&state).await?;
  let selected = filter.apply(&cases);

  let bytes = match params.format {
    ExportFormat::Csv => export::to_csv(&selected),
    ExportFormat::Xlsx => export::to_xlsx(&selected),
  }
  .map_err(|e| ApiError::Internal(e.to_string()))?;

  tracing::info!(
    rows = selected.len(),
    format = ?params.format,
    "report exported"
  );

  Ok((
    [
      (header::CONTENT_TYPE, params.format.content_type().to_owned()),
      (
        header::CONTENT_DISPOSITION,
        format!("attachment; filename=\"{}\"", params.format.file_name()),
      ),
    ],
    bytes,
  ))
}
