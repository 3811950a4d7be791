//! JSON REST API and server state for casefile.
//!
//! Exposes an axum [`Router`] backed by any [`casefile_core::store::CaseStore`].
//! TLS and transport concerns are the caller's responsibility.

pub mod auth;
pub mod cases;
pub mod error;
pub mod reports;
pub mod view;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, post},
};
use casefile_core::store::CaseStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

pub use error::ApiError;

// ─── Configuration ───────────────────────────────────────────────────────────

fn default_host() -> String { "127.0.0.1".to_owned() }
fn default_port() -> u16 { 8470 }
fn default_store_path() -> PathBuf { PathBuf::from("casefile.db") }
fn default_seed() -> bool { true }

/// Server configuration, read from `config.toml` and `CASEFILE_*` environment
/// variables.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:           String,
  #[serde(default = "default_port")]
  pub port:           u16,
  #[serde(default = "default_store_path")]
  pub store_path:     PathBuf,
  /// When set, only this account may submit new cases through the builder.
  #[serde(default)]
  pub admin_username: Option<String>,
  /// Load the historical demo fixture into an empty store at startup.
  #[serde(default = "default_seed")]
  pub seed_demo_data: bool,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:           default_host(),
      port:           default_port(),
      store_path:     default_store_path(),
      admin_username: None,
      seed_demo_data: default_seed(),
    }
  }
}

// ─── State ───────────────────────────────────────────────────────────────────

/// Shared application state handed to every handler.
pub struct AppState<S> {
  pub store:  Arc<S>,
  pub config: Arc<ServerConfig>,
}

// Manual impl: `S` itself need not be `Clone` behind the `Arc`.
impl<S> Clone for AppState<S> {
  fn clone(&self) -> Self {
    Self { store: self.store.clone(), config: self.config.clone() }
  }
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build a fully-materialised router for `state`.
pub fn router<S>(state: AppState<S>) -> Router<()>
where
  S: CaseStore + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    // Cases
    .route("/cases", get(cases::list::<S>).post(cases::create::<S>))
    .route("/cases/types", get(cases::types::<S>))
    .route("/categories", get(cases::categories::<S>))
    // Auth
    .route("/auth/register", post(auth::register::<S>))
    .route("/auth/login", post(auth::login::<S>))
    // Reports
    .route("/reports/overview", get(reports::overview::<S>))
    .route("/reports/by-year", get(reports::by_year::<S>))
    .route("/reports/top-types", get(reports::top_types::<S>))
    .route("/reports/time-series", get(reports::time_series::<S>))
    .route("/reports/geo", get(reports::geo::<S>))
    .route("/reports/crosstab", get(reports::crosstab::<S>))
    .route("/reports/pattern", get(reports::pattern::<S>))
    .route("/reports/export", get(reports::export::<S>))
    // View routing for the UI shell
    .route("/nav", get(view::nav::<S>))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}
