//! View routing for the UI shell.
//!
//! The original dashboard drove navigation off mutable session state. Here it
//! is a closed enum of views plus one total, pure function from (auth state,
//! requested view) to the view actually shown — who you are decides what you
//! see, nothing else does.

use axum::{
  Json,
  extract::{Query, State},
  http::HeaderMap,
};
use serde::{Deserialize, Serialize};

use casefile_core::store::CaseStore;

use crate::{AppState, auth, error::ApiError};

/// Every page the UI shell can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
  Login,
  #[default]
  LaunchPad,
  SummaryDashboard,
  CaseBuilder,
  CaseAnalysis,
  Reports,
}

/// Who is asking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthState {
  Anonymous,
  User,
  Admin,
}

/// Total routing function.
///
/// - Anyone anonymous lands on the login page, whatever they asked for.
/// - Asking for the login page while signed in goes to the launch pad.
/// - The case builder is admin-only; others are bounced to the launch pad.
pub fn route(auth: AuthState, requested: View) -> View {
  match (auth, requested) {
    (AuthState::Anonymous, _) => View::Login,
    (_, View::Login) => View::LaunchPad,
    (AuthState::User, View::CaseBuilder) => View::LaunchPad,
    (_, view) => view,
  }
}

// ─── Handler ─────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct NavParams {
  #[serde(default)]
  pub view: View,
}

#[derive(Debug, Serialize)]
pub struct NavOutcome {
  pub auth: AuthState,
  pub view: View,
}

/// `GET /nav?view=…` — resolves what the shell should render. Credentials
/// are optional here; a missing or invalid Basic header means anonymous.
pub async fn nav<S>(
  headers: HeaderMap,
  State(state): State<AppState<S>>,
  Query(params): Query<NavParams>,
) -> Result<Json<NavOutcome>, ApiError>
where
  S: CaseStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let auth = match auth::session_from_headers(&headers, &state).await? {
    Some(session) if session.is_admin => AuthState::Admin,
    Some(_) => AuthState::User,
    None => AuthState::Anonymous,
  };
  Ok(Json(NavOutcome { auth, view: route(auth, params.view) }))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn anonymous_always_routes_to_login() {
    for view in [
      View::Login,
      View::LaunchPad,
      View::SummaryDashboard,
      View::CaseBuilder,
      View::CaseAnalysis,
      View::Reports,
    ] {
      assert_eq!(route(AuthState::Anonymous, view), View::Login);
    }
  }

  #[test]
  fn signed_in_users_skip_the_login_page() {
    assert_eq!(route(AuthState::User, View::Login), View::LaunchPad);
    assert_eq!(route(AuthState::Admin, View::Login), View::LaunchPad);
  }

  #[test]
  fn case_builder_is_admin_only() {
    assert_eq!(route(AuthState::User, View::CaseBuilder), View::LaunchPad);
    assert_eq!(route(AuthState::Admin, View::CaseBuilder), View::CaseBuilder);
  }

  #[test]
  fn other_views_pass_through() {
    assert_eq!(route(AuthState::User, View::Reports), View::Reports);
    assert_eq!(
      route(AuthState::User, View::CaseAnalysis),
      View::CaseAnalysis
    );
    assert_eq!(
      route(AuthState::Admin, View::SummaryDashboard),
      View::SummaryDashboard
    );
  }
}
