//! Registration, credential verification and the per-request session.
//!
//! Passwords are stored as argon2id PHC strings with a per-user random salt.
//! Requests authenticate with HTTP Basic against the user table; a successful
//! check yields a [`Session`] scoped to that one request — there is no
//! ambient login state on the server.

use argon2::{
  Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
  password_hash::SaltString,
};
use axum::{
  Json,
  extract::{FromRequestParts, State},
  http::{HeaderMap, request::Parts},
};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as B64;
use rand_core::OsRng;
use serde::{Deserialize, Serialize};

use casefile_core::store::CaseStore;

use crate::{AppState, error::ApiError};

// ─── Password hashing ────────────────────────────────────────────────────────

/// Hash a password into an argon2id PHC string with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
  let salt = SaltString::generate(&mut OsRng);
  Argon2::default()
    .hash_password(password.as_bytes(), &salt)
    .map(|h| h.to_string())
    .map_err(|e| ApiError::Internal(format!("argon2 error: {e}")))
}

fn verify_hash(password: &str, phc: &str) -> bool {
  let Ok(parsed) = PasswordHash::new(phc) else {
    return false;
  };
  Argon2::default()
    .verify_password(password.as_bytes(), &parsed)
    .is_ok()
}

// ─── Auth service ────────────────────────────────────────────────────────────

/// Create an account. `false` on an empty username or a taken one — the two
/// cases are not distinguished to the caller.
pub async fn register_user<S>(
  store: &S,
  username: &str,
  password: &str,
) -> Result<bool, ApiError>
where
  S: CaseStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  if username.trim().is_empty() {
    return Ok(false);
  }
  let hash = hash_password(password)?;
  store
    .create_user(username.to_owned(), hash)
    .await
    .map_err(ApiError::store)
}

/// `true` only if `username` is registered and `password` verifies against
/// its stored hash. Unknown usernames and bad passwords are both plain
/// `false`.
pub async fn verify_credentials<S>(
  store: &S,
  username: &str,
  password: &str,
) -> Result<bool, ApiError>
where
  S: CaseStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let stored = store
    .password_hash(username.to_owned())
    .await
    .map_err(ApiError::store)?;
  Ok(match stored {
    Some(phc) => verify_hash(password, &phc),
    None => false,
  })
}

// ─── Session ─────────────────────────────────────────────────────────────────

/// The request-scoped session: who made this request, and whether they are
/// the configured admin. Built fresh for every request from the Basic-auth
/// header; never cached server-side.
#[derive(Debug, Clone)]
pub struct Session {
  pub username: String,
  pub is_admin: bool,
}

fn basic_credentials(headers: &HeaderMap) -> Option<(String, String)> {
  let header_val = headers
    .get(axum::http::header::AUTHORIZATION)
    .and_then(|v| v.to_str().ok())?;
  let encoded = header_val.strip_prefix("Basic ")?;
  let decoded = B64.decode(encoded).ok()?;
  let creds = String::from_utf8(decoded).ok()?;
  let (username, password) = creds.split_once(':')?;
  Some((username.to_owned(), password.to_owned()))
}

/// Resolve the session for a request, or `None` when the request carries no
/// valid credentials. Used by handlers that serve both states.
pub async fn session_from_headers<S>(
  headers: &HeaderMap,
  state: &AppState<S>,
) -> Result<Option<Session>, ApiError>
where
  S: CaseStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let Some((username, password)) = basic_credentials(headers) else {
    return Ok(None);
  };
  if !verify_credentials(state.store.as_ref(), &username, &password).await? {
    return Ok(None);
  }
  let is_admin =
    state.config.admin_username.as_deref() == Some(username.as_str());
  Ok(Some(Session { username, is_admin }))
}

impl<S> FromRequestParts<AppState<S>> for Session
where
  S: CaseStore + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &AppState<S>,
  ) -> Result<Self, Self::Rejection> {
    session_from_headers(&parts.headers, state)
      .await?
      .ok_or(ApiError::Unauthorized)
  }
}

// ─── Handlers ────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct Credentials {
  pub username: String,
  pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthOutcome {
  pub ok: bool,
}

/// `POST /auth/register` — body: `{"username": …, "password": …}`
pub async fn register<S>(
  State(state): State<AppState<S>>,
  Json(body): Json<Credentials>,
) -> Result<Json<AuthOutcome>, ApiError>
where
  S: CaseStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let ok =
    register_user(state.store.as_ref(), &body.username, &body.password)
      .await?;
  if ok {
    tracing::info!(username = %body.username, "account registered");
  }
  Ok(Json(AuthOutcome { ok }))
}

/// `POST /auth/login` — same body; a pure credential check.
pub async fn login<S>(
  State(state): State<AppState<S>>,
  Json(body): Json<Credentials>,
) -> Result<Json<AuthOutcome>, ApiError>
where
  S: CaseStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let ok =
    verify_credentials(state.store.as_ref(), &body.username, &body.password)
      .await?;
  Ok(Json(AuthOutcome { ok }))
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use axum::http::{Request, header};
  use casefile_store_sqlite::SqliteStore;

  use super::*;
  use crate::ServerConfig;

  async fn make_state(admin: Option<&str>) -> AppState<SqliteStore> {
    let store = SqliteStore::open_in_memory().await.unwrap();
    AppState {
      store:  Arc::new(store),
      config: Arc::new(ServerConfig {
        admin_username: admin.map(str::to_owned),
        ..ServerConfig::default()
      }),
    }
  }

  fn basic(user: &str, pass: &str) -> String {
    format!("Basic {}", B64.encode(format!("{user}:{pass}")))
  }

  async fn extract(
    req: Request<axum::body::Body>,
    state: &AppState<SqliteStore>,
  ) -> Result<Session, ApiError> {
    let (mut parts, _) = req.into_parts();
    Session::from_request_parts(&mut parts, state).await
  }

  #[tokio::test]
  async fn register_then_authenticate() {
    let state = make_state(None).await;
    assert!(
      register_user(state.store.as_ref(), "alice", "secret")
        .await
        .unwrap()
    );
    assert!(
      verify_credentials(state.store.as_ref(), "alice", "secret")
        .await
        .unwrap()
    );
    assert!(
      !verify_credentials(state.store.as_ref(), "alice", "wrong")
        .await
        .unwrap()
    );
  }

  #[tokio::test]
  async fn duplicate_registration_fails_second_time() {
    let state = make_state(None).await;
    assert!(
      register_user(state.store.as_ref(), "bob", "one").await.unwrap()
    );
    // Same username, different password.
    assert!(
      !register_user(state.store.as_ref(), "bob", "two").await.unwrap()
    );
    // The first password still wins.
    assert!(
      verify_credentials(state.store.as_ref(), "bob", "one")
        .await
        .unwrap()
    );
  }

  #[tokio::test]
  async fn unknown_username_never_authenticates() {
    let state = make_state(None).await;
    assert!(
      !verify_credentials(state.store.as_ref(), "ghost", "anything")
        .await
        .unwrap()
    );
  }

  #[tokio::test]
  async fn empty_username_is_refused() {
    let state = make_state(None).await;
    assert!(!register_user(state.store.as_ref(), "  ", "pw").await.unwrap());
  }

  #[tokio::test]
  async fn session_extractor_accepts_valid_credentials() {
    let state = make_state(Some("alice")).await;
    register_user(state.store.as_ref(), "alice", "secret")
      .await
      .unwrap();

    let req = Request::builder()
      .header(header::AUTHORIZATION, basic("alice", "secret"))
      .body(axum::body::Body::empty())
      .unwrap();
    let session = extract(req, &state).await.unwrap();
    assert_eq!(session.username, "alice");
    assert!(session.is_admin);
  }

  #[tokio::test]
  async fn session_extractor_rejects_wrong_password() {
    let state = make_state(None).await;
    register_user(state.store.as_ref(), "alice", "secret")
      .await
      .unwrap();

    let req = Request::builder()
      .header(header::AUTHORIZATION, basic("alice", "wrong"))
      .body(axum::body::Body::empty())
      .unwrap();
    assert!(matches!(
      extract(req, &state).await,
      Err(ApiError::Unauthorized)
    ));
  }

  #[tokio::test]
  async fn session_extractor_rejects_missing_header() {
    let state = make_state(None).await;
    let req = Request::builder().body(axum::body::Body::empty()).unwrap();
    assert!(matches!(
      extract(req, &state).await,
      Err(ApiError::Unauthorized)
    ));
  }

  #[tokio::test]
  async fn non_admin_session_is_not_admin() {
    let state = make_state(Some("root")).await;
    register_user(state.store.as_ref(), "carol", "pw").await.unwrap();

    let req = Request::builder()
      .header(header::AUTHORIZATION, basic("carol", "pw"))
      .body(axum::body::Body::empty())
      .unwrap();
    let session = extract(req, &state).await.unwrap();
    assert!(!session.is_admin);
  }
}
