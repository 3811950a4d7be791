//! User — the account record backing username/password gating.
//!
//! Users are created via registration and never updated or deleted. The
//! stored hash is an argon2 PHC string (salted, iterated); the store never
//! sees a plaintext password.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered account, keyed by username.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
  pub username:      String,
  /// PHC string produced by argon2, e.g. `$argon2id$v=19$…`
  pub password_hash: String,
  pub created_at:    DateTime<Utc>,
}
