//! [`SqliteStore`] — the SQLite implementation of [`CaseStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;

use casefile_core::{
  case::{Case, NewCase},
  category::CaseCategory,
  store::CaseStore,
};

use crate::{
  encode::{encode_date, encode_dt, RawCase},
  schema::SCHEMA,
  seed::{SEED_CASES, SEED_CATEGORIES},
  Error, Result,
};

const CASE_COLUMNS: &str = "case_id, case_name, case_type, status, \
   description, location, amount_involved, currency, date_detected, \
   date_reported, date_resolved, parties_involved, investigation_agency, \
   court_reference, source_url, created_by, created_at, updated_at, severity";

fn read_raw_case(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawCase> {
  Ok(RawCase {
    case_id:              row.get(0)?,
    case_name:            row.get(1)?,
    case_type:            row.get(2)?,
    status:               row.get(3)?,
    description:          row.get(4)?,
    location:             row.get(5)?,
    amount_involved:      row.get(6)?,
    currency:             row.get(7)?,
    date_detected:        row.get(8)?,
    date_reported:        row.get(9)?,
    date_resolved:        row.get(10)?,
    parties_involved:     row.get(11)?,
    investigation_agency: row.get(12)?,
    court_reference:      row.get(13)?,
    source_url:           row.get(14)?,
    created_by:           row.get(15)?,
    created_at:           row.get(16)?,
    updated_at:           row.get(17)?,
    severity:             row.get(18)?,
  })
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A casefile store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  pub(crate) conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Populate the category table and the historical case fixture, once each,
  /// and only when the respective table is empty. A no-op on a populated
  /// store.
  pub async fn seed_if_empty(&self) -> Result<()> {
    let now_str = encode_dt(Utc::now());

    let (categories_seeded, cases_seeded) = self
      .conn
      .call(move |conn| {
        let category_count: i64 =
          conn.query_row("SELECT COUNT(*) FROM case_categories", [], |r| {
            r.get(0)
          })?;

        let mut categories_seeded = 0usize;
        if category_count == 0 {
          let mut stmt = conn.prepare(
            "INSERT INTO case_categories (category_name, description)
             VALUES (?1, ?2)",
          )?;
          for (name, description) in SEED_CATEGORIES {
            stmt.execute(rusqlite::params![name, description])?;
            categories_seeded += 1;
          }
        }

        let case_count: i64 =
          conn.query_row("SELECT COUNT(*) FROM cases", [], |r| r.get(0))?;

        let mut cases_seeded = 0usize;
        if case_count == 0 {
          let mut stmt = conn.prepare(
            "INSERT INTO cases
               (case_name, case_type, description, location, amount_involved,
                currency, date_detected, date_reported, date_resolved,
                parties_involved, investigation_agency, court_reference,
                source_url, created_by, created_at, updated_at, severity)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13,
                     ?14, ?15, ?16, ?17)",
          )?;
          for case in SEED_CASES {
            stmt.execute(rusqlite::params![
              case.name,
              case.case_type,
              case.description,
              case.location,
              case.amount,
              case.currency,
              case.detected,
              case.reported,
              case.resolved,
              case.parties,
              case.agency,
              case.court_ref,
              case.source_url,
              "admin",
              now_str,
              now_str,
              case.severity,
            ])?;
            cases_seeded += 1;
          }
        }

        Ok((categories_seeded, cases_seeded))
      })
      .await?;

    if categories_seeded > 0 || cases_seeded > 0 {
      tracing::info!(categories_seeded, cases_seeded, "seeded empty store");
    }

    Ok(())
  }
}

// ─── CaseStore impl ──────────────────────────────────────────────────────────

impl CaseStore for SqliteStore {
  type Error = Error;

  // ── Cases ─────────────────────────────────────────────────────────────────

  async fn list_cases(&self) -> Result<Vec<Case>> {
    let raws: Vec<RawCase> = self
      .conn
      .call(|conn| {
        // SQLite treats NULL as smaller than any value, so rows without a
        // report date land at the end under DESC.
        let mut stmt = conn.prepare(&format!(
          "SELECT {CASE_COLUMNS} FROM cases ORDER BY date_reported DESC"
        ))?;
        let rows = stmt
          .query_map([], read_raw_case)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawCase::into_case).collect()
  }

  async fn list_case_types(&self) -> Result<Vec<String>> {
    let types = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT DISTINCT case_type FROM cases ORDER BY case_type",
        )?;
        let rows = stmt
          .query_map([], |row| row.get(0))?
          .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(types)
  }

  async fn add_case(&self, input: NewCase) -> Result<Case> {
    input.validate().map_err(Error::Core)?;

    let now = Utc::now();
    let now_str = encode_dt(now);
    let row = input.clone();

    let case_id: i64 = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO cases
             (case_name, case_type, description, location, amount_involved,
              currency, date_detected, date_reported, date_resolved,
              parties_involved, investigation_agency, court_reference,
              source_url, created_by, created_at, updated_at, severity)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13,
                   ?14, ?15, ?16, ?17)",
          rusqlite::params![
            row.case_name,
            row.case_type,
            row.description,
            row.location,
            row.amount_involved,
            row.currency,
            row.date_detected.map(encode_date),
            row.date_reported.map(encode_date),
            row.date_resolved.map(encode_date),
            row.parties_involved,
            row.investigation_agency,
            row.court_reference,
            row.source_url,
            row.created_by,
            now_str,
            now_str,
            row.severity.as_str(),
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(Case {
      case_id,
      case_name:            input.case_name,
      case_type:            input.case_type,
      status:               "Open".to_owned(),
      description:          input.description,
      location:             input.location,
      amount_involved:      input.amount_involved,
      currency:             input.currency,
      date_detected:        input.date_detected,
      date_reported:        input.date_reported,
      date_resolved:        input.date_resolved,
      parties_involved:     input.parties_involved,
      investigation_agency: input.investigation_agency,
      court_reference:      input.court_reference,
      source_url:           input.source_url,
      created_by:           input.created_by,
      created_at:           now,
      updated_at:           now,
      severity:             input.severity,
    })
  }

  async fn case_count(&self) -> Result<u64> {
    let count: i64 = self
      .conn
      .call(|conn| {
        Ok(conn.query_row("SELECT COUNT(*) FROM cases", [], |r| r.get(0))?)
      })
      .await?;
    Ok(count as u64)
  }

  // ── Categories ────────────────────────────────────────────────────────────

  async fn list_categories(&self) -> Result<Vec<CaseCategory>> {
    let categories = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT category_id, category_name, description
           FROM case_categories ORDER BY category_id",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(CaseCategory {
              category_id: row.get(0)?,
              name:        row.get(1)?,
              description: row.get(2)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(categories)
  }

  // ── Users ─────────────────────────────────────────────────────────────────

  async fn create_user(
    &self,
    username: String,
    password_hash: String,
  ) -> Result<bool> {
    let now_str = encode_dt(Utc::now());

    let created = self
      .conn
      .call(move |conn| {
        let result = conn.execute(
          "INSERT INTO users (username, password, created_at)
           VALUES (?1, ?2, ?3)",
          rusqlite::params![username, password_hash, now_str],
        );
        match result {
          Ok(_) => Ok(true),
          // Duplicate username: a reportable failure, not a fatal error.
          Err(rusqlite::Error::SqliteFailure(e, _))
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
          {
            Ok(false)
          }
          Err(e) => Err(e.into()),
        }
      })
      .await?;

    Ok(created)
  }

  async fn password_hash(&self, username: String) -> Result<Option<String>> {
    let hash = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT password FROM users WHERE username = ?1",
              rusqlite::params![username],
              |row| row.get(0),
            )
            .optional()?,
        )
      })
      .await?;
    Ok(hash)
  }
}
