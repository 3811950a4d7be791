//! Integration tests for `SqliteStore` against an in-memory database.

use casefile_core::{
  case::{NewCase, Severity},
  store::CaseStore,
};
use chrono::NaiveDate;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_case(name: &str, case_type: &str, severity: Severity) -> NewCase {
  NewCase {
    case_name:            name.into(),
    case_type:            case_type.into(),
    description:          "test case".into(),
    location:             "Harare".into(),
    amount_involved:      1_000.0,
    currency:             "USD".into(),
    date_detected:        Some(date(2024, 2, 20)),
    date_reported:        Some(date(2024, 3, 1)),
    date_resolved:        None,
    parties_involved:     "Unknown".into(),
    investigation_agency: "ZRP".into(),
    court_reference:      None,
    source_url:           None,
    created_by:           "admin".into(),
    severity,
  }
}

// ─── Schema & seeding ────────────────────────────────────────────────────────

#[tokio::test]
async fn empty_store_starts_empty() {
  let s = store().await;
  assert_eq!(s.case_count().await.unwrap(), 0);
  assert!(s.list_categories().await.unwrap().is_empty());
}

#[tokio::test]
async fn seed_populates_categories_and_cases() {
  let s = store().await;
  s.seed_if_empty().await.unwrap();

  let categories = s.list_categories().await.unwrap();
  assert_eq!(categories.len(), 10);
  assert!(categories.iter().any(|c| c.name == "Ponzi Scheme"));

  assert_eq!(s.case_count().await.unwrap(), 30);
}

#[tokio::test]
async fn seed_is_idempotent() {
  let s = store().await;
  s.seed_if_empty().await.unwrap();
  let count = s.case_count().await.unwrap();

  s.seed_if_empty().await.unwrap();
  assert_eq!(s.case_count().await.unwrap(), count);
  assert_eq!(s.list_categories().await.unwrap().len(), 10);
}

#[tokio::test]
async fn seed_skips_nonempty_case_table() {
  let s = store().await;
  s.add_case(new_case("Lone Case", "Bank Fraud", Severity::Low))
    .await
    .unwrap();

  s.seed_if_empty().await.unwrap();

  // Cases were present, so only categories get seeded.
  assert_eq!(s.case_count().await.unwrap(), 1);
  assert_eq!(s.list_categories().await.unwrap().len(), 10);
}

// ─── Cases ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_case_assigns_id_and_grows_list_by_one() {
  let s = store().await;
  let before = s.list_cases().await.unwrap().len();

  let case = s
    .add_case(new_case("Test Scam", "Ponzi Scheme", Severity::High))
    .await
    .unwrap();
  assert!(case.case_id > 0);
  assert_eq!(case.status, "Open");
  assert!(Severity::ALL.contains(&case.severity));

  let after = s.list_cases().await.unwrap();
  assert_eq!(after.len(), before + 1);
  assert!(after.iter().any(|c| c.case_id == case.case_id));
}

#[tokio::test]
async fn add_case_rejects_blank_name() {
  let s = store().await;
  let mut case = new_case(" ", "Bank Fraud", Severity::Low);
  case.case_name = "   ".into();

  assert!(s.add_case(case).await.is_err());
  assert_eq!(s.case_count().await.unwrap(), 0);
}

#[tokio::test]
async fn sql_severity_check_rejects_unknown_value() {
  // The CHECK constraint is the last line of defence for writes that bypass
  // the typed NewCase path.
  let s = store().await;

  let result = s
    .conn
    .call(|conn| {
      conn.execute(
        "INSERT INTO cases
           (case_name, case_type, created_by, created_at, updated_at, severity)
         VALUES ('Bad', 'Bank Fraud', 'admin', '2024-01-01T00:00:00Z',
                 '2024-01-01T00:00:00Z', 'Severe')",
        [],
      )?;
      Ok(())
    })
    .await;

  assert!(result.is_err());
  assert_eq!(s.case_count().await.unwrap(), 0);
}

#[tokio::test]
async fn list_cases_orders_by_report_date_descending() {
  let s = store().await;

  let mut older = new_case("Older", "Bank Fraud", Severity::Low);
  older.date_reported = Some(date(2020, 1, 1));
  let mut newer = new_case("Newer", "Bank Fraud", Severity::Low);
  newer.date_reported = Some(date(2024, 6, 1));
  let mut undated = new_case("Undated", "Bank Fraud", Severity::Low);
  undated.date_reported = None;

  s.add_case(older).await.unwrap();
  s.add_case(undated).await.unwrap();
  s.add_case(newer).await.unwrap();

  let cases = s.list_cases().await.unwrap();
  assert_eq!(cases[0].case_name, "Newer");
  assert_eq!(cases[1].case_name, "Older");
  // NULL report dates sort last under DESC.
  assert_eq!(cases[2].case_name, "Undated");
}

#[tokio::test]
async fn case_types_reflect_stored_cases_not_seed_list() {
  let s = store().await;
  s.add_case(new_case("Only One", "Cyber Fraud", Severity::Medium))
    .await
    .unwrap();

  let types = s.list_case_types().await.unwrap();
  assert_eq!(types, vec!["Cyber Fraud".to_owned()]);
  // "Ponzi Scheme" is in the category seed list but has no cases here, so it
  // does not appear among the distinct types.
  assert!(!types.contains(&"Ponzi Scheme".to_owned()));
}

#[tokio::test]
async fn case_types_are_distinct() {
  let s = store().await;
  s.add_case(new_case("A", "Bank Fraud", Severity::Low))
    .await
    .unwrap();
  s.add_case(new_case("B", "Bank Fraud", Severity::High))
    .await
    .unwrap();
  s.add_case(new_case("C", "Tax Evasion", Severity::Low))
    .await
    .unwrap();

  let types = s.list_case_types().await.unwrap();
  assert_eq!(types.len(), 2);
}

#[tokio::test]
async fn ponzi_scenario_round_trip() {
  let s = store().await;

  let mut case = new_case("Pyramid Promise", "Ponzi Scheme", Severity::High);
  case.amount_involved = 100_000.0;
  case.date_reported = Some(date(2024, 3, 1));
  s.add_case(case).await.unwrap();

  let cases = s.list_cases().await.unwrap();
  assert_eq!(cases.len(), 1);
  assert_eq!(cases[0].case_type, "Ponzi Scheme");
  assert_eq!(cases[0].amount_involved, 100_000.0);
  assert_eq!(cases[0].severity, Severity::High);
  assert_eq!(cases[0].report_year(), Some(2024));
}

// ─── Users ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_user_then_duplicate_fails() {
  let s = store().await;

  let first = s
    .create_user("alice".into(), "$argon2id$hash-a".into())
    .await
    .unwrap();
  assert!(first);

  // Same username, different password — still refused.
  let second = s
    .create_user("alice".into(), "$argon2id$hash-b".into())
    .await
    .unwrap();
  assert!(!second);

  // The original hash is untouched.
  let stored = s.password_hash("alice".into()).await.unwrap();
  assert_eq!(stored.as_deref(), Some("$argon2id$hash-a"));
}

#[tokio::test]
async fn password_hash_for_unknown_user_is_none() {
  let s = store().await;
  assert!(s.password_hash("nobody".into()).await.unwrap().is_none());
}
