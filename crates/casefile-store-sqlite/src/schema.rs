//! SQL schema for the casefile SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`. Seed data is deliberately not part of the schema —
//! see [`crate::seed`].

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS users (
    username    TEXT PRIMARY KEY,
    password    TEXT NOT NULL,   -- argon2 PHC string
    created_at  TEXT NOT NULL    -- ISO 8601 UTC
);

-- Cases are written once via the case builder and never updated or deleted.
-- created_by names a user but is not a foreign key: seeded rows predate any
-- registration, so the reference is best-effort.
CREATE TABLE IF NOT EXISTS cases (
    case_id              INTEGER PRIMARY KEY AUTOINCREMENT,
    case_name            TEXT NOT NULL CHECK (length(trim(case_name)) > 0),
    case_type            TEXT NOT NULL,
    status               TEXT NOT NULL DEFAULT 'Open',
    description          TEXT NOT NULL DEFAULT '',
    location             TEXT NOT NULL DEFAULT '',
    amount_involved      REAL NOT NULL DEFAULT 0
                         CHECK (amount_involved >= 0),
    currency             TEXT NOT NULL DEFAULT 'USD',
    date_detected        TEXT,            -- YYYY-MM-DD or NULL
    date_reported        TEXT,
    date_resolved        TEXT,
    parties_involved     TEXT NOT NULL DEFAULT '',
    investigation_agency TEXT NOT NULL DEFAULT '',
    court_reference      TEXT,
    source_url           TEXT,
    created_by           TEXT NOT NULL,
    created_at           TEXT NOT NULL,
    updated_at           TEXT NOT NULL,
    severity             TEXT NOT NULL
                         CHECK (severity IN ('Low', 'Medium', 'High', 'Critical'))
);

CREATE TABLE IF NOT EXISTS case_categories (
    category_id   INTEGER PRIMARY KEY AUTOINCREMENT,
    category_name TEXT NOT NULL UNIQUE,
    description   TEXT NOT NULL DEFAULT ''
);

CREATE INDEX IF NOT EXISTS cases_type_idx     ON cases(case_type);
CREATE INDEX IF NOT EXISTS cases_reported_idx ON cases(date_reported);

PRAGMA user_version = 1;
";
