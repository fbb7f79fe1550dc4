//! SQL schema for the Casewatch SQLite store.
//!
//! Executed once at connection startup. The current schema is
//! `user_version` 1.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- One row per weekly reporting period. Rows are never deleted.
CREATE TABLE IF NOT EXISTS case_records (
    date        INTEGER PRIMARY KEY, -- days since 0001-01-01, which is day 1
    covid_cases INTEGER,             -- NULL = no data reported
    flu_cases   INTEGER,             -- NULL = no data reported
    CHECK (covid_cases IS NULL OR covid_cases >= 0),
    CHECK (flu_cases   IS NULL OR flu_cases   >= 0)
);

PRAGMA user_version = 1;
";
