//! SQLite-based tracking storage.
//!
//! Provides persistent storage for:
//! - Per-day completion records for each tracking domain
//! - Medication adherence days
//! - Key-value store for application state (water counter, etc.)

use chrono::NaiveDate;
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

use crate::adherence::{AdherenceDay, AdherenceStatus};
use crate::error::{CoreError, DatabaseError};
use crate::streak::{CompletionDayRecord, CompletionHistory};

use super::data_dir;

const DATE_FMT: &str = "%Y-%m-%d";

/// A tracking surface with its own completion history and streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Tasks,
    Health,
    Education,
}

impl Domain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Tasks => "tasks",
            Domain::Health => "health",
            Domain::Education => "education",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "tasks" => Some(Domain::Tasks),
            "health" => Some(Domain::Health),
            "education" => Some(Domain::Education),
            _ => None,
        }
    }
}

/// SQLite database for tracking history.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `~/.config/lifedash/lifedash.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be created or the
    /// database cannot be opened or migrated.
    pub fn open() -> Result<Self, CoreError> {
        let path = data_dir()?.join("lifedash.db");
        let conn = Connection::open(&path)
            .map_err(|source| DatabaseError::OpenFailed { path, source })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self, DatabaseError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), DatabaseError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS completion_days (
                domain          TEXT NOT NULL,
                date            TEXT NOT NULL,
                completed_count INTEGER NOT NULL,
                total_count     INTEGER NOT NULL,
                PRIMARY KEY (domain, date)
            );

            CREATE TABLE IF NOT EXISTS adherence_days (
                date   TEXT PRIMARY KEY,
                status TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_completion_days_domain ON completion_days(domain);",
        )?;
        Ok(())
    }

    /// Upsert one day's completion record for a domain.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub fn record_day(
        &self,
        domain: Domain,
        record: CompletionDayRecord,
    ) -> Result<(), DatabaseError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO completion_days (domain, date, completed_count, total_count)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                domain.as_str(),
                record.date.format(DATE_FMT).to_string(),
                record.completed_count,
                record.total_count,
            ],
        )?;
        Ok(())
    }

    /// Load the full completion history for a domain.
    ///
    /// Rows with unparseable dates are skipped rather than failing the
    /// whole load; the streak math degrades to shorter streaks.
    pub fn history(&self, domain: Domain) -> Result<CompletionHistory, DatabaseError> {
        let mut stmt = self.conn.prepare(
            "SELECT date, completed_count, total_count
             FROM completion_days
             WHERE domain = ?1",
        )?;

        let rows = stmt.query_map(params![domain.as_str()], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, u32>(1)?,
                row.get::<_, u32>(2)?,
            ))
        })?;

        let mut history = CompletionHistory::new();
        for row in rows {
            let (date_str, completed, total) = row?;
            if let Ok(date) = NaiveDate::parse_from_str(&date_str, DATE_FMT) {
                history.upsert(CompletionDayRecord::new(date, completed, total));
            }
        }
        Ok(history)
    }

    /// Upsert one adherence day.
    pub fn record_adherence(&self, day: AdherenceDay) -> Result<(), DatabaseError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO adherence_days (date, status) VALUES (?1, ?2)",
            params![day.date.format(DATE_FMT).to_string(), day.status.as_str()],
        )?;
        Ok(())
    }

    /// Adherence days on or after `since`, ascending by date.
    pub fn adherence_since(&self, since: NaiveDate) -> Result<Vec<AdherenceDay>, DatabaseError> {
        let mut stmt = self.conn.prepare(
            "SELECT date, status FROM adherence_days WHERE date >= ?1 ORDER BY date",
        )?;
        let rows = stmt.query_map(params![since.format(DATE_FMT).to_string()], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut days = Vec::new();
        for row in rows {
            let (date_str, status_str) = row?;
            let parsed = NaiveDate::parse_from_str(&date_str, DATE_FMT)
                .ok()
                .zip(AdherenceStatus::parse(&status_str));
            if let Some((date, status)) = parsed {
                days.push(AdherenceDay { date, status });
            }
        }
        Ok(days)
    }

    /// Water glasses logged for a date (kv-backed daily counter).
    pub fn water_count(&self, date: NaiveDate) -> Result<u32, DatabaseError> {
        let key = format!("water:{}", date.format(DATE_FMT));
        Ok(self
            .kv_get(&key)?
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(0))
    }

    /// Increment the water counter for a date, returning the new count.
    pub fn log_water(&self, date: NaiveDate) -> Result<u32, DatabaseError> {
        let count = self.water_count(date)? + 1;
        let key = format!("water:{}", date.format(DATE_FMT));
        self.kv_set(&key, &count.to_string())?;
        Ok(count)
    }

    /// Get a value from the kv store.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, DatabaseError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Set a value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), DatabaseError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }
}
