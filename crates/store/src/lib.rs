use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

/// A registered account.
#[derive(Debug, Clone)]
pub struct UserAccount {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: Option<u32>,
    pub location: Option<String>,
}

/// One persisted claim evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimRecord {
    pub id: i64,
    pub user_email: String,
    /// Fraud probability as a percentage (0–100).
    pub probability: f64,
    pub is_fraud: bool,
    pub risk_score: f64,
    pub created_at_unix: i64,
}

/// SQLite-backed store for accounts and claim-evaluation history.
#[derive(Debug)]
pub struct ClaimStore {
    conn: Connection,
}

impl ClaimStore {
    pub fn open(path: &str) -> Result<Self> {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed creating store parent dir {}", parent.display())
                })?;
            }
        }

        let conn =
            Connection::open(path).with_context(|| format!("failed opening store {}", path))?;
        Self::init_schema(&conn)?;
        debug!(path, "claim store opened");
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("failed opening in-memory store")?;
        Self::init_schema(&conn)?;
        Ok(Self { conn })
    }

    fn init_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            "
            PRAGMA journal_mode=WAL;
            PRAGMA synchronous=NORMAL;
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                email TEXT NOT NULL UNIQUE,
                password TEXT NOT NULL,
                age INTEGER,
                location TEXT
            );
            CREATE TABLE IF NOT EXISTS claim_results (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_email TEXT NOT NULL,
                probability REAL NOT NULL,
                is_fraud INTEGER NOT NULL,
                risk_score REAL NOT NULL,
                created_at_unix INTEGER NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_claim_results_user
                ON claim_results(user_email, created_at_unix);
            ",
        )
        .context("failed initializing store schema")
    }

    /// Create an account. Returns `None` when the email is already taken.
    pub fn register_user(
        &self,
        name: &str,
        email: &str,
        password: &str,
        age: Option<u32>,
        location: Option<&str>,
    ) -> Result<Option<i64>> {
        let inserted = self
            .conn
            .execute(
                "INSERT OR IGNORE INTO users(name,email,password,age,location) VALUES(?1,?2,?3,?4,?5)",
                params![name, email, password, age, location],
            )
            .context("failed inserting user")?;
        if inserted == 0 {
            return Ok(None);
        }
        Ok(Some(self.conn.last_insert_rowid()))
    }

    /// Plain credential check; returns the account on a match.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<Option<UserAccount>> {
        self.conn
            .query_row(
                "SELECT id, name, email, age, location FROM users WHERE email=?1 AND password=?2",
                params![email, password],
                |row| {
                    Ok(UserAccount {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        email: row.get(2)?,
                        age: row.get(3)?,
                        location: row.get(4)?,
                    })
                },
            )
            .optional()
            .context("failed querying user")
    }

    /// Persist one claim evaluation.
    pub fn record_result(
        &self,
        user_email: &str,
        probability: f64,
        is_fraud: bool,
        risk_score: f64,
        created_at_unix: i64,
    ) -> Result<i64> {
        self.conn
            .execute(
                "INSERT INTO claim_results(user_email,probability,is_fraud,risk_score,created_at_unix)
                 VALUES(?1,?2,?3,?4,?5)",
                params![user_email, probability, is_fraud, risk_score, created_at_unix],
            )
            .context("failed inserting claim result")?;
        Ok(self.conn.last_insert_rowid())
    }

    /// All evaluations for one account, newest first.
    pub fn history_for(&self, email: &str) -> Result<Vec<ClaimRecord>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, user_email, probability, is_fraud, risk_score, created_at_unix
                 FROM claim_results WHERE user_email=?1
                 ORDER BY created_at_unix DESC, id DESC",
            )
            .context("failed preparing history query")?;
        let rows = stmt
            .query_map(params![email], |row| {
                Ok(ClaimRecord {
                    id: row.get(0)?,
                    user_email: row.get(1)?,
                    probability: row.get(2)?,
                    is_fraud: row.get(3)?,
                    risk_score: row.get(4)?,
                    created_at_unix: row.get(5)?,
                })
            })
            .context("failed querying history")?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row.context("failed reading history row")?);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests;
