// src/store.rs
//! Append-only record of every announcement ever reported.
//!
//! `titulo` carries a UNIQUE constraint so a duplicate can never slip
//! past the application-level check. Rows are inserted once at first
//! sight and never updated or pruned.

use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OpenFlags};

use crate::extract::Candidate;

// Table name and columns are inherited from the original deployment so
// existing database files keep working unchanged.
const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS noticias (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    fuente TEXT,
    titulo TEXT UNIQUE,
    enlace TEXT
)";

pub struct SeenStore {
    conn: Connection,
}

/// One persisted row, as read back by the dump utility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeenRecord {
    pub id: i64,
    pub fuente: String,
    pub titulo: String,
    pub enlace: String,
}

impl SeenStore {
    /// Open (or create) the store and ensure the schema exists.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("opening database at {}", path.display()))?;
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("opening in-memory database")?;
        Self::from_connection(conn)
    }

    /// Read-only open for the inspection utility. Never creates the
    /// file or the table.
    pub fn open_read_only(path: &Path) -> Result<Self> {
        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .with_context(|| format!("opening database read-only at {}", path.display()))?;
        Ok(Self { conn })
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Partition candidates into already-seen and new, durably recording
    /// the new ones. Input order is preserved; a title repeated within
    /// one batch is recorded and returned only once.
    ///
    /// A UNIQUE violation on insert means the title is already recorded
    /// and is treated as "not new"; any other storage failure aborts the
    /// run, since without durable dedup at-most-once notification cannot
    /// be guaranteed.
    pub fn partition_and_record(&mut self, candidates: &[Candidate]) -> Result<Vec<Candidate>> {
        let mut fresh = Vec::new();
        for c in candidates {
            if self.is_seen(&c.title)? {
                continue;
            }
            match self.insert(c) {
                Ok(()) => fresh.push(c.clone()),
                Err(e) if is_unique_violation(&e) => {
                    tracing::debug!(title = %c.title, "already recorded");
                }
                Err(e) => {
                    return Err(e).with_context(|| format!("recording '{}'", c.title));
                }
            }
        }
        Ok(fresh)
    }

    fn is_seen(&self, title: &str) -> Result<bool> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT 1 FROM noticias WHERE titulo = ?1")?;
        let seen = stmt.exists(params![title])?;
        Ok(seen)
    }

    // Single statement, so a crash mid-run can never leave a partial row.
    fn insert(&self, c: &Candidate) -> rusqlite::Result<()> {
        self.conn.execute(
            "INSERT INTO noticias (fuente, titulo, enlace) VALUES (?1, ?2, ?3)",
            params![c.source, c.title, c.link],
        )?;
        Ok(())
    }

    /// Every recorded row, oldest first.
    pub fn dump_all(&self) -> Result<Vec<SeenRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, fuente, titulo, enlace FROM noticias ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(SeenRecord {
                id: row.get(0)?,
                fuente: row.get(1)?,
                titulo: row.get(2)?,
                enlace: row.get(3)?,
            })
        })?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}

/// Create the table if it does not exist yet. Runs on every start.
fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute(SCHEMA, []).context("creating noticias table")?;
    Ok(())
}

fn is_unique_violation(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(f, _) if f.code == rusqlite::ErrorCode::ConstraintViolation
    )
}
