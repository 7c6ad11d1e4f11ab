//! SQLite storage layer for namestore.
//!
//! The store is a single `names` table. `Store` owns the database path
//! only; every operation opens a fresh connection and drops it after
//! its single statement. No pooling and no in-process state shared
//! between requests.

use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::{params, Connection};

use crate::error::ServerResult;
use crate::models::NameRecord;

/// How long a connection waits on the file lock before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Handle to the names database.
///
/// Cloning is cheap: the handle holds the configured path, not a
/// connection.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Open or create the database at the given path.
    ///
    /// Ensures the containing directory and the `names` table exist.
    /// Idempotent: safe to call on every process start. Any failure here
    /// is fatal to startup and propagates to the caller.
    pub fn open(path: impl Into<PathBuf>) -> ServerResult<Self> {
        let path = path.into();

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let store = Self { path };
        let conn = store.connect()?;
        conn.execute_batch(SCHEMA)?;

        Ok(store)
    }

    /// Get the database file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Insert a name and return the id the store assigned to it.
    pub fn insert_name(&self, name: &str) -> ServerResult<i64> {
        let conn = self.connect()?;
        conn.execute("INSERT INTO names (name) VALUES (?)", params![name])?;
        Ok(conn.last_insert_rowid())
    }

    /// List every stored record in insertion order.
    ///
    /// No explicit `ORDER BY`: the table's natural scan order is rowid
    /// order, which is creation order since records are never deleted.
    pub fn list_names(&self) -> ServerResult<Vec<NameRecord>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare("SELECT id, name FROM names")?;

        let records = stmt
            .query_map([], |row| {
                Ok(NameRecord {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    /// Open a fresh connection for a single operation.
    fn connect(&self) -> ServerResult<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    }
}

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS names (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
);
"#;
