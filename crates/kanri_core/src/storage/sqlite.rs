//! SQLite storage adapter.
//!
//! # Responsibility
//! - Persist board blobs in the `kv_store` table of a migrated database.
//!
//! # Invariants
//! - Saves are upserts; one row per key.
//! - Connections are obtained through [`crate::db`] so the schema is
//!   always applied before first use.

use crate::db::{open_board_db, open_board_db_in_memory};
use crate::storage::{Storage, StorageResult};
use rusqlite::{params, Connection};
use std::path::Path;

/// Key-value storage backed by a SQLite database.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Opens (creating if needed) a board database file.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        Ok(Self {
            conn: open_board_db(path)?,
        })
    }

    /// Opens an in-memory board database.
    pub fn open_in_memory() -> StorageResult<Self> {
        Ok(Self {
            conn: open_board_db_in_memory()?,
        })
    }

    /// Wraps an already-migrated connection.
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }
}

impl Storage for SqliteStorage {
    fn load(&self, key: &str) -> StorageResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM kv_store WHERE key = ?1;")?;
        let mut rows = stmt.query([key])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(row.get(0)?));
        }
        Ok(None)
    }

    fn save(&self, key: &str, payload: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, payload],
        )?;
        Ok(())
    }
}
