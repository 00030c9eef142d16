use std::path::{Path, PathBuf};

use rusqlite::{Connection, OptionalExtension};

use super::Slots;
use crate::error::Result;

/// Slots kept in a single-table SQLite database
pub struct SqliteSlots {
    conn: Connection,
    #[allow(dead_code)]
    path: Option<PathBuf>,
}

impl SqliteSlots {
    /// Open or create the database at `path`
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let slots = Self {
            conn,
            path: Some(path.to_path_buf()),
        };
        slots.init_schema()?;
        Ok(slots)
    }

    /// A database that lives only as long as this value
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let slots = Self { conn, path: None };
        slots.init_schema()?;
        Ok(slots)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS slots (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }
}

impl Slots for SqliteSlots {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value: Option<String> = self
            .conn
            .query_row("SELECT value FROM slots WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO slots (key, value) VALUES (?1, ?2)",
            [key, value],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.conn.execute("DELETE FROM slots WHERE key = ?1", [key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_get_remove() {
        let mut slots = SqliteSlots::open_in_memory().unwrap();
        assert_eq!(slots.get("entries").unwrap(), None);

        slots.set("entries", "[]").unwrap();
        assert_eq!(slots.get("entries").unwrap().as_deref(), Some("[]"));

        slots.set("entries", "[1]").unwrap();
        assert_eq!(slots.get("entries").unwrap().as_deref(), Some("[1]"));

        slots.remove("entries").unwrap();
        assert_eq!(slots.get("entries").unwrap(), None);
    }

    #[test]
    fn test_persists_across_connections() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("brewlog.db");

        let mut slots = SqliteSlots::open(&path).unwrap();
        slots.set("entries", "{\"version\":1,\"entries\":[]}").unwrap();
        drop(slots);

        let reopened = SqliteSlots::open(&path).unwrap();
        assert!(reopened.get("entries").unwrap().is_some());
    }
}
