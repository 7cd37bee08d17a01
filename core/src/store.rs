//! SQLite persistence layer.
//!
//! RULE: Only store.rs talks to the database.
//! The game store goes through the SaveSlot trait and never executes SQL.

use crate::{error::GameResult, slot::SaveSlot};
use rusqlite::{params, Connection, OptionalExtension};

pub struct SqliteSlot {
    conn: Connection,
    path: Option<String>, // None for :memory:, Some(path) for file
}

impl SqliteSlot {
    /// Open (or create) the save database at `path`.
    pub fn open(path: &str) -> GameResult<Self> {
        let conn = Connection::open(path)?;
        // WAL mode only for real files; :memory: ignores it.
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        Ok(Self {
            conn,
            path: Some(path.to_string()),
        })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> GameResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn, path: None })
    }

    /// Reopen a new connection to the same database.
    /// For in-memory databases, this returns a new, empty database.
    pub fn reopen(&self) -> GameResult<Self> {
        match &self.path {
            Some(p) => Self::open(p),
            None => Self::in_memory(),
        }
    }

    /// Apply all schema migrations in order.
    pub fn migrate(&self) -> GameResult<()> {
        self.conn
            .execute_batch(include_str!("../../migrations/001_save_slot.sql"))?;
        Ok(())
    }

    /// RFC 3339 timestamp of the last write to `key`.
    pub fn saved_at(&self, key: &str) -> GameResult<Option<String>> {
        let saved_at = self
            .conn
            .query_row(
                "SELECT saved_at FROM save_slot WHERE slot_key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(saved_at)
    }

    /// Number of occupied slots (for tests).
    pub fn slot_count(&self) -> GameResult<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM save_slot", [], |row| row.get(0))?;
        Ok(count)
    }
}

impl SaveSlot for SqliteSlot {
    fn read(&self, key: &str) -> GameResult<Option<String>> {
        let payload = self
            .conn
            .query_row(
                "SELECT payload FROM save_slot WHERE slot_key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(payload)
    }

    fn write(&mut self, key: &str, value: &str) -> GameResult<()> {
        let saved_at = chrono::Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO save_slot (slot_key, payload, saved_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(slot_key) DO UPDATE SET payload = excluded.payload,
                                                 saved_at = excluded.saved_at",
            params![key, value, saved_at],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> GameResult<()> {
        self.conn
            .execute("DELETE FROM save_slot WHERE slot_key = ?1", params![key])?;
        Ok(())
    }
}
