//! The save-slot seam.
//!
//! RULE: The game store persists through SaveSlot only.
//! It never knows whether the slot is SQLite or an in-process map.

use crate::error::GameResult;
use std::collections::HashMap;

/// A single-writer key-value slot holding serialized state.
pub trait SaveSlot {
    fn read(&self, key: &str) -> GameResult<Option<String>>;

    /// Replace the value stored under `key`.
    fn write(&mut self, key: &str, value: &str) -> GameResult<()>;

    /// Erase `key` entirely. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> GameResult<()>;
}

/// In-process slot. Used in tests and when embedding without a database.
#[derive(Debug, Default, Clone)]
pub struct MemorySlot {
    entries: HashMap<String, String>,
    writes:  usize,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a raw value, e.g. a legacy or corrupt save.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut slot = Self::new();
        slot.entries.insert(key.to_string(), value.to_string());
        slot
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of successful writes (for tests).
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl SaveSlot for MemorySlot {
    fn read(&self, key: &str) -> GameResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> GameResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> GameResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}
