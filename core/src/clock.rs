//! Expense id clock. Hands out unique, strictly increasing ids.

use crate::{
    error::{GameError, GameResult},
    types::ExpenseId,
};

#[derive(Debug, Clone)]
pub struct IdClock {
    last:   ExpenseId,
    source: IdSource,
}

#[derive(Debug, Clone)]
enum IdSource {
    /// Millisecond wall-clock timestamps.
    WallClock,
    /// Counter starting at a fixed value. Deterministic, for tests and replays.
    Sequential(ExpenseId),
}

impl IdClock {
    pub fn wall_clock() -> Self {
        Self { last: 0, source: IdSource::WallClock }
    }

    pub fn sequential(start: ExpenseId) -> Self {
        Self { last: 0, source: IdSource::Sequential(start) }
    }

    /// Never hand out an id at or below `id`.
    /// Called after loading so new ids stay above persisted ones.
    pub fn observe(&mut self, id: ExpenseId) {
        self.last = self.last.max(id);
    }

    /// Next id. Strictly greater than every id issued or observed.
    /// Fails once the id space is used up.
    pub fn next_id(&mut self) -> GameResult<ExpenseId> {
        let candidate = match &mut self.source {
            IdSource::WallClock => chrono::Utc::now().timestamp_millis().max(0) as u64,
            IdSource::Sequential(next) => {
                let id = *next;
                *next = next.saturating_add(1);
                id
            }
        };
        let floor = self
            .last
            .checked_add(1)
            .ok_or_else(|| GameError::Other(anyhow::anyhow!("expense ids exhausted after {}", self.last)))?;
        let id = candidate.max(floor);
        self.last = id;
        Ok(id)
    }
}

impl Default for IdClock {
    fn default() -> Self {
        Self::wall_clock()
    }
}
