//! Game state: the single record that is persisted to the save slot.

use crate::{
    expense::Expense,
    types::{Currency, ExpenseId, Health},
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const DEFAULT_HEALTH: Health = 100.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameState {
    #[serde(alias = "hp")]
    pub health:   Health,
    #[serde(alias = "gold")]
    pub currency: Currency,
    /// Today's expenses in insertion order.
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::fresh(DEFAULT_HEALTH)
    }
}

/// Derived from health; the store never locks out a defeated player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Alive,
    Defeated,
}

impl GameState {
    /// Full health, no gold, no expenses.
    pub fn fresh(max_health: Health) -> Self {
        Self {
            health:   max_health,
            currency: 0,
            expenses: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        if self.health <= 0.0 { Phase::Defeated } else { Phase::Alive }
    }

    /// Sum of today's expense amounts. Derived on demand, never stored.
    pub fn total_spent(&self) -> f64 {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    pub fn max_expense_id(&self) -> Option<ExpenseId> {
        self.expenses.iter().map(|e| e.id).max()
    }

    pub fn clamp_health(&mut self, max_health: Health) {
        self.health = self.health.clamp(0.0, max_health);
    }

    /// Repair a loaded state so every invariant holds.
    /// Returns the number of repairs made.
    pub fn sanitize(&mut self, max_health: Health) -> usize {
        let mut repairs = 0;

        if !self.health.is_finite() {
            self.health = max_health;
            repairs += 1;
        } else if !(0.0..=max_health).contains(&self.health) {
            self.clamp_health(max_health);
            repairs += 1;
        }

        let mut seen: HashSet<ExpenseId> = HashSet::new();
        let before = self.expenses.len();
        self.expenses
            .retain(|e| e.amount.is_finite() && e.amount > 0.0 && seen.insert(e.id));
        repairs += before - self.expenses.len();

        repairs
    }
}
