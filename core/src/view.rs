//! View model: what the presentation layer re-reads after every mutation.

use crate::{
    config::GameConfig,
    error::GameError,
    expense::{Category, Expense},
    state::GameState,
    types::{Currency, ExpenseId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HealthBand {
    Healthy,  // > 50
    Wounded,  // > 20
    Critical,
}

impl HealthBand {
    /// Band for a health percentage.
    pub fn for_health(percent: f64) -> Self {
        if percent > 50.0 {
            Self::Healthy
        } else if percent > 20.0 {
            Self::Wounded
        } else {
            Self::Critical
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseRow {
    pub id:        ExpenseId,
    pub name:      String,
    pub category:  Category,
    pub cost_text: String,
    pub highlight: bool,
}

impl From<&Expense> for ExpenseRow {
    fn from(e: &Expense) -> Self {
        Self {
            id:        e.id,
            name:      e.name.clone(),
            category:  e.category,
            cost_text: format!("-${}", e.amount),
            highlight: e.category == Category::Want,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusView {
    pub hp_text:        String,
    pub hp_percent:     f64,
    pub band:           HealthBand,
    pub currency:       Currency,
    pub game_over:      bool,
    pub spent:          f64,
    pub allowance_left: f64,
    pub expenses:       Vec<ExpenseRow>,
}

impl StatusView {
    pub fn build(state: &GameState, config: &GameConfig) -> Self {
        let spent = state.total_spent();
        let hp_percent = state.health / config.max_health * 100.0;
        Self {
            hp_text:        format!("{} / {}", state.health.ceil(), config.max_health),
            hp_percent,
            band:           HealthBand::for_health(hp_percent),
            currency:       state.currency,
            game_over:      state.health <= 0.0,
            spent,
            allowance_left: (config.daily_limit - spent).max(0.0),
            expenses:       state.expenses.iter().map(ExpenseRow::from).collect(),
        }
    }
}

/// Alert text for a refused action. `None` for the daily-limit refusal,
/// which gets its own blocking modal, and for storage failures.
pub fn notice_for(err: &GameError, config: &GameConfig) -> Option<String> {
    match err {
        GameError::InvalidInput { .. } => Some("Enter a valid cost!".into()),
        GameError::InsufficientFunds { .. } => Some(format!("Need {} Gold!", config.potion_price)),
        GameError::HealthFull => Some("Health is full!".into()),
        GameError::NothingToReset => Some("Log some expenses first, or heal up!".into()),
        GameError::LimitExceeded { .. }
        | GameError::Declined { .. }
        | GameError::Database(_)
        | GameError::Serialization(_)
        | GameError::Other(_) => None,
    }
}
