//! Expense records and amount parsing.

use crate::{
    error::{GameError, GameResult},
    types::ExpenseId,
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Need,
    Want,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Need => "need",
            Self::Want => "want",
        }
    }

    /// Health cost of `amount` spent in this category.
    /// Deleting the expense refunds exactly the same value.
    pub fn weighted(&self, amount: f64, want_multiplier: f64) -> f64 {
        match self {
            Self::Need => amount,
            Self::Want => amount * want_multiplier,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A logged expense. Immutable once created; removed by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id:       ExpenseId,
    pub name:     String,
    pub amount:   f64,
    #[serde(alias = "type")]
    pub category: Category,
}

impl Expense {
    pub fn health_cost(&self, want_multiplier: f64) -> f64 {
        self.category.weighted(self.amount, want_multiplier)
    }
}

/// Parse user-entered cost text. Accepts only positive finite decimals.
pub fn parse_amount(input: &str) -> GameResult<f64> {
    let invalid = || GameError::InvalidInput { input: input.to_string() };
    let amount: f64 = input.trim().parse().map_err(|_| invalid())?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(invalid());
    }
    Ok(amount)
}
