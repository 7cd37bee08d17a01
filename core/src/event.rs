//! Visual events emitted by store mutations.
//!
//! The store never renders. It hands these to the presentation layer,
//! which turns them into floating text, shakes and overlays.

use crate::{
    expense::Category,
    types::Currency,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// Health lost to a new expense. `amount` is the rounded `damage`.
    Damage {
        amount:   u32,
        damage:   f64,
        category: Category,
    },
    /// Health restored by a refund or potion. `amount` is rounded.
    Heal {
        amount: u32,
    },
    /// Gold granted for surviving a day.
    Gold {
        amount: Currency,
    },
    /// An expense was refused because it would break the daily limit.
    SpendBlocked {
        spent:     f64,
        attempted: f64,
        limit:     f64,
    },
    /// Health just reached zero.
    Defeated,
    /// The presentation layer should drop overlays and redraw from scratch.
    ViewReset,
}

impl GameEvent {
    /// Stable snake_case name, used in log lines.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Damage { .. }       => "damage",
            Self::Heal { .. }         => "heal",
            Self::Gold { .. }         => "gold",
            Self::SpendBlocked { .. } => "spend_blocked",
            Self::Defeated            => "defeated",
            Self::ViewReset           => "view_reset",
        }
    }
}

/// Round a health delta for display, matching the whole-number readout.
pub fn display_amount(value: f64) -> u32 {
    value.round().max(0.0) as u32
}
