use thiserror::Error;

use crate::{
    event::GameEvent,
    types::Currency,
};

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid expense amount: {input:?}")]
    InvalidInput { input: String },

    #[error("Daily limit exceeded: spent {spent:.2} + {amount:.2} > {limit:.2}")]
    LimitExceeded { spent: f64, amount: f64, limit: f64 },

    #[error("Insufficient funds: have {have}, need {need}")]
    InsufficientFunds { have: Currency, need: Currency },

    #[error("Health is already full")]
    HealthFull,

    #[error("Nothing to reset: log expenses while alive first")]
    NothingToReset,

    #[error("'{action}' was not confirmed")]
    Declined { action: &'static str },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GameError {
    /// Errors that are a refused game action rather than a storage failure.
    /// These always leave the state untouched.
    pub fn is_user_facing(&self) -> bool {
        !matches!(
            self,
            Self::Database(_) | Self::Serialization(_) | Self::Other(_)
        )
    }

    /// Visual signal carried by a refused action, if any.
    pub fn signal(&self) -> Option<GameEvent> {
        match self {
            Self::LimitExceeded { spent, amount, limit } => Some(GameEvent::SpendBlocked {
                spent:     *spent,
                attempted: *amount,
                limit:     *limit,
            }),
            _ => None,
        }
    }
}

pub type GameResult<T> = Result<T, GameError>;
