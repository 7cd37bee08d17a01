use crate::{expense::Category, types::ExpenseId};
use serde::{Deserialize, Serialize};

/// All player-issued commands.
/// `amount` stays as entered; the store validates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum PlayerCommand {
    // ── Expense log ───────────────────────────────
    AddExpense {
        name:     String,
        amount:   String,
        category: Category,
    },
    DeleteExpense {
        id: ExpenseId,
    },

    // ── Economy ───────────────────────────────────
    BuyPotion,
    ResetDay {
        #[serde(default)]
        confirmed: bool,
    },

    // ── Save management ───────────────────────────
    RestartGame,
    WipeData {
        #[serde(default)]
        confirmed: bool,
    },
}

impl PlayerCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddExpense { .. }    => "add_expense",
            Self::DeleteExpense { .. } => "delete_expense",
            Self::BuyPotion            => "buy_potion",
            Self::ResetDay { .. }      => "reset_day",
            Self::RestartGame          => "restart_game",
            Self::WipeData { .. }      => "wipe_data",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tagged_json() {
        let cmd: PlayerCommand = serde_json::from_str(
            r#"{"cmd":"add_expense","name":"Lunch","amount":"12.50","category":"need"}"#,
        )
        .unwrap();
        assert_eq!(cmd.name(), "add_expense");

        let cmd: PlayerCommand = serde_json::from_str(r#"{"cmd":"reset_day"}"#).unwrap();
        assert_eq!(cmd, PlayerCommand::ResetDay { confirmed: false });
    }
}
