//! The game state store, the heart of Stash-Dash.
//!
//! RULES:
//!   - The store owns the only live GameState. Callers read snapshots.
//!   - Every mutation builds the next state on a copy, persists it,
//!     then commits. A failed write leaves the live state untouched.
//!   - Refused actions return an error and never touch state or slot.
//!   - Destructive actions ask the injected Confirm first.

use crate::{
    clock::IdClock,
    command::PlayerCommand,
    config::GameConfig,
    confirm::{Confirm, Preset},
    error::{GameError, GameResult},
    event::{display_amount, GameEvent},
    expense::{parse_amount, Category, Expense},
    slot::SaveSlot,
    state::{GameState, Phase},
    types::ExpenseId,
};

pub const WIPE_DATA_PROMPT: &str = "Delete save file?";

/// Result of a committed mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub state:  GameState,
    pub events: Vec<GameEvent>,
}

pub struct GameStateStore<S: SaveSlot> {
    state:  GameState,
    config: GameConfig,
    clock:  IdClock,
    slot:   S,
}

impl<S: SaveSlot> GameStateStore<S> {
    /// Load state from `slot`, falling back to defaults when the slot is
    /// empty or unreadable as a save.
    pub fn load(slot: S, config: GameConfig) -> GameResult<Self> {
        Self::load_with_clock(slot, config, IdClock::wall_clock())
    }

    pub fn load_with_clock(slot: S, config: GameConfig, mut clock: IdClock) -> GameResult<Self> {
        let state = match slot.read(&config.slot_key)? {
            None => {
                log::info!("no save under {:?}, starting fresh", config.slot_key);
                GameState::fresh(config.max_health)
            }
            Some(raw) => match serde_json::from_str::<GameState>(&raw) {
                Ok(mut state) => {
                    let repairs = state.sanitize(config.max_health);
                    if repairs > 0 {
                        log::warn!("repaired {repairs} invalid field(s) in loaded save");
                    }
                    log::info!(
                        "loaded save: health={:.1} currency={} expenses={}",
                        state.health,
                        state.currency,
                        state.expenses.len()
                    );
                    state
                }
                Err(e) => {
                    log::warn!("corrupt save under {:?} ({e}), starting fresh", config.slot_key);
                    GameState::fresh(config.max_health)
                }
            },
        };

        if let Some(max_id) = state.max_expense_id() {
            clock.observe(max_id);
        }

        Ok(Self { state, config, clock, slot })
    }

    // ── Read access ────────────────────────────────────────────

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn total_spent(&self) -> f64 {
        self.state.total_spent()
    }

    /// How much more can be spent today before the limit refuses it.
    pub fn remaining_allowance(&self) -> f64 {
        (self.config.daily_limit - self.total_spent()).max(0.0)
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    pub fn into_slot(self) -> S {
        self.slot
    }

    // ── Mutations ──────────────────────────────────────────────

    /// Log a new expense. Damage is the amount, surcharged for wants.
    pub fn add_expense(
        &mut self,
        name: &str,
        amount_text: &str,
        category: Category,
    ) -> GameResult<Outcome> {
        let amount = parse_amount(amount_text)?;

        let spent = self.total_spent();
        if spent + amount > self.config.daily_limit {
            log::warn!(
                "expense {name:?} refused: spent {spent:.2} + {amount:.2} > limit {:.2}",
                self.config.daily_limit
            );
            return Err(GameError::LimitExceeded {
                spent,
                amount,
                limit: self.config.daily_limit,
            });
        }

        let damage = category.weighted(amount, self.config.want_multiplier);
        let was_alive = self.state.phase() == Phase::Alive;

        let mut next = self.state.clone();
        next.health -= damage;
        next.clamp_health(self.config.max_health);
        next.expenses.push(Expense {
            id: self.clock.next_id()?,
            name: name.to_string(),
            amount,
            category,
        });

        let mut events = vec![GameEvent::Damage {
            amount: display_amount(damage),
            damage,
            category,
        }];
        if was_alive && next.phase() == Phase::Defeated {
            log::info!("health depleted by {name:?}");
            events.push(GameEvent::Defeated);
        }

        self.commit(next, events)
    }

    /// Remove an expense and refund its full health cost.
    /// Unknown ids leave the state as is.
    pub fn delete_expense(&mut self, id: ExpenseId) -> GameResult<Outcome> {
        let mut next = self.state.clone();
        let mut events = Vec::new();

        if let Some(pos) = next.expenses.iter().position(|e| e.id == id) {
            let expense = next.expenses.remove(pos);
            let refund = expense.health_cost(self.config.want_multiplier);
            next.health += refund;
            next.clamp_health(self.config.max_health);
            events.push(GameEvent::Heal { amount: display_amount(refund) });
        } else {
            log::debug!("delete of unknown expense {id} ignored");
        }

        self.commit(next, events)
    }

    pub fn buy_potion(&mut self) -> GameResult<Outcome> {
        let price = self.config.potion_price;
        if self.state.currency < price {
            return Err(GameError::InsufficientFunds {
                have: self.state.currency,
                need: price,
            });
        }
        if self.state.health >= self.config.max_health {
            return Err(GameError::HealthFull);
        }

        let mut next = self.state.clone();
        next.currency -= price;
        next.health += self.config.potion_heal;
        next.clamp_health(self.config.max_health);

        let events = vec![GameEvent::Heal {
            amount: display_amount(self.config.potion_heal),
        }];
        self.commit(next, events)
    }

    /// End the day: clear expenses and pay the survival reward.
    pub fn reset_day(&mut self, confirm: &mut dyn Confirm) -> GameResult<Outcome> {
        if self.state.phase() == Phase::Defeated || self.state.expenses.is_empty() {
            return Err(GameError::NothingToReset);
        }
        let reward = self.config.daily_reward;
        if !confirm.confirm(&format!("Survive the day? You will earn {reward} Gold.")) {
            log::info!("reset day declined");
            return Err(GameError::Declined { action: "reset_day" });
        }

        let mut next = self.state.clone();
        next.currency = next.currency.saturating_add(reward);
        next.expenses.clear();

        self.commit(next, vec![GameEvent::Gold { amount: reward }])
    }

    /// Start over from defaults. Unconditional.
    pub fn restart_game(&mut self) -> GameResult<Outcome> {
        log::info!("restarting game");
        let next = GameState::fresh(self.config.max_health);
        self.commit(next, vec![GameEvent::ViewReset])
    }

    /// Erase the save slot. The live state becomes what the next load
    /// would produce; nothing is written back.
    pub fn wipe_data(&mut self, confirm: &mut dyn Confirm) -> GameResult<Outcome> {
        if !confirm.confirm(WIPE_DATA_PROMPT) {
            log::info!("wipe declined");
            return Err(GameError::Declined { action: "wipe_data" });
        }

        self.slot.remove(&self.config.slot_key)?;
        self.state = GameState::fresh(self.config.max_health);
        log::info!("save {:?} wiped", self.config.slot_key);

        Ok(Outcome {
            state:  self.state.clone(),
            events: vec![GameEvent::ViewReset],
        })
    }

    /// Dispatch a serialized player command.
    pub fn execute(&mut self, command: PlayerCommand) -> GameResult<Outcome> {
        match command {
            PlayerCommand::AddExpense { name, amount, category } => {
                self.add_expense(&name, &amount, category)
            }
            PlayerCommand::DeleteExpense { id } => self.delete_expense(id),
            PlayerCommand::BuyPotion => self.buy_potion(),
            PlayerCommand::ResetDay { confirmed } => self.reset_day(&mut Preset(confirmed)),
            PlayerCommand::RestartGame => self.restart_game(),
            PlayerCommand::WipeData { confirmed } => self.wipe_data(&mut Preset(confirmed)),
        }
    }

    fn commit(&mut self, next: GameState, events: Vec<GameEvent>) -> GameResult<Outcome> {
        let json = serde_json::to_string(&next)?;
        self.slot.write(&self.config.slot_key, &json)?;
        self.state = next;

        log::debug!(
            "committed: health={:.1} currency={} expenses={} events=[{}]",
            self.state.health,
            self.state.currency,
            self.state.expenses.len(),
            events.iter().map(GameEvent::type_name).collect::<Vec<_>>().join(",")
        );

        Ok(Outcome {
            state: self.state.clone(),
            events,
        })
    }
}
