use crate::types::{Currency, Health};
use serde::{Deserialize, Serialize};

/// Tunable economy and presentation constants.
///
/// Every field has a default so a partial `game.json` is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cap on the summed amount of expenses accepted per day.
    pub daily_limit: f64,
    /// Damage and refund multiplier for `want` expenses.
    pub want_multiplier: f64,
    pub max_health: Health,
    pub potion_price: Currency,
    pub potion_heal: Health,
    /// Gold granted for surviving a day.
    pub daily_reward: Currency,
    /// Key of the persisted save slot.
    pub slot_key: String,
    /// Damage above which the screen shakes regardless of category.
    pub shake_threshold: f64,
    pub cue_duration_ms: u64,
    pub shake_duration_ms: u64,
    /// Floating text is offset horizontally by a value in [-jitter_px, jitter_px).
    pub jitter_px: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            daily_limit:       50.0,
            want_multiplier:   1.5,
            max_health:        100.0,
            potion_price:      50,
            potion_heal:       20.0,
            daily_reward:      10,
            slot_key:          "stashDashData".into(),
            shake_threshold:   20.0,
            cue_duration_ms:   1000,
            shake_duration_ms: 500,
            jitter_px:         20,
        }
    }
}

impl GameConfig {
    /// Load from `{data_dir}/game.json`.
    /// In tests, use GameConfig::default().
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let path = format!("{data_dir}/game.json");
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: GameConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if !(self.daily_limit.is_finite() && self.daily_limit > 0.0) {
            anyhow::bail!("daily_limit must be positive, got {}", self.daily_limit);
        }
        if !(self.max_health.is_finite() && self.max_health > 0.0) {
            anyhow::bail!("max_health must be positive, got {}", self.max_health);
        }
        if self.want_multiplier < 1.0 {
            anyhow::bail!("want_multiplier must be >= 1.0, got {}", self.want_multiplier);
        }
        if self.slot_key.is_empty() {
            anyhow::bail!("slot_key must not be empty");
        }
        Ok(())
    }
}
