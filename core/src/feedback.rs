//! Floating feedback cues for the presentation layer.
//!
//! Each visual event becomes at most one cue: a short text that floats up
//! from the health bar, offset by a small random jitter, optionally with a
//! screen shake. The presentation layer removes it after `duration_ms`.

use crate::{
    config::GameConfig,
    error::GameError,
    event::GameEvent,
    expense::Category,
    rng::CueRng,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Damage,
    Heal,
    Gold,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedbackCue {
    pub text:        String,
    pub tone:        Tone,
    pub x_offset_px: i32,
    /// Shake the game container for this long, if set.
    pub shake_ms:    Option<u64>,
    pub duration_ms: u64,
}

pub struct FeedbackDirector {
    rng:               CueRng,
    jitter_px:         i32,
    shake_threshold:   f64,
    cue_duration_ms:   u64,
    shake_duration_ms: u64,
}

impl FeedbackDirector {
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        Self {
            rng:               CueRng::new(seed),
            jitter_px:         config.jitter_px,
            shake_threshold:   config.shake_threshold,
            cue_duration_ms:   config.cue_duration_ms,
            shake_duration_ms: config.shake_duration_ms,
        }
    }

    pub fn cues_for(&mut self, events: &[GameEvent]) -> Vec<FeedbackCue> {
        events.iter().filter_map(|e| self.cue_for(e)).collect()
    }

    /// Cue for a refused action that carries a visual signal.
    pub fn cue_for_error(&mut self, err: &GameError) -> Option<FeedbackCue> {
        err.signal().and_then(|event| self.cue_for(&event))
    }

    pub fn cue_for(&mut self, event: &GameEvent) -> Option<FeedbackCue> {
        let (text, tone, shake) = match event {
            GameEvent::Damage { amount, damage, category } => (
                format!("-{amount}"),
                Tone::Damage,
                *category == Category::Want || *damage > self.shake_threshold,
            ),
            GameEvent::Heal { amount } => (format!("+{amount}"), Tone::Heal, false),
            GameEvent::Gold { amount } => (format!("+{amount} Gold"), Tone::Gold, false),
            GameEvent::SpendBlocked { .. } => ("-0".to_string(), Tone::Damage, true),
            GameEvent::Defeated | GameEvent::ViewReset => return None,
        };

        Some(FeedbackCue {
            text,
            tone,
            x_offset_px: self.rng.jitter(self.jitter_px),
            shake_ms:    shake.then_some(self.shake_duration_ms),
            duration_ms: self.cue_duration_ms,
        })
    }
}
