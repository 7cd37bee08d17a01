//! Confirmation capability.
//!
//! Destructive actions (ending the day, wiping the save) ask an injected
//! Confirm before touching state. The store stays testable without a
//! display surface.

pub trait Confirm {
    /// Show `prompt` and return true if the player accepted.
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// A fixed answer, e.g. a `confirmed` flag that arrived with a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset(pub bool);

impl Confirm for Preset {
    fn confirm(&mut self, prompt: &str) -> bool {
        log::debug!("preset answer {} to {prompt:?}", self.0);
        self.0
    }
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}
