//! Stash-Dash core: a budget-survival game state store.
//!
//! Logged expenses damage a health bar, wants hit harder, surviving a day
//! pays gold, gold buys potions. Everything here is synchronous and
//! single-threaded; rendering lives outside this crate.

pub mod clock;
pub mod command;
pub mod config;
pub mod confirm;
pub mod engine;
pub mod error;
pub mod event;
pub mod expense;
pub mod feedback;
pub mod rng;
pub mod slot;
pub mod state;
pub mod store;
pub mod types;
pub mod view;

pub use engine::{GameStateStore, Outcome};
pub use error::{GameError, GameResult};
