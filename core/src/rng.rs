//! Deterministic random number generation for feedback jitter.
//!
//! RULE: Nothing in the core calls a platform RNG.
//! Jitter flows through a CueRng seeded once by the host, so a replayed
//! command stream renders identically.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

pub struct CueRng {
    inner: Pcg64Mcg,
}

impl CueRng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Roll an i32 in [-spread, spread). Zero spread always yields 0.
    pub fn jitter(&mut self, spread: i32) -> i32 {
        if spread <= 0 {
            return 0;
        }
        let width = 2 * spread as u64;
        (self.inner.next_u64() % width) as i32 - spread
    }
}
