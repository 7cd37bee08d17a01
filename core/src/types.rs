//! Shared primitive types used across the game core.

/// Stable identifier of a logged expense. Millisecond creation timestamp,
/// bumped so ids stay strictly increasing within a session.
pub type ExpenseId = u64;

/// Health points. Always kept in [0, max_health].
pub type Health = f64;

/// Gold earned by surviving days.
pub type Currency = u64;
