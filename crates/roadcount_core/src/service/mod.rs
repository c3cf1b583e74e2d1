//! Survey session use-case services.
//!
//! # Responsibility
//! - Drive tally and stopwatch state through explicit, guarded transitions.
//! - Keep the counter/stopwatch coupling inside core, not the UI layer.
//!
//! # Invariants
//! - Counter and stopwatch share one reset lifecycle.
//! - The stopwatch starts at most once between resets.

pub mod session;
pub mod stopwatch;
pub mod ticker;
