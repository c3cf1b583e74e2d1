//! Domain model for road survey tallies.
//!
//! # Responsibility
//! - Define the closed vehicle class catalogue and per-class counts.
//! - Keep count state unrepresentable-invalid (no unknown keys, no
//!   negative counts).
//!
//! # Invariants
//! - `VehicleClass::ALL` is the single source of survey ordering.
//! - Every class owns exactly one count slot for the session lifetime.

pub mod tally;
pub mod vehicle;
