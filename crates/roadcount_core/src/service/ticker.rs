//! Cooperative tick scheduling with explicit cancellation.
//!
//! # Responsibility
//! - Hand out cancellation handles for host-driven repeating ticks.
//! - Guarantee ticks delivered after cancellation can be dropped.
//!
//! # Invariants
//! - `cancel` is idempotent.
//! - A cancelled handle never becomes live again.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cancellation handle for one repeating tick schedule.
///
/// The host timer keeps a clone and checks `is_live` before delivering a
/// tick; the stopwatch cancels its clone on reset or teardown, so a timer
/// that outlives the session delivers nothing. The flag is atomic because
/// FFI sync calls may arrive from host worker threads.
#[derive(Debug, Clone)]
pub struct TickHandle {
    live: Arc<AtomicBool>,
}

impl TickHandle {
    /// Issues a live handle for a freshly started schedule.
    pub fn issue() -> Self {
        Self {
            live: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Returns whether the schedule may still deliver ticks.
    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    /// Stops the schedule. Idempotent.
    pub fn cancel(&self) {
        self.live.store(false, Ordering::Release);
    }
}
