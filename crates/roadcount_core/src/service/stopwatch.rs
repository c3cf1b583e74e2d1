//! Session stopwatch state machine.
//!
//! # Responsibility
//! - Track elapsed survey time in fixed cooperative ticks.
//! - Make start and reset explicit, guarded transitions.
//!
//! # Invariants
//! - `elapsed_ms` only advances while the stopwatch is running.
//! - Reset restores `(Idle, 0)` and cancels the tick schedule.
//! - There is no pause transition; only reset stops a running stopwatch.

use crate::service::ticker::TickHandle;

/// Fixed tick period in milliseconds.
pub const TICK_PERIOD_MS: u64 = 10;

/// Stopwatch lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopwatchPhase {
    /// Created or reset; not accumulating time.
    Idle,
    /// Accumulating time in fixed ticks.
    Running,
}

/// Tick-driven stopwatch for one survey session.
///
/// The stopwatch never schedules anything itself: the host timer delivers
/// ticks cooperatively and observes the issued `TickHandle` to know when
/// to stop firing.
#[derive(Debug)]
pub struct Stopwatch {
    phase: StopwatchPhase,
    elapsed_ms: u64,
    tick: Option<TickHandle>,
}

impl Stopwatch {
    /// Creates an idle stopwatch at zero elapsed time.
    pub fn new() -> Self {
        Self {
            phase: StopwatchPhase::Idle,
            elapsed_ms: 0,
            tick: None,
        }
    }

    /// Returns the current lifecycle phase.
    pub fn phase(&self) -> StopwatchPhase {
        self.phase
    }

    /// Returns whether the stopwatch is accumulating time.
    pub fn is_running(&self) -> bool {
        self.phase == StopwatchPhase::Running
    }

    /// Returns accumulated elapsed time in milliseconds.
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Starts the stopwatch and returns the tick-schedule handle.
    ///
    /// Starting while already running keeps the existing schedule and
    /// returns its handle unchanged, so repeated triggers never restart
    /// or double-schedule the tick.
    pub fn start(&mut self) -> TickHandle {
        if self.is_running() {
            if let Some(handle) = &self.tick {
                return handle.clone();
            }
        }
        let handle = TickHandle::issue();
        self.tick = Some(handle.clone());
        self.phase = StopwatchPhase::Running;
        handle
    }

    /// Advances elapsed time by one tick period.
    ///
    /// Ignored while idle and after the schedule was cancelled, so a late
    /// tick from a torn-down host timer cannot advance a reset session.
    pub fn tick(&mut self) {
        if !self.is_running() {
            return;
        }
        if !self.tick.as_ref().is_some_and(TickHandle::is_live) {
            return;
        }
        self.elapsed_ms += TICK_PERIOD_MS;
    }

    /// Cancels the tick schedule and restores `(Idle, 0)`. Idempotent.
    pub fn reset(&mut self) {
        if let Some(handle) = self.tick.take() {
            handle.cancel();
        }
        self.phase = StopwatchPhase::Idle;
        self.elapsed_ms = 0;
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Stopwatch {
    fn drop(&mut self) {
        // A session view torn down without reset must not leave a host
        // timer believing its schedule is still live.
        if let Some(handle) = self.tick.take() {
            handle.cancel();
        }
    }
}

/// Formats elapsed milliseconds as `HH:MM:SS:mmm`.
///
/// Pure function of its input. Hours widen past two digits instead of
/// wrapping; minutes and seconds are two digits, milliseconds three.
pub fn format_elapsed(elapsed_ms: u64) -> String {
    let millis = elapsed_ms % 1_000;
    let seconds = (elapsed_ms / 1_000) % 60;
    let minutes = (elapsed_ms / 60_000) % 60;
    let hours = elapsed_ms / 3_600_000;
    format!("{hours:02}:{minutes:02}:{seconds:02}:{millis:03}")
}
