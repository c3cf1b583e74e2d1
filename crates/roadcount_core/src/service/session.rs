//! Survey session use-case service.
//!
//! # Responsibility
//! - Own one tally sheet and one stopwatch with a shared lifecycle.
//! - Enforce the first-record-starts-the-stopwatch transition in core.
//! - Resolve export file names against session policy.
//!
//! # Invariants
//! - Reset clears counts and stopwatch together.
//! - The stopwatch is started at most once between resets.
//! - A session with the stopwatch disabled never leaves `Idle`.

use crate::export::share::{resolve_file_name, FilenamePolicy};
use crate::export::ExportResult;
use crate::model::tally::TallySheet;
use crate::model::vehicle::VehicleClass;
use crate::service::stopwatch::Stopwatch;
use crate::service::ticker::TickHandle;
use serde::{Deserialize, Serialize};

/// Behavior switches covering the reference UI variants.
///
/// Both variants of the app share this one core: with or without the
/// stopwatch, and with a mandatory file name prompt or a fixed default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Whether the first record starts the elapsed-time stopwatch.
    pub stopwatch_enabled: bool,
    /// How export file names are resolved.
    pub filename_policy: FilenamePolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            stopwatch_enabled: true,
            filename_policy: FilenamePolicy::Required,
        }
    }
}

impl SessionConfig {
    /// Variant without stopwatch or file name prompt; exports fall back
    /// to `default_name`.
    pub fn counter_only(default_name: impl Into<String>) -> Self {
        Self {
            stopwatch_enabled: false,
            filename_policy: FilenamePolicy::DefaultTo(default_name.into()),
        }
    }
}

/// Result of recording one observation.
#[derive(Debug)]
pub struct RecordOutcome {
    /// Updated count for the recorded class.
    pub count: u64,
    /// Set when this record started the stopwatch. The host timer should
    /// begin delivering ticks and stop once the handle goes dead.
    pub started_ticks: Option<TickHandle>,
}

/// One display row of a session snapshot, in survey order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotRow {
    /// Recorded class.
    pub class: VehicleClass,
    /// Current count for the class.
    pub count: u64,
}

/// Read-only projection of session state for host display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    /// Per-class rows in survey order.
    pub rows: Vec<SnapshotRow>,
    /// Accumulated stopwatch time in milliseconds.
    pub elapsed_ms: u64,
    /// Whether the stopwatch is currently accumulating.
    pub running: bool,
}

/// One counting session: per-class counts plus elapsed time with a
/// shared reset lifecycle.
#[derive(Debug)]
pub struct SurveySession {
    config: SessionConfig,
    sheet: TallySheet,
    stopwatch: Stopwatch,
}

impl SurveySession {
    /// Creates a fresh session for `config` with all state zeroed.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            sheet: TallySheet::new(),
            stopwatch: Stopwatch::new(),
        }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns the current tally sheet.
    pub fn sheet(&self) -> &TallySheet {
        &self.sheet
    }

    /// Returns accumulated stopwatch time in milliseconds.
    pub fn elapsed_ms(&self) -> u64 {
        self.stopwatch.elapsed_ms()
    }

    /// Returns whether the stopwatch is accumulating.
    pub fn is_running(&self) -> bool {
        self.stopwatch.is_running()
    }

    /// Records one observation of `class`.
    ///
    /// # Contract
    /// - The class count increases by exactly one; other counts are
    ///   untouched.
    /// - When the stopwatch is enabled and idle, this record starts it
    ///   and the outcome carries the issued tick handle. Any later record
    ///   leaves the running schedule alone.
    pub fn record(&mut self, class: VehicleClass) -> RecordOutcome {
        let count = self.sheet.increment(class);
        let started_ticks = if self.config.stopwatch_enabled && !self.stopwatch.is_running() {
            Some(self.stopwatch.start())
        } else {
            None
        };
        RecordOutcome {
            count,
            started_ticks,
        }
    }

    /// Advances the stopwatch by one tick period.
    pub fn tick(&mut self) {
        self.stopwatch.tick();
    }

    /// Clears counts and stopwatch together. Unconditional.
    pub fn reset(&mut self) {
        self.sheet.reset();
        self.stopwatch.reset();
    }

    /// Builds a read-only snapshot for host display.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            rows: self
                .sheet
                .rows()
                .map(|(class, count)| SnapshotRow { class, count })
                .collect(),
            elapsed_ms: self.stopwatch.elapsed_ms(),
            running: self.stopwatch.is_running(),
        }
    }

    /// Resolves a raw export file name against the session policy.
    ///
    /// # Errors
    /// - `ExportError::MissingFilename` when the name is blank and the
    ///   policy requires one.
    /// - `ExportError::InvalidFileName` when the name cannot be used as a
    ///   plain file name in the transient directory.
    pub fn resolve_file_name(&self, raw: &str) -> ExportResult<String> {
        resolve_file_name(raw, &self.config.filename_policy)
    }
}
