//! Core domain logic for RoadCount.
//! This crate is the single source of truth for tally, stopwatch and
//! export invariants.

pub mod export;
pub mod logging;
pub mod model;
pub mod service;

pub use export::{
    build_export_record, encode_workbook, export_and_share, resolve_file_name,
    to_transport_base64, write_export_file, ExportError, ExportRecord, ExportResult, ExportRow,
    FilenamePolicy, ShareSurface, DEFAULT_EXPORT_FILE_NAME, EXPORT_SHEET_NAME,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::tally::TallySheet;
pub use model::vehicle::{VehicleClass, VehicleLabelError};
pub use service::session::{
    RecordOutcome, SessionConfig, SessionSnapshot, SnapshotRow, SurveySession,
};
pub use service::stopwatch::{format_elapsed, Stopwatch, StopwatchPhase, TICK_PERIOD_MS};
pub use service::ticker::TickHandle;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
