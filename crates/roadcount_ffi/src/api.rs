//! FFI use-case API for the RoadCount host UI.
//!
//! # Responsibility
//! - Expose session tally, stopwatch and export operations to Dart via FRB.
//! - Keep error semantics envelope-shaped for the UI layer.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Session state is process-global and only mutated under one lock.

use log::info;
use roadcount_core::{
    core_version as core_version_inner, export_and_share, format_elapsed,
    init_logging as init_logging_inner, ping as ping_inner, to_transport_base64,
    ExportResult, FilenamePolicy, SessionConfig, ShareSurface, SurveySession, VehicleClass,
    DEFAULT_EXPORT_FILE_NAME, TICK_PERIOD_MS,
};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

static SESSION: OnceLock<Mutex<SurveySession>> = OnceLock::new();

fn session() -> MutexGuard<'static, SurveySession> {
    SESSION
        .get_or_init(|| Mutex::new(SurveySession::new(SessionConfig::default())))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Share handoff for FRB hosts: the Dart layer receives the written path
/// from the envelope and invokes the platform share sheet itself.
struct DeferredShare;

impl ShareSurface for DeferredShare {
    fn share(&self, path: &Path) -> ExportResult<()> {
        info!(
            "event=share_deferred module=ffi status=ok path={}",
            path.display()
        );
        Ok(())
    }
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same configuration (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Returns the fixed stopwatch tick period in milliseconds.
///
/// The host periodic timer should fire `session_tick` at this interval
/// while the stopwatch runs.
///
/// # FFI contract
/// - Sync call, non-blocking, never throws.
#[flutter_rust_bridge::frb(sync)]
pub fn tick_period_ms() -> u64 {
    TICK_PERIOD_MS
}

/// Generic action response envelope for session commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl SessionActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }
}

/// Record envelope: updated count plus stopwatch activation info.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordResponse {
    /// Whether the record was applied.
    pub ok: bool,
    /// Updated count for the recorded class (0 on failure).
    pub count: u64,
    /// True when this record started the session stopwatch; the host
    /// should begin its periodic tick timer.
    pub stopwatch_started: bool,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl RecordResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            count: 0,
            stopwatch_started: false,
            message: message.into(),
        }
    }
}

/// One tally row for host display, in survey order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallyRowView {
    /// Stable class label.
    pub label: String,
    /// Display glyph for the class button.
    pub glyph: String,
    /// Current count.
    pub count: u64,
}

/// Snapshot envelope for host re-render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshotResponse {
    /// Per-class rows in survey order.
    pub rows: Vec<TallyRowView>,
    /// Accumulated stopwatch milliseconds.
    pub elapsed_ms: u64,
    /// Preformatted `HH:MM:SS:mmm` display label.
    pub elapsed_label: String,
    /// Whether the stopwatch is accumulating.
    pub running: bool,
}

/// Export envelope: written file path for the platform share sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResponse {
    /// Whether the export pipeline completed.
    pub ok: bool,
    /// Path of the written workbook, ready for the share action.
    pub file_path: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ExportResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            file_path: None,
            message: message.into(),
        }
    }
}

/// Export payload envelope for string filesystem bridges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayloadResponse {
    /// Whether encoding succeeded.
    pub ok: bool,
    /// Resolved file name including the `.xlsx` extension.
    pub file_name: Option<String>,
    /// Base64 workbook payload.
    pub payload_base64: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ExportPayloadResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            file_name: None,
            payload_base64: None,
            message: message.into(),
        }
    }
}

/// Applies a session configuration variant and resets all state.
///
/// `default_file_name = None` keeps the mandatory file name prompt;
/// `Some(name)` switches exports to a fixed fallback name (blank input
/// falls back to the built-in default).
///
/// # FFI contract
/// - Sync call, never panics.
/// - Always succeeds; the new session starts zeroed.
#[flutter_rust_bridge::frb(sync)]
pub fn session_configure(
    stopwatch_enabled: bool,
    default_file_name: Option<String>,
) -> SessionActionResponse {
    let filename_policy = match default_file_name {
        Some(name) if !name.trim().is_empty() => FilenamePolicy::DefaultTo(name.trim().to_string()),
        Some(_) => FilenamePolicy::DefaultTo(DEFAULT_EXPORT_FILE_NAME.to_string()),
        None => FilenamePolicy::Required,
    };
    let config = SessionConfig {
        stopwatch_enabled,
        filename_policy,
    };
    *session() = SurveySession::new(config);
    SessionActionResponse::success("Session configured.")
}

/// Records one vehicle observation by class label.
///
/// # FFI contract
/// - Sync call, never panics.
/// - Unknown labels fail the envelope without touching session state.
#[flutter_rust_bridge::frb(sync)]
pub fn session_record(vehicle: String) -> RecordResponse {
    let class = match VehicleClass::from_label(vehicle.as_str()) {
        Ok(class) => class,
        Err(err) => return RecordResponse::failure(format!("session_record failed: {err}")),
    };
    let outcome = session().record(class);
    RecordResponse {
        ok: true,
        count: outcome.count,
        stopwatch_started: outcome.started_ticks.is_some(),
        message: format!("{} recorded.", class.label()),
    }
}

/// Advances the stopwatch by one tick period.
///
/// The host timer calls this every `TICK_PERIOD_MS` milliseconds while
/// the stopwatch runs; late calls after reset are ignored by core.
///
/// # FFI contract
/// - Sync call, never panics.
/// - Returns the preformatted elapsed label for display.
#[flutter_rust_bridge::frb(sync)]
pub fn session_tick() -> String {
    let mut guard = session();
    guard.tick();
    format_elapsed(guard.elapsed_ms())
}

/// Returns the current session snapshot for host re-render.
///
/// # FFI contract
/// - Sync call, never panics.
/// - Rows are always complete and in survey order.
#[flutter_rust_bridge::frb(sync)]
pub fn session_snapshot() -> SessionSnapshotResponse {
    let guard = session();
    let snapshot = guard.snapshot();
    SessionSnapshotResponse {
        rows: snapshot
            .rows
            .iter()
            .map(|row| TallyRowView {
                label: row.class.label().to_string(),
                glyph: row.class.glyph().to_string(),
                count: row.count,
            })
            .collect(),
        elapsed_ms: snapshot.elapsed_ms,
        elapsed_label: format_elapsed(snapshot.elapsed_ms),
        running: snapshot.running,
    }
}

/// Resets counts and stopwatch together.
///
/// # FFI contract
/// - Sync call, never panics.
/// - Unconditional; always succeeds.
#[flutter_rust_bridge::frb(sync)]
pub fn session_reset() -> SessionActionResponse {
    session().reset();
    SessionActionResponse::success("Session reset.")
}

/// Exports current counts as an XLSX file under `share_dir`.
///
/// The returned path is ready for the platform share sheet, which the
/// Dart layer invokes.
///
/// # FFI contract
/// - Sync call, never panics.
/// - Blank file names under a required policy fail before any write.
#[flutter_rust_bridge::frb(sync)]
pub fn session_export(file_name: String, share_dir: String) -> ExportResponse {
    let guard = session();
    let policy = guard.config().filename_policy.clone();
    let outcome = export_and_share(
        guard.sheet(),
        file_name.as_str(),
        &policy,
        Path::new(share_dir.as_str()),
        &DeferredShare,
    );
    match outcome {
        Ok(path) => ExportResponse {
            ok: true,
            file_path: Some(path.display().to_string()),
            message: "Export ready to share.".to_string(),
        },
        Err(err) => ExportResponse::failure(format!("session_export failed: {err}")),
    }
}

/// Encodes current counts as a base64 XLSX payload.
///
/// For hosts that persist files through a string filesystem bridge
/// instead of handing core a directory.
///
/// # FFI contract
/// - Sync call, never panics.
/// - Blank file names under a required policy fail before encoding.
#[flutter_rust_bridge::frb(sync)]
pub fn session_export_payload(file_name: String) -> ExportPayloadResponse {
    let guard = session();
    let resolved = match guard.resolve_file_name(file_name.as_str()) {
        Ok(resolved) => resolved,
        Err(err) => {
            return ExportPayloadResponse::failure(format!("session_export_payload failed: {err}"))
        }
    };
    let record = roadcount_core::build_export_record(guard.sheet());
    drop(guard);
    match roadcount_core::encode_workbook(&record) {
        Ok(bytes) => ExportPayloadResponse {
            ok: true,
            file_name: Some(resolved),
            payload_base64: Some(to_transport_base64(&bytes)),
            message: "Export payload ready.".to_string(),
        },
        Err(err) => ExportPayloadResponse::failure(format!("session_export_payload failed: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, init_logging, ping, session_configure, session_export,
        session_export_payload, session_record, session_reset, session_snapshot, session_tick,
        tick_period_ms,
    };

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn tick_period_is_ten_milliseconds() {
        assert_eq!(tick_period_ms(), 10);
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn session_record_rejects_unknown_label() {
        let response = session_record("Spaceship".to_string());
        assert!(!response.ok);
        assert!(response.message.contains("unknown vehicle class"));
    }

    // The session is process-global, so the full flow lives in one test
    // to keep parallel test threads from interleaving resets.
    #[test]
    fn session_flow_covers_record_tick_export_and_reset() {
        let configured = session_configure(true, None);
        assert!(configured.ok, "{}", configured.message);

        let first = session_record("Bus".to_string());
        assert!(first.ok, "{}", first.message);
        assert_eq!(first.count, 1);
        assert!(first.stopwatch_started);

        let second = session_record("Bus".to_string());
        assert_eq!(second.count, 2);
        assert!(!second.stopwatch_started);

        let elapsed_label = session_tick();
        assert_eq!(elapsed_label, "00:00:00:010");

        let snapshot = session_snapshot();
        assert!(snapshot.running);
        assert_eq!(snapshot.elapsed_ms, 10);
        let bus_row = snapshot
            .rows
            .iter()
            .find(|row| row.label == "Bus")
            .expect("snapshot should contain a Bus row");
        assert_eq!(bus_row.count, 2);

        let missing_name = session_export(String::new(), "/tmp".to_string());
        assert!(!missing_name.ok);
        assert!(missing_name.message.contains("must not be blank"));

        let share_dir = tempfile::tempdir().expect("temp dir should be creatable");
        let exported = session_export(
            "morning-survey".to_string(),
            share_dir.path().display().to_string(),
        );
        assert!(exported.ok, "{}", exported.message);
        let file_path = exported.file_path.expect("export should return a path");
        assert!(file_path.ends_with("morning-survey.xlsx"));

        let payload = session_export_payload("morning-survey".to_string());
        assert!(payload.ok, "{}", payload.message);
        assert_eq!(
            payload.file_name.as_deref(),
            Some("morning-survey.xlsx")
        );
        assert!(!payload.payload_base64.expect("payload should be set").is_empty());

        let reset = session_reset();
        assert!(reset.ok);
        let after_reset = session_snapshot();
        assert!(!after_reset.running);
        assert_eq!(after_reset.elapsed_ms, 0);
        assert!(after_reset.rows.iter().all(|row| row.count == 0));
    }
}
