//! File name policy, transient storage write and share handoff.
//!
//! # Responsibility
//! - Resolve and validate user-supplied export file names.
//! - Write encoded workbook bytes into the host's transient directory.
//! - Keep the OS share action behind a host-implemented trait seam.
//!
//! # Invariants
//! - A name that fails resolution aborts the export before any write.
//! - Written files always carry the fixed `.xlsx` extension.
//! - Resolved names cannot escape the target directory.

use crate::export::record::build_export_record;
use crate::export::workbook::encode_workbook;
use crate::export::{ExportError, ExportResult};
use crate::model::tally::TallySheet;
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed extension appended to every resolved export file name.
pub const EXPORT_FILE_EXTENSION: &str = "xlsx";

/// Default base name used by the no-prompt session variant.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "vehicle-count";

static FILE_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ._-]*$").expect("valid file name regex"));

/// Export file name resolution policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilenamePolicy {
    /// A non-blank user-supplied name is mandatory.
    Required,
    /// Blank input falls back to the configured default base name.
    DefaultTo(String),
}

/// Resolves a raw user-supplied file name against `policy`.
///
/// # Contract
/// - Input is trimmed first; blank input under `Required` is rejected,
///   blank input under `DefaultTo` resolves to the configured default.
/// - The resolved base name is validated and gets the fixed `.xlsx`
///   extension appended.
///
/// # Errors
/// - `ExportError::MissingFilename` on blank input under `Required`.
/// - `ExportError::InvalidFileName` when the base name contains path
///   separators, leading dots or other unsupported characters.
pub fn resolve_file_name(raw: &str, policy: &FilenamePolicy) -> ExportResult<String> {
    let trimmed = raw.trim();
    let base = if trimmed.is_empty() {
        match policy {
            FilenamePolicy::Required => return Err(ExportError::MissingFilename),
            FilenamePolicy::DefaultTo(default_name) => default_name.as_str(),
        }
    } else {
        trimmed
    };

    if !FILE_NAME_RE.is_match(base) {
        return Err(ExportError::InvalidFileName(base.to_string()));
    }
    Ok(format!("{base}.{EXPORT_FILE_EXTENSION}"))
}

/// Writes encoded workbook bytes under `dir` and returns the file path.
///
/// `dir` is the host's transient/cache location and is created on demand.
/// Failures map to `ExportError::Io` and are surfaced without retry.
pub fn write_export_file(dir: &Path, file_name: &str, bytes: &[u8]) -> ExportResult<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    fs::write(&path, bytes)?;
    info!(
        "event=export_written module=export status=ok path={} bytes={}",
        path.display(),
        bytes.len()
    );
    Ok(path)
}

/// Host-side share collaborator.
///
/// Core only guarantees correct bytes and a valid path; presenting the
/// platform share sheet is the host's concern.
pub trait ShareSurface {
    /// Hands a written export file to the platform share action.
    fn share(&self, path: &Path) -> ExportResult<()>;
}

/// Runs the full export pipeline: resolve name, project, encode, write,
/// then hand the path to `surface`.
///
/// # Contract
/// - Name resolution failures abort before encoding or storage.
/// - The written path is returned even though `surface` already saw it,
///   so callers can log or re-share it.
pub fn export_and_share(
    sheet: &TallySheet,
    raw_file_name: &str,
    policy: &FilenamePolicy,
    dir: &Path,
    surface: &dyn ShareSurface,
) -> ExportResult<PathBuf> {
    let file_name = match resolve_file_name(raw_file_name, policy) {
        Ok(name) => name,
        Err(err) => {
            warn!("event=export_rejected module=export status=error reason={err}");
            return Err(err);
        }
    };
    let bytes = encode_workbook(&build_export_record(sheet))?;
    let path = write_export_file(dir, &file_name, &bytes)?;
    surface.share(&path)?;
    Ok(path)
}
