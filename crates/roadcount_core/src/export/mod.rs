//! Export pipeline for shareable tally spreadsheets.
//!
//! # Responsibility
//! - Project session counts into an ordered export record.
//! - Encode the record as a one-worksheet XLSX workbook.
//! - Write encoded bytes into transient storage for the host share action.
//!
//! # Invariants
//! - File name resolution fails before storage is touched.
//! - Export reads session state only; it never mutates it.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

pub mod record;
pub mod share;
pub mod workbook;

pub use record::{build_export_record, ExportRecord, ExportRow};
pub use share::{
    export_and_share, resolve_file_name, write_export_file, FilenamePolicy, ShareSurface,
    DEFAULT_EXPORT_FILE_NAME,
};
pub use workbook::{encode_workbook, to_transport_base64, EXPORT_SHEET_NAME};

/// Result type for export APIs.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors raised by the export pipeline.
#[derive(Debug)]
pub enum ExportError {
    /// File name is blank under a required-name policy.
    MissingFilename,
    /// File name contains path separators or unsupported characters.
    InvalidFileName(String),
    /// Workbook encoding failed.
    Workbook(rust_xlsxwriter::XlsxError),
    /// Storage write or share handoff failed.
    Io(io::Error),
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFilename => write!(f, "export file name must not be blank"),
            Self::InvalidFileName(value) => write!(f, "invalid export file name: `{value}`"),
            Self::Workbook(err) => write!(f, "workbook encoding failed: {err}"),
            Self::Io(err) => write!(f, "export storage write failed: {err}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Workbook(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::MissingFilename | Self::InvalidFileName(_) => None,
        }
    }
}

impl From<rust_xlsxwriter::XlsxError> for ExportError {
    fn from(value: rust_xlsxwriter::XlsxError) -> Self {
        Self::Workbook(value)
    }
}

impl From<io::Error> for ExportError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}
