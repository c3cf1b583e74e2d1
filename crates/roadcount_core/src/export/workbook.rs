//! XLSX workbook encoding for export records.
//!
//! # Responsibility
//! - Encode an export record as a single-worksheet XLSX workbook.
//! - Provide the base64 transport form used by string filesystem bridges.
//!
//! # Invariants
//! - Worksheet layout is a `Vehicle | Count` header plus one row per class.
//! - Encoding only reads the record; it never touches storage.

use crate::export::record::ExportRecord;
use crate::export::ExportResult;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use rust_xlsxwriter::Workbook;

/// Worksheet name of the exported workbook.
pub const EXPORT_SHEET_NAME: &str = "Vehicle Count";
/// Header label of the vehicle class column.
pub const EXPORT_HEADER_VEHICLE: &str = "Vehicle";
/// Header label of the count column.
pub const EXPORT_HEADER_COUNT: &str = "Count";

/// Encodes `record` as a one-worksheet XLSX workbook.
///
/// # Errors
/// - `ExportError::Workbook` when the XLSX writer rejects the layout or
///   fails to serialize the workbook buffer.
pub fn encode_workbook(record: &ExportRecord) -> ExportResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(EXPORT_SHEET_NAME)?;
    worksheet.write(0, 0, EXPORT_HEADER_VEHICLE)?;
    worksheet.write(0, 1, EXPORT_HEADER_COUNT)?;

    for (offset, row) in record.rows().iter().enumerate() {
        let sheet_row = offset as u32 + 1;
        worksheet.write(sheet_row, 0, row.vehicle.as_str())?;
        worksheet.write(sheet_row, 1, row.count)?;
    }

    Ok(workbook.save_to_buffer()?)
}

/// Encodes raw workbook bytes for string-based filesystem transports.
///
/// Some host filesystem bridges persist file content as strings; the
/// reference transport is standard base64.
pub fn to_transport_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}
