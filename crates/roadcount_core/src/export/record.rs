//! Ordered export projection of session counts.
//!
//! # Responsibility
//! - Snapshot current counts as `(vehicle, count)` rows in survey order.
//!
//! # Invariants
//! - A record always holds exactly one row per configured class.
//! - Records are regenerated per export and never mutated.

use crate::model::tally::TallySheet;
use serde::Serialize;

/// One `(vehicle, count)` row of the export sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    /// Stable class label written to the `Vehicle` column.
    pub vehicle: String,
    /// Recorded count written to the `Count` column.
    pub count: u64,
}

/// Read-only, ordered projection of one tally snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRecord {
    rows: Vec<ExportRow>,
}

impl ExportRecord {
    /// Returns the rows in survey order.
    pub fn rows(&self) -> &[ExportRow] {
        &self.rows
    }
}

/// Projects `sheet` over every configured class in survey order.
///
/// # Contract
/// - Always yields exactly `VehicleClass::COUNT` rows.
/// - Row order matches `VehicleClass::ALL`.
/// - Classes that were never recorded appear with count zero.
pub fn build_export_record(sheet: &TallySheet) -> ExportRecord {
    let rows = sheet
        .rows()
        .map(|(class, count)| ExportRow {
            vehicle: class.label().to_string(),
            count,
        })
        .collect();
    ExportRecord { rows }
}
