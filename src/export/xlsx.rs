//! Spreadsheet (XLSX) export functionality
//!
//! Builds a single-sheet workbook with labels in row 1 and the matching
//! values in row 2, column order identical to the flattened row.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use crate::error::{ReportError, ReportResult};
use crate::reports::{CellValue, FlatRow};

/// Encode a flattened report as XLSX bytes
///
/// Returns `None` for an empty row: no workbook is produced and no error is
/// raised when no report has been loaded yet.
pub fn xlsx_bytes(row: &FlatRow, sheet_name: &str) -> ReportResult<Option<Vec<u8>>> {
    if row.is_empty() {
        return Ok(None);
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    let header_format = Format::new().set_bold();

    for (col, (label, value)) in row.cells.iter().enumerate() {
        let col = col as u16;
        worksheet.write_with_format(0, col, *label, &header_format)?;
        match value {
            CellValue::Number(n) => worksheet.write_number(1, col, *n)?,
            CellValue::Text(s) => worksheet.write_string(1, col, s)?,
        };
    }

    Ok(Some(workbook.save_to_buffer()?))
}

/// Write a flattened report to an XLSX file
///
/// Returns whether a file was produced; an empty row produces none.
pub fn write_xlsx(row: &FlatRow, sheet_name: &str, path: &Path) -> ReportResult<bool> {
    match xlsx_bytes(row, sheet_name)? {
        Some(bytes) => {
            std::fs::write(path, bytes).map_err(|e| {
                ReportError::Export(format!("Failed to write {}: {}", path.display(), e))
            })?;
            Ok(true)
        }
        None => Ok(false),
    }
}
