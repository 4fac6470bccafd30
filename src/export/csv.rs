//! CSV export functionality
//!
//! Produces exactly two records: the labels as a header line and the values
//! as a data line. Quoting follows standard CSV rules via the csv crate, so
//! labels or values containing commas, quotes, or newlines round-trip
//! correctly instead of being naively joined.

use std::io::Write;

use crate::error::{ReportError, ReportResult};
use crate::reports::FlatRow;

/// Write a flattened report as CSV
///
/// An empty row writes nothing and succeeds; exporting before a report is
/// loaded is not an error.
pub fn write_csv<W: Write>(row: &FlatRow, writer: W) -> ReportResult<()> {
    if row.is_empty() {
        return Ok(());
    }

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(row.labels())?;
    csv_writer.write_record(row.values().map(|value| value.to_string()))?;
    csv_writer
        .flush()
        .map_err(|e| ReportError::Export(e.to_string()))?;

    Ok(())
}

/// Encode a flattened report as a CSV string
pub fn csv_string(row: &FlatRow) -> ReportResult<String> {
    let mut buffer = Vec::new();
    write_csv(row, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| ReportError::Export(e.to_string()))
}
