//! Export module for finrep
//!
//! Serializes a flattened report row into downloadable formats:
//! - CSV: header line of labels, one data line of values
//! - XLSX: single-sheet workbook, labels in row 1, values in row 2
//!
//! Encoding is pure; writing files is left to the CLI handlers. An empty
//! row (no report loaded) is always a silent no-op.

pub mod csv;
pub mod xlsx;

pub use csv::{csv_string, write_csv};
pub use xlsx::{write_xlsx, xlsx_bytes};
