//! Date range for report queries
//!
//! A report always covers an inclusive start/end range. The range is passed
//! through to the reporting API as `start`/`end` query parameters; whether
//! end >= start is left for the server to decide.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ReportError, ReportResult};

/// Date format used on the wire and accepted from the CLI
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// An inclusive date range driving a report query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day covered by the report
    pub start: NaiveDate,
    /// Last day covered by the report
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a range from two dates
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Parse a range from CLI-style `YYYY-MM-DD` strings
    pub fn parse(start: &str, end: &str) -> ReportResult<Self> {
        let start = parse_date(start)?;
        let end = parse_date(end)?;
        Ok(Self { start, end })
    }

    /// Query parameters for the reporting API
    pub fn query(&self) -> [(&'static str, String); 2] {
        [
            ("start", self.start.format(DATE_FORMAT).to_string()),
            ("end", self.end.format(DATE_FORMAT).to_string()),
        ]
    }
}

fn parse_date(s: &str) -> ReportResult<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|_| ReportError::Validation(format!("Invalid date '{}': expected YYYY-MM-DD", s)))
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}",
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT)
        )
    }
}
