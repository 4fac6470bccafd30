//! Custom error types for finrep
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for finrep operations
#[derive(Error, Debug)]
pub enum ReportError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Transport-level failures (DNS, connect, timeout, TLS)
    #[error("Network error: {0}")]
    Network(String),

    /// The reporting API answered with a non-success status
    #[error("Failed to fetch {report}: server returned HTTP {status}")]
    BadStatus {
        report: &'static str,
        status: u16,
    },

    /// Date or argument validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Export errors (CSV or workbook)
    #[error("Export error: {0}")]
    Export(String),
}

impl ReportError {
    /// Check if this error came from a non-success HTTP status
    pub fn is_bad_status(&self) -> bool {
        matches!(self, Self::BadStatus { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for ReportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Json(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<rust_xlsxwriter::XlsxError> for ReportError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for finrep operations
pub type ReportResult<T> = Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReportError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_bad_status_error() {
        let err = ReportError::BadStatus {
            report: "balance sheet",
            status: 500,
        };
        assert_eq!(
            err.to_string(),
            "Failed to fetch balance sheet: server returned HTTP 500"
        );
        assert!(err.is_bad_status());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let report_err: ReportError = io_err.into();
        assert!(matches!(report_err, ReportError::Io(_)));
    }
}
