//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the client and export layers.

pub mod export;
pub mod report;

pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use report::{handle_report_command, ReportArgs};
