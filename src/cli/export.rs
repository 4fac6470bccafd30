//! CLI commands for report export
//!
//! Fetches a report and writes it to a CSV file or an XLSX workbook. The
//! encoders themselves are pure; this handler owns the file side effect.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::client::ReportClient;
use crate::config::Settings;
use crate::error::{ReportError, ReportResult};
use crate::export::{write_csv, write_xlsx};
use crate::models::ReportKind;
use crate::reports::flatten;

use super::report::ReportArgs;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated text, header line plus one data line
    Csv,
    /// Single-sheet spreadsheet workbook
    Xlsx,
}

impl ExportFormat {
    /// File extension for this format
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
        }
    }
}

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Report to export
    #[arg(value_enum)]
    pub kind: ReportKind,

    #[command(flatten)]
    pub report: ReportArgs,

    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Output file path (defaults to <report>.<format> in the current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ExportArgs {
    /// Resolve the output path, deriving the default name from the report kind
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            PathBuf::from(format!(
                "{}.{}",
                self.kind.file_stem(),
                self.format.extension()
            ))
        })
    }
}

/// Fetch a report and export it
pub async fn handle_export_command(settings: &Settings, args: ExportArgs) -> ReportResult<()> {
    let range = args.report.range()?;
    let client = ReportClient::from_settings(settings)?;

    let report = client.fetch(args.kind, &range).await?;
    let row = flatten(Some(&report));
    let path = args.output_path();

    match args.format {
        ExportFormat::Csv => {
            let file = File::create(&path).map_err(|e| {
                ReportError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            write_csv(&row, BufWriter::new(file))?;
        }
        ExportFormat::Xlsx => {
            write_xlsx(&row, args.kind.title(), &path)?;
        }
    }

    println!("{} exported to: {}", args.kind.title(), path.display());
    Ok(())
}
