//! CLI commands for viewing reports
//!
//! Fetches a report for a date range and renders it as a terminal table.

use clap::Args;

use crate::client::ReportClient;
use crate::config::Settings;
use crate::error::ReportResult;
use crate::models::{DateRange, ReportKind};
use crate::view::ReportView;

/// Demo date range served by the reference reporting backend
pub const DEFAULT_START: &str = "2017-01-01";
/// See [`DEFAULT_START`]
pub const DEFAULT_END: &str = "2017-12-31";

/// Date range arguments shared by all report commands
#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Start date (YYYY-MM-DD)
    #[arg(short, long, default_value = DEFAULT_START)]
    pub start: String,

    /// End date (YYYY-MM-DD)
    #[arg(short, long, default_value = DEFAULT_END)]
    pub end: String,
}

impl ReportArgs {
    /// Parse the arguments into a date range
    pub fn range(&self) -> ReportResult<DateRange> {
        DateRange::parse(&self.start, &self.end)
    }
}

/// Fetch and display a report
///
/// A failed fetch renders as an error line; the process still exits cleanly,
/// matching the degrade-to-message behavior of the report views.
pub async fn handle_report_command(
    settings: &Settings,
    kind: ReportKind,
    args: ReportArgs,
) -> ReportResult<()> {
    let range = args.range()?;
    let client = ReportClient::from_settings(settings)?;

    let mut view = ReportView::new(kind, settings.currency_symbol.clone());
    view.refresh(&client, &range).await;

    print!("{}", view.render());
    if view.report().is_some() {
        println!();
        println!("Period: {}", range);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_range_parses() {
        let args = ReportArgs {
            start: DEFAULT_START.to_string(),
            end: DEFAULT_END.to_string(),
        };
        let range = args.range().unwrap();
        assert_eq!(range.to_string(), "2017-01-01 to 2017-12-31");
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let args = ReportArgs {
            start: "yesterday".to_string(),
            end: DEFAULT_END.to_string(),
        };
        assert!(args.range().is_err());
    }
}
