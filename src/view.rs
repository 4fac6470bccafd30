//! Generic report view
//!
//! One view type covers both report kinds, parameterized by [`ReportKind`];
//! it owns the loading / error / data state for a single report and renders
//! whichever applies. State is replaced wholesale on every completed fetch.
//!
//! Fetches are sequenced with a monotonically increasing ticket. A
//! completion carrying any ticket older than the latest issued one is
//! discarded, so when the date range changes while a request is still
//! outstanding, only the most recently requested range can land in view
//! state. The superseded request is not aborted, merely ignored.

use crate::client::ReportClient;
use crate::display::format_report;
use crate::error::ReportResult;
use crate::models::{DateRange, Report, ReportKind};
use crate::reports::{flatten, FlatRow};

/// View state for one report kind
#[derive(Debug, Clone)]
pub struct ReportView {
    kind: ReportKind,
    currency: String,
    report: Option<Report>,
    error: Option<String>,
    loading: bool,
    issued: u64,
}

impl ReportView {
    /// Create an empty view for `kind`
    pub fn new(kind: ReportKind, currency: impl Into<String>) -> Self {
        Self {
            kind,
            currency: currency.into(),
            report: None,
            error: None,
            loading: false,
            issued: 0,
        }
    }

    /// The kind this view displays
    pub fn kind(&self) -> ReportKind {
        self.kind
    }

    /// Whether a fetch is outstanding
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The current error message, if the last completed fetch failed
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The currently displayed report, if one has loaded
    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    /// Start a fetch and return its ticket
    ///
    /// Issuing a new ticket supersedes every earlier one.
    pub fn begin_fetch(&mut self) -> u64 {
        self.issued += 1;
        self.loading = true;
        self.issued
    }

    /// Apply a completed fetch
    ///
    /// Returns false when `ticket` is stale (a newer fetch was issued since),
    /// in which case the result is discarded and state is untouched. A fresh
    /// failure records the error message and always clears the loading flag.
    pub fn apply(&mut self, ticket: u64, result: ReportResult<Report>) -> bool {
        if ticket != self.issued {
            return false;
        }
        self.loading = false;
        match result {
            Ok(report) => {
                self.error = None;
                self.report = Some(report);
            }
            Err(err) => {
                self.error = Some(err.to_string());
            }
        }
        true
    }

    /// Fetch the report for `range` and apply the outcome
    pub async fn refresh(&mut self, client: &ReportClient, range: &DateRange) -> bool {
        let ticket = self.begin_fetch();
        let result = client.fetch(self.kind, range).await;
        self.apply(ticket, result)
    }

    /// Flatten the displayed report for export (empty when none is loaded)
    pub fn flat_row(&self) -> FlatRow {
        flatten(self.report.as_ref())
    }

    /// Render the view: loading notice, error, table, or placeholder
    pub fn render(&self) -> String {
        if self.loading {
            return format!("Loading {}...\n", self.kind.noun());
        }
        if let Some(error) = &self.error {
            return format!("Error: {}\n", error);
        }
        match &self.report {
            Some(report) => format_report(report, &self.currency),
            None => "No data available.\n".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReportError;
    use crate::reports::fixtures::{sample_balance, sample_pnl};

    fn http_500() -> ReportError {
        ReportError::BadStatus {
            report: "balance sheet",
            status: 500,
        }
    }

    #[test]
    fn test_successful_fetch_displays_report() {
        let mut view = ReportView::new(ReportKind::Balance, "€");
        let ticket = view.begin_fetch();
        assert!(view.is_loading());
        assert!(view.render().contains("Loading balance sheet..."));

        assert!(view.apply(ticket, Ok(Report::Balance(sample_balance()))));
        assert!(!view.is_loading());
        assert!(view.error().is_none());
        assert!(view.render().contains("Total Assets"));
    }

    #[test]
    fn test_failed_fetch_sets_error_and_clears_loading() {
        let mut view = ReportView::new(ReportKind::Balance, "€");
        let ticket = view.begin_fetch();
        assert!(view.apply(ticket, Err(http_500())));

        // Never stuck in "loading"; the message is user-visible.
        assert!(!view.is_loading());
        let rendered = view.render();
        assert!(rendered.contains("Error:"));
        assert!(rendered.contains("500"));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut view = ReportView::new(ReportKind::Pnl, "€");
        let first = view.begin_fetch();
        let second = view.begin_fetch();

        // The superseded request resolves late; its payload must not land.
        assert!(!view.apply(first, Ok(Report::Pnl(sample_pnl()))));
        assert!(view.report().is_none());
        assert!(view.is_loading());

        // The latest request wins regardless of completion order.
        assert!(view.apply(second, Err(http_500())));
        assert!(!view.is_loading());
        assert!(view.error().is_some());
    }

    #[test]
    fn test_success_clears_previous_error() {
        let mut view = ReportView::new(ReportKind::Pnl, "€");
        let ticket = view.begin_fetch();
        view.apply(ticket, Err(http_500()));
        assert!(view.error().is_some());

        let ticket = view.begin_fetch();
        view.apply(ticket, Ok(Report::Pnl(sample_pnl())));
        assert!(view.error().is_none());
        assert!(view.render().contains("Total Revenue"));
    }

    #[test]
    fn test_empty_view_renders_placeholder_and_exports_nothing() {
        let view = ReportView::new(ReportKind::Balance, "€");
        assert_eq!(view.render(), "No data available.\n");
        assert!(view.flat_row().is_empty());
    }
}
