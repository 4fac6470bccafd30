//! HTTP client for the reporting API
//!
//! Fetches report documents from
//! `GET {base}/api/companies/{id}/reports/{balance|pnl}?start=..&end=..`.
//! One request per invocation: no caching, no de-duplication, no retries.
//! Any non-2xx status is treated uniformly as a failed fetch.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use crate::config::Settings;
use crate::error::{ReportError, ReportResult};
use crate::models::{DateRange, Report, ReportKind};

/// Default request timeout in seconds
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for one company's reports on one reporting server
#[derive(Debug, Clone)]
pub struct ReportClient {
    http: Client,
    base_url: String,
    company_id: u64,
}

impl ReportClient {
    /// Build a client with a default reqwest client and sensible timeouts
    pub fn new(base_url: impl Into<String>, company_id: u64) -> ReportResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| ReportError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self::with_http(http, base_url, company_id))
    }

    /// Build a client from an existing reqwest client (useful for testing)
    pub fn with_http(http: Client, base_url: impl Into<String>, company_id: u64) -> Self {
        let base_url = base_url.into();
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            company_id,
        }
    }

    /// Build a client from user settings
    pub fn from_settings(settings: &Settings) -> ReportResult<Self> {
        Self::new(settings.api_base_url.clone(), settings.company_id)
    }

    /// URL of the report endpoint for `kind` (query string excluded)
    pub fn report_url(&self, kind: ReportKind) -> String {
        format!(
            "{}/api/companies/{}/reports/{}",
            self.base_url,
            self.company_id,
            kind.api_segment()
        )
    }

    /// Fetch a report of `kind` covering `range`
    ///
    /// # Errors
    ///
    /// - [`ReportError::BadStatus`] if the server answers with a non-2xx status
    /// - [`ReportError::Network`] for transport failures
    /// - [`ReportError::Json`] if the body does not match the report shape
    pub async fn fetch(&self, kind: ReportKind, range: &DateRange) -> ReportResult<Report> {
        let url = self.report_url(kind);
        debug!(%url, %range, "requesting report");

        let response = self.http.get(&url).query(&range.query()).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "report request failed");
            return Err(ReportError::BadStatus {
                report: kind.noun(),
                status: status.as_u16(),
            });
        }

        let report = match kind {
            ReportKind::Balance => Report::Balance(response.json().await?),
            ReportKind::Pnl => Report::Pnl(response.json().await?),
        };
        debug!(kind = kind.api_segment(), "report received");
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> ReportClient {
        ReportClient::with_http(Client::new(), "http://localhost:5000/", 1)
    }

    #[test]
    fn test_report_url() {
        let client = test_client();
        assert_eq!(
            client.report_url(ReportKind::Balance),
            "http://localhost:5000/api/companies/1/reports/balance"
        );
        assert_eq!(
            client.report_url(ReportKind::Pnl),
            "http://localhost:5000/api/companies/1/reports/pnl"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = ReportClient::with_http(Client::new(), "http://api.example.com///", 7);
        assert_eq!(
            client.report_url(ReportKind::Pnl),
            "http://api.example.com/api/companies/7/reports/pnl"
        );
    }
}
