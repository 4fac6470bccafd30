//! finrep - Terminal client for financial reporting APIs
//!
//! This library provides the core functionality for the finrep CLI. It
//! fetches balance-sheet and profit-and-loss documents from a remote
//! reporting API for a date range, renders them as formatted terminal
//! tables, and exports them to CSV or spreadsheet files.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Report documents, the report-kind descriptor, date ranges
//! - `client`: HTTP client for the reporting API
//! - `reports`: Flattening of nested reports into exportable rows
//! - `export`: CSV and XLSX encoders
//! - `display`: Terminal table rendering
//! - `view`: Generic per-report view state (loading / error / data)
//! - `cli`: Command handlers bridging clap to the layers above
//!
//! # Example
//!
//! ```rust,ignore
//! use finrep::client::ReportClient;
//! use finrep::models::{DateRange, ReportKind};
//!
//! let client = ReportClient::new("http://localhost:5000", 1)?;
//! let range = DateRange::parse("2017-01-01", "2017-12-31")?;
//! let report = client.fetch(ReportKind::Balance, &range).await?;
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod view;

pub use error::{ReportError, ReportResult};
