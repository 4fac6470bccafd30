//! Core data models for finrep
//!
//! Defines the report documents served by the reporting API, the report-kind
//! descriptor that parameterizes the generic report view, and the date range
//! that drives report queries.

pub mod range;
pub mod report;

pub use range::DateRange;
pub use report::{
    AssetBreakdown, BalanceSheet, EquityBreakdown, ExpenseBreakdown, LiabilityBreakdown,
    ProfitAndLoss, Report, ReportKind, RevenueBreakdown,
};
