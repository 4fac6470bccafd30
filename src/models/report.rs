//! Report documents served by the reporting API
//!
//! The shapes mirror the JSON bodies of the balance and pnl endpoints.
//! Amounts stay `f64` exactly as served; formatting happens at display or
//! export time, never here. Extra fields in the source JSON are ignored.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which report a view or export is about
///
/// This is the descriptor that parameterizes the generic report view: it
/// carries the API path segment, the human-readable title, and the export
/// file stem, so balance-sheet and P&L behavior share one code path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    /// Balance sheet (assets, liabilities, equity)
    Balance,
    /// Profit and loss statement (revenue, expenses, profit)
    Pnl,
}

impl ReportKind {
    /// Path segment used by the reporting API
    pub const fn api_segment(&self) -> &'static str {
        match self {
            Self::Balance => "balance",
            Self::Pnl => "pnl",
        }
    }

    /// Title shown above the rendered table
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Balance => "Balance Sheet",
            Self::Pnl => "Profit and Loss",
        }
    }

    /// Noun used in fetch error messages
    pub const fn noun(&self) -> &'static str {
        match self {
            Self::Balance => "balance sheet",
            Self::Pnl => "P&L report",
        }
    }

    /// File stem for exported files (`<stem>.csv`, `<stem>.xlsx`)
    pub const fn file_stem(&self) -> &'static str {
        match self {
            Self::Balance => "balance_sheet",
            Self::Pnl => "profit_and_loss",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Asset side of a balance sheet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct AssetBreakdown {
    /// Current (liquid) assets
    pub current: f64,
    /// Fixed assets
    pub fixed: f64,
    /// Total assets
    pub total: f64,
}

/// Liability side of a balance sheet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct LiabilityBreakdown {
    /// Liabilities due within a year
    pub short_term: f64,
    /// Liabilities due beyond a year
    pub long_term: f64,
    /// Total liabilities
    pub total: f64,
}

/// Equity section of a balance sheet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct EquityBreakdown {
    /// Accumulated retained earnings
    pub retained_earnings: f64,
    /// Total equity
    pub total: f64,
}

/// A balance sheet for a date range
///
/// The server asserts assets.total = liabilities.total + equity.total and
/// reports the outcome in `balanced`; the client trusts it and never
/// re-verifies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheet {
    /// Asset totals
    pub assets: AssetBreakdown,
    /// Liability totals
    pub liabilities: LiabilityBreakdown,
    /// Equity totals
    pub equity: EquityBreakdown,
    /// Whether assets equal liabilities plus equity
    pub balanced: bool,
}

/// Revenue section of a profit and loss statement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct RevenueBreakdown {
    /// Revenue from product sales
    pub product_sales: f64,
    /// Grant income
    pub grants: f64,
    /// Total revenue
    pub total: f64,
}

/// Expense section of a profit and loss statement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ExpenseBreakdown {
    /// Payroll costs
    pub payroll: f64,
    /// Maintenance costs
    pub maintenance: f64,
    /// Taxes paid
    pub taxes: f64,
    /// External services (contractors, vendors)
    pub external_services: f64,
    /// Total expenses
    pub total: f64,
}

/// A profit and loss statement for a date range
///
/// The server computes profit = revenue.total - expenses.total; the client
/// trusts the figure as served.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfitAndLoss {
    /// Revenue totals
    pub revenue: RevenueBreakdown,
    /// Expense totals
    pub expenses: ExpenseBreakdown,
    /// Net profit (negative for a loss)
    pub profit: f64,
}

/// A report document of either kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Report {
    /// Balance sheet variant
    Balance(BalanceSheet),
    /// Profit and loss variant
    Pnl(ProfitAndLoss),
}

impl Report {
    /// The kind of this report
    pub const fn kind(&self) -> ReportKind {
        match self {
            Self::Balance(_) => ReportKind::Balance,
            Self::Pnl(_) => ReportKind::Pnl,
        }
    }
}
