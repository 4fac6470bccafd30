//! Display formatting for terminal output
//!
//! Renders the nested report documents as plain-text tables, one formatter
//! per report kind, plus small shared helpers for amounts and separators.

pub mod balance;
pub mod pnl;

pub use balance::format_balance_sheet;
pub use pnl::format_profit_and_loss;

use crate::models::Report;

/// Render any report as a terminal table
pub fn format_report(report: &Report, currency: &str) -> String {
    match report {
        Report::Balance(sheet) => format_balance_sheet(sheet, currency),
        Report::Pnl(pnl) => format_profit_and_loss(pnl, currency),
    }
}

/// Format an amount with two decimals and a leading currency symbol
///
/// Negative amounts carry the sign before the symbol, e.g. `-€12.50`.
pub(crate) fn format_amount(amount: f64, currency: &str) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", currency, amount.abs())
    } else {
        format!("{}{:.2}", currency, amount)
    }
}

/// Format a separator line
pub(crate) fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub(crate) fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1000.0, "€"), "€1000.00");
        assert_eq!(format_amount(12.5, "$"), "$12.50");
        assert_eq!(format_amount(-12.5, "€"), "-€12.50");
        assert_eq!(format_amount(0.0, "€"), "€0.00");
    }
}
