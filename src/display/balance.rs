//! Balance sheet display formatting
//!
//! Renders a balance sheet as assets, liabilities, and equity sections with
//! a "Balanced?" footer, mirroring the two-column layout of the web view in
//! a single terminal column.

use crate::models::BalanceSheet;

use super::{double_separator, format_amount, separator};

/// Width of the label column
const LABEL_WIDTH: usize = 24;
/// Width of the amount column
const AMOUNT_WIDTH: usize = 14;

/// Format a balance sheet as a terminal table
pub fn format_balance_sheet(sheet: &BalanceSheet, currency: &str) -> String {
    let width = LABEL_WIDTH + AMOUNT_WIDTH;
    let mut output = String::new();

    output.push_str("Balance Sheet\n");
    output.push_str(&double_separator(width));
    output.push('\n');

    output.push_str("Assets\n");
    push_row(&mut output, "Fixed Assets", sheet.assets.fixed, currency);
    push_row(&mut output, "Current Assets", sheet.assets.current, currency);
    output.push_str(&separator(width));
    output.push('\n');
    push_row(&mut output, "Total Assets", sheet.assets.total, currency);
    output.push('\n');

    output.push_str("Liabilities\n");
    push_row(
        &mut output,
        "Short-Term Liabilities",
        sheet.liabilities.short_term,
        currency,
    );
    push_row(
        &mut output,
        "Long-Term Liabilities",
        sheet.liabilities.long_term,
        currency,
    );
    output.push_str(&separator(width));
    output.push('\n');
    push_row(
        &mut output,
        "Total Liabilities",
        sheet.liabilities.total,
        currency,
    );
    output.push('\n');

    output.push_str("Equity\n");
    push_row(
        &mut output,
        "Retained Earnings",
        sheet.equity.retained_earnings,
        currency,
    );
    output.push_str(&separator(width));
    output.push('\n');
    push_row(&mut output, "Total Equity", sheet.equity.total, currency);
    output.push('\n');

    output.push_str(&format!(
        "Balanced? {}\n",
        if sheet.balanced { "Yes" } else { "No" }
    ));

    output
}

fn push_row(output: &mut String, label: &str, amount: f64, currency: &str) {
    output.push_str(&format!(
        "{:<label$}{:>amount$}\n",
        label,
        format_amount(amount, currency),
        label = LABEL_WIDTH,
        amount = AMOUNT_WIDTH,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AssetBreakdown, EquityBreakdown, LiabilityBreakdown};

    /// Fixture from the reporting API: a sheet that balances only through
    /// liabilities
    fn million_sheet() -> BalanceSheet {
        BalanceSheet {
            assets: AssetBreakdown {
                current: 0.0,
                fixed: 0.0,
                total: 1_000_000.0,
            },
            liabilities: LiabilityBreakdown {
                short_term: 0.0,
                long_term: 0.0,
                total: 1_000_000.0,
            },
            equity: EquityBreakdown {
                retained_earnings: 0.0,
                total: 0.0,
            },
            balanced: true,
        }
    }

    #[test]
    fn test_renders_total_assets() {
        let rendered = format_balance_sheet(&million_sheet(), "€");
        assert!(rendered.contains("Total Assets"));
        assert!(rendered.contains("€1000000.00"));
    }

    #[test]
    fn test_renders_balanced_marker() {
        let mut sheet = million_sheet();
        assert!(format_balance_sheet(&sheet, "€").contains("Balanced? Yes"));

        sheet.balanced = false;
        assert!(format_balance_sheet(&sheet, "€").contains("Balanced? No"));
    }

    #[test]
    fn test_all_section_labels_present() {
        let rendered = format_balance_sheet(&million_sheet(), "€");
        for label in [
            "Fixed Assets",
            "Current Assets",
            "Short-Term Liabilities",
            "Long-Term Liabilities",
            "Total Liabilities",
            "Retained Earnings",
            "Total Equity",
        ] {
            assert!(rendered.contains(label), "missing label: {}", label);
        }
    }
}
