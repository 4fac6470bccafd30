//! Profit and loss display formatting
//!
//! Renders a P&L statement as a category/amount table with revenue and
//! expense sections and a Net Profit footer.

use crate::models::ProfitAndLoss;

use super::{double_separator, format_amount, separator};

/// Width of the category column
const CATEGORY_WIDTH: usize = 22;
/// Width of the amount column
const AMOUNT_WIDTH: usize = 14;

/// Format a profit and loss statement as a terminal table
pub fn format_profit_and_loss(pnl: &ProfitAndLoss, currency: &str) -> String {
    let width = CATEGORY_WIDTH + AMOUNT_WIDTH;
    let mut output = String::new();

    output.push_str("Profit and Loss\n");
    output.push_str(&double_separator(width));
    output.push('\n');

    output.push_str(&format!(
        "{:<cat$}{:>amount$}\n",
        "Category",
        format!("Amount ({})", currency),
        cat = CATEGORY_WIDTH,
        amount = AMOUNT_WIDTH,
    ));
    output.push_str(&separator(width));
    output.push('\n');

    output.push_str("Revenue\n");
    push_row(&mut output, "  Product Sales", pnl.revenue.product_sales);
    push_row(&mut output, "  Grants", pnl.revenue.grants);
    push_row(&mut output, "Total Revenue", pnl.revenue.total);
    output.push('\n');

    output.push_str("Expenses\n");
    push_row(&mut output, "  Payroll", pnl.expenses.payroll);
    push_row(&mut output, "  Maintenance", pnl.expenses.maintenance);
    push_row(&mut output, "  Taxes", pnl.expenses.taxes);
    push_row(&mut output, "  External Services", pnl.expenses.external_services);
    push_row(&mut output, "Total Expenses", pnl.expenses.total);

    output.push_str(&double_separator(width));
    output.push('\n');
    output.push_str(&format!(
        "{:<cat$}{:>amount$}\n",
        "Net Profit",
        format_amount(pnl.profit, currency),
        cat = CATEGORY_WIDTH,
        amount = AMOUNT_WIDTH,
    ));

    output
}

fn push_row(output: &mut String, category: &str, amount: f64) {
    output.push_str(&format!(
        "{:<cat$}{:>amount$.2}\n",
        category,
        amount,
        cat = CATEGORY_WIDTH,
        amount = AMOUNT_WIDTH,
    ));
}
