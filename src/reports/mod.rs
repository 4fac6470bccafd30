//! Report flattening for export
//!
//! Turns a nested report document into a flat, ordered list of label/value
//! cells. The label set and order are fixed per report kind and match the
//! row order of the rendered tables. Flattening is pure: the same report
//! always yields the same row, numbers are copied without any formatting,
//! and nothing is cached.

use std::fmt;

use crate::models::{BalanceSheet, ProfitAndLoss, Report};

/// A single exported cell value
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// A numeric amount, exactly as served by the API
    Number(f64),
    /// A textual value (currently only the "Yes"/"No" balanced marker)
    Text(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// An ordered label/value projection of a report
///
/// Insertion order is display order; exports write labels as the header and
/// values as the single data row beneath it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlatRow {
    /// Ordered (label, value) cells, one per leaf metric
    pub cells: Vec<(&'static str, CellValue)>,
}

impl FlatRow {
    /// True when no report was loaded (exports become no-ops)
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Labels in display order
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.cells.iter().map(|(label, _)| *label)
    }

    /// Values in display order
    pub fn values(&self) -> impl Iterator<Item = &CellValue> + '_ {
        self.cells.iter().map(|(_, value)| value)
    }
}

/// Flatten a report into an ordered row, or an empty row when none is loaded
pub fn flatten(report: Option<&Report>) -> FlatRow {
    match report {
        Some(Report::Balance(sheet)) => flatten_balance(sheet),
        Some(Report::Pnl(pnl)) => flatten_pnl(pnl),
        None => FlatRow::default(),
    }
}

fn flatten_balance(sheet: &BalanceSheet) -> FlatRow {
    FlatRow {
        cells: vec![
            ("Fixed Assets", CellValue::Number(sheet.assets.fixed)),
            ("Current Assets", CellValue::Number(sheet.assets.current)),
            ("Total Assets", CellValue::Number(sheet.assets.total)),
            (
                "Short-Term Liabilities",
                CellValue::Number(sheet.liabilities.short_term),
            ),
            (
                "Long-Term Liabilities",
                CellValue::Number(sheet.liabilities.long_term),
            ),
            (
                "Total Liabilities",
                CellValue::Number(sheet.liabilities.total),
            ),
            (
                "Retained Earnings",
                CellValue::Number(sheet.equity.retained_earnings),
            ),
            ("Total Equity", CellValue::Number(sheet.equity.total)),
            ("Balanced", CellValue::Text(yes_no(sheet.balanced))),
        ],
    }
}

fn flatten_pnl(pnl: &ProfitAndLoss) -> FlatRow {
    FlatRow {
        cells: vec![
            (
                "Product Sales",
                CellValue::Number(pnl.revenue.product_sales),
            ),
            ("Grants", CellValue::Number(pnl.revenue.grants)),
            ("Total Revenue", CellValue::Number(pnl.revenue.total)),
            ("Payroll", CellValue::Number(pnl.expenses.payroll)),
            ("Maintenance", CellValue::Number(pnl.expenses.maintenance)),
            ("Taxes", CellValue::Number(pnl.expenses.taxes)),
            (
                "External Services",
                CellValue::Number(pnl.expenses.external_services),
            ),
            ("Total Expenses", CellValue::Number(pnl.expenses.total)),
            ("Net Profit", CellValue::Number(pnl.profit)),
        ],
    }
}

fn yes_no(value: bool) -> String {
    let text = if value { "Yes" } else { "No" };
    text.to_string()
}


#[cfg(test)]
mod tests {
    use super::fixtures::{sample_balance, sample_pnl};
    use super::*;

    #[test]
    fn test_balance_labels_in_display_order() {
        let row = flatten(Some(&Report::Balance(sample_balance())));
        let labels: Vec<_> = row.labels().collect();
        assert_eq!(
            labels,
            vec![
                "Fixed Assets",
                "Current Assets",
                "Total Assets",
                "Short-Term Liabilities",
                "Long-Term Liabilities",
                "Total Liabilities",
                "Retained Earnings",
                "Total Equity",
                "Balanced",
            ]
        );
    }

    #[test]
    fn test_pnl_labels_in_display_order() {
        let row = flatten(Some(&Report::Pnl(sample_pnl())));
        let labels: Vec<_> = row.labels().collect();
        assert_eq!(
            labels,
            vec![
                "Product Sales",
                "Grants",
                "Total Revenue",
                "Payroll",
                "Maintenance",
                "Taxes",
                "External Services",
                "Total Expenses",
                "Net Profit",
            ]
        );
    }

    #[test]
    fn test_numbers_copied_bit_for_bit() {
        let sheet = sample_balance();
        let row = flatten(Some(&Report::Balance(sheet)));
        assert_eq!(row.cells[1].1, CellValue::Number(250.25));
        assert_eq!(row.cells[2].1, CellValue::Number(350.25));
        // No formatting applied on the way through.
        assert_eq!(row.cells[1].1.to_string(), "250.25");
    }

    #[test]
    fn test_balanced_rendered_as_yes_no() {
        let mut sheet = sample_balance();
        let row = flatten(Some(&Report::Balance(sheet)));
        assert_eq!(row.cells[8].1, CellValue::Text("Yes".into()));

        sheet.balanced = false;
        let row = flatten(Some(&Report::Balance(sheet)));
        assert_eq!(row.cells[8].1, CellValue::Text("No".into()));
    }

    #[test]
    fn test_flatten_is_deterministic() {
        let report = Report::Pnl(sample_pnl());
        assert_eq!(flatten(Some(&report)), flatten(Some(&report)));
    }

    #[test]
    fn test_absent_report_flattens_to_empty() {
        let row = flatten(None);
        assert!(row.is_empty());
        assert_eq!(row.len(), 0);
    }
}
