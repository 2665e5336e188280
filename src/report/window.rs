use chrono::NaiveDate;

use crate::models::Transaction;

use super::{month_of, months_back};

/// The slice of ledger history a report covers: every transaction dated
/// inside `[start, end)`. `end` is the first day of the month holding the
/// ledger's newest entry; that month is still accumulating rows and never
/// takes part in a report.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AnalysisWindow {
    pub(crate) start: NaiveDate,
    pub(crate) end: NaiveDate,
    pub(crate) transactions: Vec<Transaction>,
}

/// Returns `None` only for an empty ledger. A ledger whose rows all fall
/// outside the window yields a window holding no transactions.
pub(crate) fn select_window(
    transactions: &[Transaction],
    history_months: u32,
) -> Option<AnalysisWindow> {
    let newest = transactions.iter().map(|t| t.date).max()?;
    let end = month_of(newest);
    let start = months_back(end, history_months);

    let kept: Vec<Transaction> = transactions
        .iter()
        .filter(|t| t.date >= start && t.date < end)
        .cloned()
        .collect();

    Some(AnalysisWindow {
        start,
        end,
        transactions: kept,
    })
}
