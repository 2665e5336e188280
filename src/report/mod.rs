mod compare;
mod monthly;
mod surplus;
mod window;

pub(crate) use compare::{compare_categories, CategoryComparison, Direction};
pub(crate) use monthly::{expenses_by_month, income_by_month, MonthlyTotal};
pub(crate) use surplus::{surplus_series, SurplusPoint};
pub(crate) use window::{select_window, AnalysisWindow};

use chrono::{Datelike, Months, NaiveDate};
use tracing::debug;

use crate::models::Transaction;

/// Months of ledger history analyzed, counted back from the newest
/// completed month.
pub(crate) const DEFAULT_HISTORY_MONTHS: u32 = 36;

/// Trailing window shared by the surplus rolling mean and the category
/// comparison baseline.
pub(crate) const DEFAULT_COMPARISON_MONTHS: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ReportParams {
    pub(crate) history_months: u32,
    /// Must be at least 1.
    pub(crate) comparison_months: u32,
}

impl Default for ReportParams {
    fn default() -> Self {
        Self {
            history_months: DEFAULT_HISTORY_MONTHS,
            comparison_months: DEFAULT_COMPARISON_MONTHS,
        }
    }
}

/// Everything the screens and CLI reports consume, derived in one pass
/// from the raw ledger rows and recomputed whole on every load.
#[derive(Debug, Clone)]
pub(crate) struct Report {
    pub(crate) params: ReportParams,
    /// Analysis window, inclusive start.
    pub(crate) start: Option<NaiveDate>,
    /// Exclusive end: the first day of the in-progress month.
    pub(crate) end: Option<NaiveDate>,
    /// Newest completed month carrying data.
    pub(crate) latest_month: Option<NaiveDate>,
    pub(crate) window_rows: usize,
    pub(crate) income: Vec<MonthlyTotal>,
    pub(crate) expenses: Vec<MonthlyTotal>,
    pub(crate) surplus: Vec<SurplusPoint>,
    pub(crate) comparisons: Vec<CategoryComparison>,
}

impl Report {
    pub(crate) fn build(transactions: &[Transaction], params: ReportParams) -> Self {
        let Some(window) = select_window(transactions, params.history_months) else {
            return Self::empty(params);
        };
        let comparison_months = params.comparison_months.max(1);

        let income = income_by_month(&window.transactions);
        let expenses = expenses_by_month(&window.transactions);
        let surplus = surplus_series(&income, &expenses, comparison_months as usize);
        let latest_month = window.transactions.iter().map(|t| month_of(t.date)).max();
        let comparisons = match latest_month {
            Some(latest) => compare_categories(&window.transactions, latest, comparison_months),
            None => Vec::new(),
        };

        debug!(
            rows = window.transactions.len(),
            income_months = income.len(),
            expense_months = expenses.len(),
            categories = comparisons.len(),
            "report built"
        );

        Self {
            params,
            start: Some(window.start),
            end: Some(window.end),
            latest_month,
            window_rows: window.transactions.len(),
            income,
            expenses,
            surplus,
            comparisons,
        }
    }

    pub(crate) fn empty(params: ReportParams) -> Self {
        Self {
            params,
            start: None,
            end: None,
            latest_month: None,
            window_rows: 0,
            income: Vec::new(),
            expenses: Vec::new(),
            surplus: Vec::new(),
            comparisons: Vec::new(),
        }
    }

    pub(crate) fn has_data(&self) -> bool {
        !self.income.is_empty() || !self.expenses.is_empty()
    }
}

/// First day of the month containing `date`.
pub(crate) fn month_of(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// `month` moved back by `n` calendar months.
pub(crate) fn months_back(month: NaiveDate, n: u32) -> NaiveDate {
    month.checked_sub_months(Months::new(n)).unwrap_or(month)
}

/// Whole calendar months from `from` to `to`, negative when `to` is
/// earlier. Day-of-month is ignored.
pub(crate) fn months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    (to.year() - from.year()) * 12 + (to.month() as i32 - from.month() as i32)
}

pub(crate) fn month_label(month: NaiveDate) -> String {
    month.format("%Y-%m").to_string()
}
