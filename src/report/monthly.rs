use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::Transaction;

use super::month_of;

/// One point of a monthly series, keyed on the first day of the month.
/// Months without activity are simply absent from a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct MonthlyTotal {
    pub(crate) month: NaiveDate,
    pub(crate) amount: Decimal,
}

pub(crate) fn income_by_month(transactions: &[Transaction]) -> Vec<MonthlyTotal> {
    sum_by_month(transactions.iter().filter(|t| t.is_income()))
}

/// Expense totals take the absolute value of each month's sum, so ledgers
/// recording spending as negative amounts and ledgers recording positive
/// magnitudes produce the same series.
pub(crate) fn expenses_by_month(transactions: &[Transaction]) -> Vec<MonthlyTotal> {
    let mut totals = sum_by_month(transactions.iter().filter(|t| !t.is_income()));
    for point in &mut totals {
        point.amount = point.amount.abs();
    }
    totals
}

fn sum_by_month<'a, I>(transactions: I) -> Vec<MonthlyTotal>
where
    I: Iterator<Item = &'a Transaction>,
{
    let mut by_month: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for txn in transactions {
        *by_month.entry(month_of(txn.date)).or_default() += txn.amount;
    }
    by_month
        .into_iter()
        .map(|(month, amount)| MonthlyTotal { month, amount })
        .collect()
}
