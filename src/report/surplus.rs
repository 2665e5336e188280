use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::MonthlyTotal;

/// Monthly surplus with its trailing mean. `smoothed` stays `None` until a
/// full smoothing window of points exists up to and including this one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SurplusPoint {
    pub(crate) month: NaiveDate,
    pub(crate) surplus: Decimal,
    pub(crate) smoothed: Option<Decimal>,
}

/// Joins the two series on the month key: only months carrying both an
/// income total and an expense total produce a surplus point.
pub(crate) fn surplus_series(
    income: &[MonthlyTotal],
    expenses: &[MonthlyTotal],
    smoothing_window: usize,
) -> Vec<SurplusPoint> {
    let expense_by_month: BTreeMap<NaiveDate, Decimal> =
        expenses.iter().map(|p| (p.month, p.amount)).collect();

    let mut series: Vec<SurplusPoint> = income
        .iter()
        .filter_map(|p| {
            expense_by_month.get(&p.month).map(|spent| SurplusPoint {
                month: p.month,
                surplus: p.amount - spent,
                smoothed: None,
            })
        })
        .collect();

    let window = smoothing_window.max(1);
    for i in 0..series.len() {
        if i + 1 >= window {
            let sum: Decimal = series[i + 1 - window..=i].iter().map(|p| p.surplus).sum();
            series[i].smoothed = Some(sum / Decimal::from(window as u64));
        }
    }

    series
}
