use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::Transaction;

use super::{month_of, months_back};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Up,
    Down,
    Flat,
}

/// A category's newest completed month measured against its trailing
/// average. Totals are signed, so with expenses recorded as negative
/// amounts `Down` means more money went out than usual.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CategoryComparison {
    pub(crate) category: String,
    pub(crate) trailing_average: Decimal,
    pub(crate) current_total: Decimal,
}

impl CategoryComparison {
    pub(crate) fn direction(&self) -> Direction {
        match self.current_total.cmp(&self.trailing_average) {
            Ordering::Greater => Direction::Up,
            Ordering::Less => Direction::Down,
            Ordering::Equal => Direction::Flat,
        }
    }
}

/// Compares the `latest` month against the mean of the `comparison_months`
/// months before it. A category's average counts only the months it
/// appears in, and categories missing from either side are dropped.
pub(crate) fn compare_categories(
    transactions: &[Transaction],
    latest: NaiveDate,
    comparison_months: u32,
) -> Vec<CategoryComparison> {
    let trailing_start = months_back(latest, comparison_months);

    let mut current: BTreeMap<&str, Decimal> = BTreeMap::new();
    let mut trailing: BTreeMap<&str, BTreeMap<NaiveDate, Decimal>> = BTreeMap::new();

    for txn in transactions {
        let month = month_of(txn.date);
        if month == latest {
            *current.entry(txn.category.as_str()).or_default() += txn.amount;
        } else if month >= trailing_start && month < latest {
            *trailing
                .entry(txn.category.as_str())
                .or_default()
                .entry(month)
                .or_default() += txn.amount;
        }
    }

    current
        .into_iter()
        .filter_map(|(category, current_total)| {
            let months = trailing.get(category)?;
            let sum: Decimal = months.values().copied().sum();
            let trailing_average = sum / Decimal::from(months.len() as u64);
            Some(CategoryComparison {
                category: category.to_string(),
                trailing_average,
                current_total,
            })
        })
        .collect()
}
