#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

// ── Transaction ───────────────────────────────────────────────

fn make_txn(category: &str, amount: Decimal) -> Transaction {
    Transaction::new(
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        category.into(),
        amount,
    )
}

#[test]
fn test_income_is_by_category() {
    assert!(make_txn("Income", dec!(1000.00)).is_income());
    assert!(!make_txn("Groceries", dec!(1000.00)).is_income());
}

#[test]
fn test_income_category_is_exact() {
    assert!(!make_txn("income", dec!(100)).is_income());
    assert!(!make_txn("INCOME", dec!(100)).is_income());
    assert!(!make_txn(" Income", dec!(100)).is_income());
}

#[test]
fn test_negative_income_still_income() {
    // A payroll correction stays in the Income category even when negative.
    assert!(make_txn(INCOME_CATEGORY, dec!(-120.00)).is_income());
}

#[test]
fn test_abs_amount() {
    assert_eq!(make_txn("Rent", dec!(-42.99)).abs_amount(), dec!(42.99));
    assert_eq!(make_txn("Rent", dec!(42.99)).abs_amount(), dec!(42.99));
    assert_eq!(make_txn("Rent", Decimal::ZERO).abs_amount(), Decimal::ZERO);
}

#[test]
fn test_small_amounts() {
    let txn = make_txn("Coffee", dec!(-0.01));
    assert!(!txn.is_income());
    assert_eq!(txn.abs_amount(), dec!(0.01));
}
