use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Category name reserved for inflows. Every other category is spending.
pub const INCOME_CATEGORY: &str = "Income";

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub date: NaiveDate,
    pub category: String,
    pub amount: Decimal,
}

impl Transaction {
    pub fn new(date: NaiveDate, category: String, amount: Decimal) -> Self {
        Self {
            date,
            category,
            amount,
        }
    }

    pub fn is_income(&self) -> bool {
        self.category == INCOME_CATEGORY
    }

    pub fn abs_amount(&self) -> Decimal {
        self.amount.abs()
    }
}
