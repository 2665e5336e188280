mod transaction;

pub use transaction::{Transaction, INCOME_CATEGORY};

#[cfg(test)]
mod tests;
