use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::models::Transaction;

use super::detect;

/// How a ledger file is laid out. Detected from the file itself rather
/// than configured; the default is the `date;category;amount` shape.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LedgerProfile {
    pub(crate) delimiter: u8,
    pub(crate) date_column: usize,
    pub(crate) category_column: usize,
    pub(crate) amount_column: usize,
    pub(crate) date_format: String,
    pub(crate) has_header: bool,
}

impl Default for LedgerProfile {
    fn default() -> Self {
        Self {
            delimiter: b';',
            date_column: 0,
            category_column: 1,
            amount_column: 2,
            date_format: "%Y-%m-%d".into(),
            has_header: true,
        }
    }
}

/// Read a ledger file into transactions, detecting its profile on the way.
pub(crate) fn load(path: &Path) -> Result<Vec<Transaction>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read ledger file {}", path.display()))?;

    let delimiter = detect::detect_delimiter(contents.lines().next().unwrap_or(""));
    let mut rows = read_rows(&contents, delimiter)?;
    if rows.is_empty() {
        anyhow::bail!("Ledger file is empty");
    }

    let headers = if detect::looks_like_header(&rows[0]) {
        Some(rows.remove(0))
    } else {
        None
    };
    let profile = detect::detect_profile(
        headers.as_deref(),
        rows.first().map(|r| r.as_slice()),
        delimiter,
    );

    let delimiter_char = delimiter as char;
    debug!(
        path = %path.display(),
        delimiter = %delimiter_char,
        rows = rows.len(),
        has_header = profile.has_header,
        date_format = %profile.date_format,
        "ledger read"
    );

    parse_rows(&rows, &profile)
}

fn read_rows(contents: &str, delimiter: u8) -> Result<Vec<Vec<String>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .has_headers(false)
        .from_reader(contents.as_bytes());

    let mut rows: Vec<Vec<String>> = Vec::new();
    for result in rdr.records() {
        let record = result.context("Failed to read ledger record")?;
        rows.push(record.iter().map(|s| s.to_string()).collect());
    }
    Ok(rows)
}

/// Parse data rows into transactions. Rows with an empty date field are
/// skipped; anything else that fails to coerce aborts the load.
pub(crate) fn parse_rows(rows: &[Vec<String>], profile: &LedgerProfile) -> Result<Vec<Transaction>> {
    let mut transactions = Vec::new();

    for (i, row) in rows.iter().enumerate() {
        let date_str = row
            .get(profile.date_column)
            .map(|s| s.trim().to_string())
            .unwrap_or_default();

        if date_str.is_empty() {
            continue;
        }

        let date = parse_date(&date_str, &profile.date_format)
            .with_context(|| format!("Row {}: failed to parse date '{}'", i + 1, date_str))?;

        let category = row
            .get(profile.category_column)
            .map(|s| s.trim().to_string())
            .unwrap_or_default();

        let raw_amount = row
            .get(profile.amount_column)
            .map(|s| s.trim().to_string())
            .unwrap_or_default();
        let amount = parse_decimal(&raw_amount)
            .with_context(|| format!("Row {}: failed to parse amount", i + 1))?;

        transactions.push(Transaction::new(date, category, amount));
    }

    Ok(transactions)
}

fn parse_date(s: &str, fmt: &str) -> Result<NaiveDate> {
    // Try the detected format first
    if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
        return Ok(d);
    }
    // Fallback: try common formats
    for fallback in &["%Y-%m-%d", "%m/%d/%Y", "%d/%m/%Y", "%m-%d-%Y", "%d.%m.%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fallback) {
            return Ok(d);
        }
    }
    anyhow::bail!("Could not parse date: {}", s)
}

fn parse_decimal(s: &str) -> Result<Decimal> {
    let cleaned = s
        .replace(['$', ','], "")
        .replace('(', "-")
        .replace(')', "")
        .trim()
        .to_string();
    if cleaned.is_empty() {
        anyhow::bail!("Amount field is empty");
    }
    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_str(&cleaned.replace('"', "")))
        .context(format!("Failed to parse '{}' as decimal", s))
}

#[cfg(test)]
#[path = "load_tests.rs"]
mod tests;
