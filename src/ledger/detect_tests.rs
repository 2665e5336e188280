#![allow(clippy::unwrap_used)]

use super::*;

fn h(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

// ── delimiter ─────────────────────────────────────────────────

#[test]
fn test_detect_delimiter_semicolon() {
    assert_eq!(detect_delimiter("date;category;amount"), b';');
}

#[test]
fn test_detect_delimiter_comma() {
    assert_eq!(detect_delimiter("date,category,amount"), b',');
}

#[test]
fn test_detect_delimiter_tab() {
    assert_eq!(detect_delimiter("date\tcategory\tamount"), b'\t');
}

#[test]
fn test_detect_delimiter_prefers_most_fields() {
    // Comma appears once inside the amount, semicolon splits the row
    assert_eq!(detect_delimiter("2024-01-05;Income;1,000.00"), b';');
}

#[test]
fn test_detect_delimiter_tie_falls_to_semicolon() {
    assert_eq!(detect_delimiter("a;b,c"), b';');
    assert_eq!(detect_delimiter("plain"), b';');
}

// ── header detection ──────────────────────────────────────────

#[test]
fn test_looks_like_header_true() {
    assert!(looks_like_header(&h(&["date", "category", "amount"])));
    assert!(looks_like_header(&h(&["Date", "Category", "Amount"])));
}

#[test]
fn test_looks_like_header_false_for_data() {
    assert!(!looks_like_header(&h(&["2024-01-05", "Income", "1000.00"])));
    assert!(!looks_like_header(&h(&["01/15/2024", "Rent", "-900"])));
}

#[test]
fn test_looks_like_header_false_for_numeric_field() {
    assert!(!looks_like_header(&h(&["first", "second", "3"])));
}

#[test]
fn test_looks_like_header_false_for_empty_row() {
    assert!(!looks_like_header(&[]));
}

// ── date format ───────────────────────────────────────────────

#[test]
fn test_detect_date_format_iso() {
    assert_eq!(detect_date_format("2024-01-15"), Some("%Y-%m-%d"));
}

#[test]
fn test_detect_date_format_us() {
    assert_eq!(detect_date_format("01/15/2024"), Some("%m/%d/%Y"));
}

#[test]
fn test_detect_date_format_dotted() {
    assert_eq!(detect_date_format("15.01.2024"), Some("%d.%m.%Y"));
}

#[test]
fn test_detect_date_format_unknown() {
    assert_eq!(detect_date_format("soon"), None);
    assert_eq!(detect_date_format(""), None);
}

// ── profile ───────────────────────────────────────────────────

#[test]
fn test_detect_profile_named_columns() {
    let headers = h(&["Category", "Amount", "Date"]);
    let first_row = h(&["Groceries", "-50.25", "2024-01-12"]);
    let profile = detect_profile(Some(&headers), Some(&first_row), b';');
    assert!(profile.has_header);
    assert_eq!(profile.category_column, 0);
    assert_eq!(profile.amount_column, 1);
    assert_eq!(profile.date_column, 2);
    assert_eq!(profile.date_format, "%Y-%m-%d");
}

#[test]
fn test_detect_profile_positional_without_header() {
    let first_row = h(&["01/15/2024", "Rent", "-900"]);
    let profile = detect_profile(None, Some(&first_row), b',');
    assert!(!profile.has_header);
    assert_eq!(profile.date_column, 0);
    assert_eq!(profile.category_column, 1);
    assert_eq!(profile.amount_column, 2);
    assert_eq!(profile.date_format, "%m/%d/%Y");
    assert_eq!(profile.delimiter, b',');
}

#[test]
fn test_detect_profile_unknown_names_fall_back_to_position() {
    let headers = h(&["when", "what", "how much"]);
    let first_row = h(&["2024-01-12", "Groceries", "-50.25"]);
    let profile = detect_profile(Some(&headers), Some(&first_row), b';');
    assert_eq!(profile.date_column, 0);
    assert_eq!(profile.category_column, 1);
    assert_eq!(profile.amount_column, 2);
}

#[test]
fn test_detect_profile_keeps_default_format_without_rows() {
    let headers = h(&["date", "category", "amount"]);
    let profile = detect_profile(Some(&headers), None, b';');
    assert_eq!(profile.date_format, "%Y-%m-%d");
}
