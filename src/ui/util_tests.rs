#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::util::*;
use crate::report::MonthlyTotal;

fn month(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d").unwrap()
}

fn points(months: &[&str]) -> Vec<MonthlyTotal> {
    months
        .iter()
        .map(|m| MonthlyTotal {
            month: month(m),
            amount: dec!(100),
        })
        .collect()
}

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("hello", 10), "hello");
    assert_eq!(truncate("hello", 5), "hello");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("hello world", 5), "hell…");
}

#[test]
fn test_truncate_zero_max() {
    assert_eq!(truncate("hello", 0), "");
}

#[test]
fn test_truncate_unicode() {
    // Japanese characters are multi-byte UTF-8
    assert_eq!(truncate("日本語テスト", 4), "日本語…");
}

#[test]
fn test_truncate_one_char() {
    assert_eq!(truncate("hello", 1), "…");
    assert_eq!(truncate("a", 1), "a");
}

// ── format_amount ─────────────────────────────────────────────

#[test]
fn test_format_amount_basic() {
    assert_eq!(format_amount(dec!(1234.56)), "$1,234.56");
}

#[test]
fn test_format_amount_no_commas() {
    assert_eq!(format_amount(dec!(999.99)), "$999.99");
}

#[test]
fn test_format_amount_zero() {
    assert_eq!(format_amount(dec!(0)), "$0.00");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(dec!(-42.50)), "-$42.50");
}

#[test]
fn test_format_amount_large() {
    assert_eq!(format_amount(dec!(1234567.89)), "$1,234,567.89");
}

#[test]
fn test_format_amount_rounds_to_two_decimals() {
    assert_eq!(format_amount(dec!(1.5)), "$1.50");
}

// ── dollar_label ──────────────────────────────────────────────

#[test]
fn test_dollar_label_rounds_and_groups() {
    assert_eq!(dollar_label(1234.56), "$1,235");
    assert_eq!(dollar_label(0.2), "$0");
    assert_eq!(dollar_label(-950.0), "-$950");
}

// ── chart bounds ──────────────────────────────────────────────

#[test]
fn test_value_bounds_pads_range() {
    let bounds = value_bounds(&[100.0, 200.0]);
    assert!(bounds[0] < 100.0);
    assert!(bounds[1] > 200.0);
}

#[test]
fn test_value_bounds_empty() {
    assert_eq!(value_bounds(&[]), [0.0, 1.0]);
}

#[test]
fn test_value_bounds_flat_series() {
    let bounds = value_bounds(&[500.0, 500.0]);
    assert!(bounds[0] < 500.0);
    assert!(bounds[1] > 500.0);
}

// ── month axis labels ─────────────────────────────────────────

#[test]
fn test_month_axis_labels_single() {
    let labels = month_axis_labels(month("2024-03"), month("2024-03"));
    assert_eq!(labels, vec!["2024-03"]);
}

#[test]
fn test_month_axis_labels_pair() {
    let labels = month_axis_labels(month("2024-03"), month("2024-04"));
    assert_eq!(labels, vec!["2024-03", "2024-04"]);
}

#[test]
fn test_month_axis_labels_span() {
    let labels = month_axis_labels(month("2023-01"), month("2023-12"));
    assert_eq!(labels.len(), 3);
    assert_eq!(labels[0], "2023-01");
    assert_eq!(labels[2], "2023-12");
}

// ── month runs ────────────────────────────────────────────────

#[test]
fn test_month_runs_contiguous() {
    let series = points(&["2024-01", "2024-02", "2024-03"]);
    let runs = month_runs(&series);
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].len(), 3);
}

#[test]
fn test_month_runs_split_on_gap() {
    let series = points(&["2024-01", "2024-02", "2024-05", "2024-06", "2024-09"]);
    let runs = month_runs(&series);
    assert_eq!(runs.len(), 3);
    assert_eq!(runs[0].len(), 2);
    assert_eq!(runs[1].len(), 2);
    assert_eq!(runs[2].len(), 1);
}

#[test]
fn test_month_runs_empty() {
    assert!(month_runs(&[]).is_empty());
}

// ── scrolling ─────────────────────────────────────────────────

#[test]
fn test_scroll_down_advances_viewport() {
    let mut index = 0;
    let mut scroll = 0;
    for _ in 0..12 {
        scroll_down(&mut index, &mut scroll, 20, 10);
    }
    assert_eq!(index, 12);
    assert_eq!(scroll, 3);
}

#[test]
fn test_scroll_down_stops_at_end() {
    let mut index = 4;
    let mut scroll = 0;
    scroll_down(&mut index, &mut scroll, 5, 10);
    assert_eq!(index, 4);
}

#[test]
fn test_scroll_up_pulls_viewport() {
    let mut index = 5;
    let mut scroll = 5;
    scroll_up(&mut index, &mut scroll);
    assert_eq!(index, 4);
    assert_eq!(scroll, 4);
}

#[test]
fn test_scroll_to_bottom() {
    let mut index = 0;
    let mut scroll = 0;
    scroll_to_bottom(&mut index, &mut scroll, 50, 10);
    assert_eq!(index, 49);
    assert_eq!(scroll, 40);
}

#[test]
fn test_scroll_to_top() {
    let mut index = 30;
    let mut scroll = 25;
    scroll_to_top(&mut index, &mut scroll);
    assert_eq!(index, 0);
    assert_eq!(scroll, 0);
}
