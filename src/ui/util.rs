use chrono::{Months, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::report::{month_label, months_between, MonthlyTotal};

/// Format a decimal amount with thousand separators and 2 decimal places.
/// e.g. `1234567.89` → `"$1,234,567.89"`
pub(crate) fn format_amount(val: Decimal) -> String {
    let abs = val.abs();
    let formatted = format!("{abs:.2}");
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");
    let with_commas = group_thousands(int_part);

    if val < Decimal::ZERO {
        format!("-${with_commas}.{dec_part}")
    } else {
        format!("${with_commas}.{dec_part}")
    }
}

/// Short dollar label for chart axes, rounded to whole dollars.
pub(crate) fn dollar_label(value: f64) -> String {
    let rounded = value.round() as i64;
    let grouped = group_thousands(&rounded.abs().to_string());
    if rounded < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

fn group_thousands(digits: &str) -> String {
    digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",")
}

/// Truncate a string to `max` visible characters, appending "…" if truncated.
/// The result is guaranteed to be at most `max` characters (counting "…" as one).
/// Safe for multi-byte UTF-8 characters.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let char_count = s.chars().count();
    if char_count <= max {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{truncated}…")
}

/// Decimal to chart coordinate.
pub(crate) fn to_f64(val: Decimal) -> f64 {
    val.to_f64().unwrap_or(0.0)
}

/// Padded y-axis bounds around a set of values. Empty input gets a unit
/// band; a flat series still gets visible headroom.
pub(crate) fn value_bounds(values: &[f64]) -> [f64; 2] {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if !min.is_finite() || !max.is_finite() {
        return [0.0, 1.0];
    }
    let pad = ((max - min) * 0.1).max(1.0);
    [min - pad, max + pad]
}

/// Three evenly spread dollar labels for a y axis.
pub(crate) fn dollar_axis_labels(bounds: [f64; 2]) -> Vec<String> {
    let mid = (bounds[0] + bounds[1]) / 2.0;
    vec![
        dollar_label(bounds[0]),
        dollar_label(mid),
        dollar_label(bounds[1]),
    ]
}

/// X-axis labels spanning a month range: first, middle, last.
pub(crate) fn month_axis_labels(first: NaiveDate, last: NaiveDate) -> Vec<String> {
    let span = months_between(first, last);
    if span <= 0 {
        return vec![month_label(first)];
    }
    if span == 1 {
        return vec![month_label(first), month_label(last)];
    }
    let mid = first
        .checked_add_months(Months::new(span as u32 / 2))
        .unwrap_or(first);
    vec![month_label(first), month_label(mid), month_label(last)]
}

/// Split a monthly series into contiguous calendar runs. Lines drawn per
/// run break at month gaps instead of bridging them.
pub(crate) fn month_runs(points: &[MonthlyTotal]) -> Vec<&[MonthlyTotal]> {
    let mut runs = Vec::new();
    let mut start = 0;
    for i in 1..points.len() {
        if months_between(points[i - 1].month, points[i].month) != 1 {
            runs.push(&points[start..i]);
            start = i;
        }
    }
    if start < points.len() {
        runs.push(&points[start..]);
    }
    runs
}

/// Move a list cursor down by one, adjusting scroll to keep cursor visible.
pub(crate) fn scroll_down(index: &mut usize, scroll: &mut usize, len: usize, page: usize) {
    if *index + 1 < len {
        *index += 1;
        if *index >= *scroll + page {
            *scroll = index.saturating_sub(page - 1);
        }
    }
}

/// Move a list cursor up by one, adjusting scroll to keep cursor visible.
pub(crate) fn scroll_up(index: &mut usize, scroll: &mut usize) {
    *index = index.saturating_sub(1);
    if *index < *scroll {
        *scroll = *index;
    }
}

/// Jump cursor to the top of a list.
pub(crate) fn scroll_to_top(index: &mut usize, scroll: &mut usize) {
    *index = 0;
    *scroll = 0;
}

/// Jump cursor to the bottom of a list.
pub(crate) fn scroll_to_bottom(index: &mut usize, scroll: &mut usize, len: usize, page: usize) {
    if len > 0 {
        *index = len - 1;
        *scroll = index.saturating_sub(page.saturating_sub(1));
    }
}
