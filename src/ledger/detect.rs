use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::LedgerProfile;

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%m-%d-%Y",
    "%d.%m.%Y",
    "%Y/%m/%d",
];

/// Pick the delimiter that splits the line into the most fields.
/// Ties prefer the semicolon.
pub(crate) fn detect_delimiter(line: &str) -> u8 {
    [(b'\t', '\t'), (b',', ','), (b';', ';')]
        .into_iter()
        .map(|(byte, ch)| (byte, line.matches(ch).count()))
        .max_by_key(|(_, count)| *count)
        .map(|(byte, _)| byte)
        .unwrap_or(b';')
}

/// A header row is one whose fields parse as neither dates nor amounts.
pub(crate) fn looks_like_header(row: &[String]) -> bool {
    !row.is_empty()
        && row.iter().all(|field| {
            let trimmed = field.trim();
            Decimal::from_str(trimmed.replace(['$', ','], "").trim()).is_err()
                && detect_date_format(trimmed).is_none()
        })
}

/// First known format that parses the sample, ISO first.
pub(crate) fn detect_date_format(sample: &str) -> Option<&'static str> {
    DATE_FORMATS
        .iter()
        .find(|fmt| NaiveDate::parse_from_str(sample.trim(), fmt).is_ok())
        .copied()
}

/// Resolve a profile for the file: columns by header name when a header
/// is present, positional date/category/amount otherwise, date format
/// sampled from the first data row.
pub(crate) fn detect_profile(
    headers: Option<&[String]>,
    first_row: Option<&[String]>,
    delimiter: u8,
) -> LedgerProfile {
    let mut profile = LedgerProfile {
        delimiter,
        ..LedgerProfile::default()
    };

    match headers {
        Some(headers) => {
            let h: Vec<String> = headers
                .iter()
                .map(|s| s.to_lowercase().trim().to_string())
                .collect();
            profile.has_header = true;
            profile.date_column = col_index(&h, "date").unwrap_or(0);
            profile.category_column = col_index(&h, "category").unwrap_or(1);
            profile.amount_column = col_index(&h, "amount").unwrap_or(2);
        }
        None => profile.has_header = false,
    }

    if let Some(row) = first_row {
        if let Some(fmt) = row
            .get(profile.date_column)
            .and_then(|s| detect_date_format(s))
        {
            profile.date_format = fmt.into();
        }
    }

    profile
}

fn col_index(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

#[cfg(test)]
#[path = "detect_tests.rs"]
mod tests;
