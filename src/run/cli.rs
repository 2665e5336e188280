use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use crossterm::style::Stylize;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use crate::report::{
    month_label, Direction, Report, ReportParams, DEFAULT_COMPARISON_MONTHS,
    DEFAULT_HISTORY_MONTHS,
};
use crate::ui::util::{format_amount, truncate};

pub(crate) fn as_cli(args: &[String]) -> Result<()> {
    match args[1].as_str() {
        "summary" | "s" => cli_summary(&args[2..]),
        "compare" | "c" => cli_compare(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("cashtrend {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("CashTrend — monthly income, spending and surplus trends for the terminal");
    println!();
    println!("Usage: cashtrend [ledger.csv] [command] [options]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch the interactive TUI");
    println!("  summary, s [ledger.csv]       Print monthly income, expenses and surplus");
    println!("  compare, c [ledger.csv]       Compare categories against their trailing average");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Options:");
    println!("  --history <months>            Months of history to analyze (default {DEFAULT_HISTORY_MONTHS})");
    println!("  --window <months>             Trailing average window (default {DEFAULT_COMPARISON_MONTHS})");
    println!();
    println!("The ledger is a CSV of date;category;amount rows. Without a path,");
    println!("cashtrend reads ledger.csv from its platform data directory.");
}

/// Shared argument parsing for the TUI and the report subcommands:
/// an optional positional ledger path plus the two window flags.
pub(crate) fn parse_run_args(args: &[String]) -> Result<(Option<PathBuf>, ReportParams)> {
    let mut path = None;
    let mut params = ReportParams::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--history" => {
                params.history_months = flag_value(args, i, "--history")?;
                i += 2;
            }
            "--window" => {
                params.comparison_months = flag_value(args, i, "--window")?;
                i += 2;
            }
            flag if flag.starts_with('-') => {
                bail!("Unknown option: {flag} (see cashtrend --help)");
            }
            _ if path.is_none() => {
                path = Some(PathBuf::from(&args[i]));
                i += 1;
            }
            extra => {
                bail!("Unexpected argument: {extra} (see cashtrend --help)");
            }
        }
    }
    Ok((path, params))
}

fn flag_value(args: &[String], i: usize, flag: &str) -> Result<u32> {
    let raw = args
        .get(i + 1)
        .ok_or_else(|| anyhow::anyhow!("{flag} expects a number of months"))?;
    let months: u32 = raw
        .parse()
        .with_context(|| format!("{flag} expects a number of months, got '{raw}'"))?;
    if months == 0 {
        bail!("{flag} must be at least 1");
    }
    Ok(months)
}

pub(crate) fn resolve_ledger_path(arg: Option<PathBuf>) -> Result<PathBuf> {
    match arg {
        Some(path) => Ok(path),
        None => {
            let path = crate::default_ledger_path()?;
            if !path.exists() {
                bail!(
                    "No ledger found at {}. Pass a path to a CSV ledger (date;category;amount) or create one there.",
                    path.display()
                );
            }
            Ok(path)
        }
    }
}

fn load_report(args: &[String]) -> Result<(PathBuf, usize, Report)> {
    let (path_arg, params) = parse_run_args(args)?;
    let path = resolve_ledger_path(path_arg)?;
    let transactions = crate::ledger::load(&path)?;
    let rows = transactions.len();
    let report = Report::build(&transactions, params);
    Ok((path, rows, report))
}

fn cli_summary(args: &[String]) -> Result<()> {
    let (path, rows, report) = load_report(args)?;

    println!("CashTrend — {}", path.display());
    println!("{}", "─".repeat(64));

    if !report.has_data() {
        println!("  No completed months in the ledger ({rows} rows read)");
        return Ok(());
    }

    if let (Some(start), Some(latest)) = (report.start, report.latest_month) {
        println!(
            "  Window: {}..{}  ({} of {rows} rows)",
            month_label(start),
            month_label(latest),
            report.window_rows,
        );
    }
    if let Some(end) = report.end {
        println!(
            "  In progress: {} (excluded until the month completes)",
            month_label(end),
        );
    }

    let income: BTreeMap<NaiveDate, Decimal> =
        report.income.iter().map(|p| (p.month, p.amount)).collect();
    let expenses: BTreeMap<NaiveDate, Decimal> = report
        .expenses
        .iter()
        .map(|p| (p.month, p.amount))
        .collect();
    let surplus: BTreeMap<NaiveDate, (Decimal, Option<Decimal>)> = report
        .surplus
        .iter()
        .map(|p| (p.month, (p.surplus, p.smoothed)))
        .collect();
    let months: BTreeSet<NaiveDate> = income.keys().chain(expenses.keys()).copied().collect();

    println!();
    println!(
        "  {:<9} {:>13} {:>13} {:>13} {:>13}",
        "Month",
        "Income",
        "Expenses",
        "Surplus",
        format!("Avg {} Mo", report.params.comparison_months),
    );
    for month in months {
        let inc = income
            .get(&month)
            .copied()
            .map_or_else(|| "—".to_string(), format_amount);
        let exp = expenses
            .get(&month)
            .copied()
            .map_or_else(|| "—".to_string(), format_amount);
        let (sur, avg) = match surplus.get(&month) {
            Some((s, smoothed)) => (
                format_amount(*s),
                smoothed.map_or_else(|| "—".to_string(), format_amount),
            ),
            None => ("—".to_string(), "—".to_string()),
        };
        println!(
            "  {:<9} {inc:>13} {exp:>13} {sur:>13} {avg:>13}",
            month_label(month),
        );
    }

    if let Some(avg) = report.surplus.last().and_then(|p| p.smoothed) {
        println!();
        println!(
            "  Trailing {}-month average surplus: {}",
            report.params.comparison_months,
            format_amount(avg),
        );
    }

    Ok(())
}

fn cli_compare(args: &[String]) -> Result<()> {
    let (path, _rows, report) = load_report(args)?;

    let Some(latest) = report.latest_month else {
        println!("No completed months in {}", path.display());
        return Ok(());
    };

    let window = report.params.comparison_months;
    println!(
        "CashTrend — {} vs the prior {} months",
        month_label(latest),
        window,
    );
    println!("{}", "─".repeat(64));

    if report.comparisons.is_empty() {
        println!("  No categories active in both periods");
        return Ok(());
    }

    println!(
        "  {:<24} {:>14} {:>14}",
        "Category",
        format!("Avg {window} Mo"),
        "Current",
    );
    for cmp in &report.comparisons {
        let current = format!("{:>14}", format_amount(cmp.current_total));
        let tinted = match cmp.direction() {
            Direction::Up => current.green(),
            Direction::Down => current.red(),
            Direction::Flat => current.stylize(),
        };
        println!(
            "  {:<24} {:>14} {tinted}",
            truncate(&cmp.category, 24),
            format_amount(cmp.trailing_average),
        );
    }

    println!();
    println!("  Current is green when above the trailing average, red when below.");
    Ok(())
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
