mod ledger;
mod models;
mod report;
mod run;
mod ui;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_logging();

    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(String::as_str) {
        None => run::as_tui(&args[1..]),
        Some(
            "summary" | "s" | "compare" | "c" | "help" | "--help" | "-h" | "version"
            | "--version" | "-V",
        ) => run::as_cli(&args),
        // anything else is a ledger path and/or window flags for the TUI
        Some(_) => run::as_tui(&args[1..]),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .init();
}

pub(crate) fn default_ledger_path() -> Result<std::path::PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "cashtrend", "CashTrend")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.join("ledger.csv"))
}
