use std::path::PathBuf;

use anyhow::Result;

use crate::ledger;
use crate::report::{month_label, Report, ReportParams};
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Trends,
    Surplus,
    Comparison,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Trends, Self::Surplus, Self::Comparison]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trends => write!(f, "Trends"),
            Self::Surplus => write!(f, "Surplus"),
            Self::Comparison => write!(f, "Comparison"),
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) show_help: bool,
    pub(crate) status_message: String,

    pub(crate) ledger_path: PathBuf,
    pub(crate) params: ReportParams,
    /// Rows in the ledger file, including those outside the window.
    pub(crate) ledger_rows: usize,
    pub(crate) report: Report,

    // Comparison table cursor
    pub(crate) comparison_index: usize,
    pub(crate) comparison_scroll: usize,

    // Layout (updated each event loop pass)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(ledger_path: PathBuf, params: ReportParams) -> Self {
        Self {
            running: true,
            screen: Screen::Trends,
            show_help: false,
            status_message: String::new(),
            ledger_path,
            params,
            ledger_rows: 0,
            report: Report::empty(params),
            comparison_index: 0,
            comparison_scroll: 0,
            visible_rows: 20,
        }
    }

    /// Reload the ledger from disk and rebuild every derived series.
    pub(crate) fn reload(&mut self) -> Result<()> {
        let transactions = ledger::load(&self.ledger_path)?;
        self.ledger_rows = transactions.len();
        self.report = Report::build(&transactions, self.params);

        let len = self.report.comparisons.len();
        if self.comparison_index >= len {
            self.comparison_index = len.saturating_sub(1);
        }
        if self.comparison_scroll > self.comparison_index {
            self.comparison_scroll = self.comparison_index;
        }

        self.set_status(format!(
            "Loaded {} rows from {} ({} in window)",
            self.ledger_rows,
            self.ledger_path.display(),
            self.report.window_rows
        ));
        Ok(())
    }

    /// "2021-08..2024-07" over the months the report covers.
    pub(crate) fn window_label(&self) -> String {
        match (self.report.start, self.report.latest_month) {
            (Some(start), Some(latest)) => {
                format!("{}..{}", month_label(start), month_label(latest))
            }
            _ => "no data".into(),
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    // ── Navigation ────────────────────────────────────────────

    pub(crate) fn switch_screen(&mut self, screen: Screen) {
        self.screen = screen;
        self.set_status(format!("{screen}"));
    }

    /// Tab moves forward through the screens, Shift-Tab backward.
    pub(crate) fn cycle_screen(&mut self, step: isize) {
        let screens = Screen::all();
        let here = screens.iter().position(|s| *s == self.screen).unwrap_or(0);
        let next = (here as isize + step).rem_euclid(screens.len() as isize);
        self.switch_screen(screens[next as usize]);
    }

    // The comparison table is the only scrollable screen; cursor keys
    // are ignored everywhere else.

    pub(crate) fn move_down(&mut self) {
        if self.screen != Screen::Comparison {
            return;
        }
        scroll_down(
            &mut self.comparison_index,
            &mut self.comparison_scroll,
            self.report.comparisons.len(),
            self.visible_rows.max(1),
        );
    }

    pub(crate) fn move_up(&mut self) {
        if self.screen == Screen::Comparison {
            scroll_up(&mut self.comparison_index, &mut self.comparison_scroll);
        }
    }

    pub(crate) fn goto_top(&mut self) {
        if self.screen == Screen::Comparison {
            scroll_to_top(&mut self.comparison_index, &mut self.comparison_scroll);
        }
    }

    pub(crate) fn goto_bottom(&mut self) {
        if self.screen != Screen::Comparison {
            return;
        }
        scroll_to_bottom(
            &mut self.comparison_index,
            &mut self.comparison_scroll,
            self.report.comparisons.len(),
            self.visible_rows.max(1),
        );
    }

    pub(crate) fn half_page_down(&mut self) {
        for _ in 0..self.visible_rows / 2 {
            self.move_down();
        }
    }

    pub(crate) fn half_page_up(&mut self) {
        for _ in 0..self.visible_rows / 2 {
            self.move_up();
        }
    }
}
