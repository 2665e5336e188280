use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use super::app::{App, Screen};
use super::theme;

pub(crate) fn render(f: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tab bar
            Constraint::Min(5),    // active screen
            Constraint::Length(1), // status bar
            Constraint::Length(1), // message bar
        ])
        .split(f.area());

    render_tab_bar(f, rows[0], app);
    match app.screen {
        Screen::Trends => super::screens::trends::render(f, rows[1], app),
        Screen::Surplus => super::screens::surplus::render(f, rows[1], app),
        Screen::Comparison => super::screens::comparison::render(f, rows[1], app),
    }
    render_status_bar(f, rows[2], app);
    render_message_bar(f, rows[3], app);

    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_tab_bar(f: &mut Frame, area: Rect, app: &App) {
    let chip = theme::selected_style().add_modifier(Modifier::BOLD);
    let titles: Vec<Line> = Screen::all()
        .iter()
        .enumerate()
        .map(|(i, screen)| {
            let label = format!(" {} {screen} ", i + 1);
            if *screen == app.screen {
                Line::from(Span::styled(label, chip))
            } else {
                Line::from(Span::styled(label, theme::dim_style()))
            }
        })
        .collect();

    let tabs = Tabs::new(titles)
        .divider(Span::raw(" "))
        .padding("", "")
        .style(Style::default().bg(theme::HEADER_BG));
    f.render_widget(tabs, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let chip = format!(" {} ", app.screen);
    let info = format!(
        " {} | {} rows in window | {} categories",
        app.window_label(),
        app.report.window_rows,
        app.report.comparisons.len()
    );
    let hints = match app.screen {
        Screen::Trends | Screen::Surplus => " r reload | ? help ",
        Screen::Comparison => " j/k rows | g/G top/bottom | r reload | ? help ",
    };

    let gap = (area.width as usize).saturating_sub(chip.len() + info.len() + hints.len());
    let bar = Line::from(vec![
        Span::styled(chip, theme::selected_style().add_modifier(Modifier::BOLD)),
        Span::styled(info, theme::status_bar_style()),
        Span::styled(" ".repeat(gap), theme::status_bar_style()),
        Span::styled(hints, theme::status_bar_style()),
    ]);
    f.render_widget(Paragraph::new(bar), area);
}

fn render_message_bar(f: &mut Frame, area: Rect, app: &App) {
    let content = if app.status_message.is_empty() {
        Line::from(Span::styled(
            " Press 1-3 to switch screens, r to reload, ? for help",
            theme::dim_style(),
        ))
    } else {
        Line::from(Span::styled(&app.status_message, theme::message_style()))
    };

    let bar = Paragraph::new(content).style(Style::default().bg(theme::MESSAGE_BG));
    f.render_widget(bar, area);
}

const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("1/2/3", "Trends / Surplus / Comparison"),
            ("Tab, Shift-Tab", "Cycle screens"),
            ("j/k, Up/Down", "Move the comparison cursor"),
            ("g/G", "Jump to the first or last row"),
            ("Ctrl-d/Ctrl-u", "Half page down or up"),
        ],
    ),
    (
        "Actions",
        &[
            ("r", "Reload the ledger and recompute"),
            ("Esc", "Clear the status message"),
            ("q, Ctrl-q", "Quit"),
        ],
    ),
    (
        "Reading the screens",
        &[
            ("Trends", "Monthly income (green) vs expenses (red)"),
            ("Surplus", "Saved/overspent dots with the rolling mean"),
            ("Comparison", "Newest month tinted against its average"),
        ],
    ),
];

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let mut text = vec![Line::from(Span::styled(
        " CashTrend Help ",
        Style::default()
            .fg(theme::ACCENT)
            .add_modifier(Modifier::BOLD),
    ))];
    for (section, keys) in HELP_SECTIONS {
        text.push(Line::from(""));
        text.push(Line::from(Span::styled(
            format!(" {section}"),
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        )));
        for (key, what) in *keys {
            text.push(Line::from(vec![
                Span::styled(format!("  {key:<16}"), theme::normal_style()),
                Span::styled(*what, theme::dim_style()),
            ]));
        }
    }
    text.push(Line::from(""));
    text.push(Line::from(Span::styled(
        " Press any key to close ",
        theme::dim_style(),
    )));

    let popup = centered(area, 64, text.len() as u16 + 2);
    f.render_widget(Clear, popup);
    let body = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::HEADER_BG)),
    );
    f.render_widget(body, popup);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width.saturating_sub(4));
    let h = height.min(area.height.saturating_sub(2));
    Rect::new(
        area.x + (area.width.saturating_sub(w)) / 2,
        area.y + (area.height.saturating_sub(h)) / 2,
        w,
        h,
    )
}
