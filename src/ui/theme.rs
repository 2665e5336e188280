use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders};

use crate::report::Direction;

// Catppuccin Macchiato
pub(crate) const HEADER_BG: Color = Color::Rgb(36, 39, 58);
pub(crate) const MESSAGE_BG: Color = Color::Rgb(30, 32, 48);
pub(crate) const SURFACE: Color = Color::Rgb(54, 58, 79);
pub(crate) const OVERLAY: Color = Color::Rgb(110, 115, 141);
pub(crate) const TEXT: Color = Color::Rgb(202, 211, 245);
pub(crate) const TEXT_DIM: Color = Color::Rgb(165, 173, 203);
pub(crate) const ACCENT: Color = Color::Rgb(138, 173, 244);
pub(crate) const GREEN: Color = Color::Rgb(166, 218, 149);
pub(crate) const RED: Color = Color::Rgb(237, 135, 150);
pub(crate) const YELLOW: Color = Color::Rgb(238, 212, 159);

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(TEXT)
        .bg(HEADER_BG)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn selected_style() -> Style {
    Style::default().fg(HEADER_BG).bg(ACCENT)
}

pub(crate) fn normal_style() -> Style {
    Style::default().fg(TEXT)
}

pub(crate) fn dim_style() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub(crate) fn alt_row_style() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub(crate) fn message_style() -> Style {
    Style::default().fg(TEXT).bg(MESSAGE_BG)
}

pub(crate) fn status_bar_style() -> Style {
    Style::default().fg(TEXT_DIM).bg(SURFACE)
}

// ── Chart and table styling ──────────────────────────────────

/// Green for income lines and saved-surplus dots.
pub(crate) fn income_style() -> Style {
    Style::default().fg(GREEN)
}

/// Red for expense lines and overspent-surplus dots.
pub(crate) fn expense_style() -> Style {
    Style::default().fg(RED)
}

/// The rolling-mean line on the surplus chart.
pub(crate) fn trend_style() -> Style {
    Style::default().fg(YELLOW)
}

/// Bordered panel with a dim bold title; every screen draws inside one.
pub(crate) fn panel_block(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(OVERLAY))
        .title(Span::styled(
            title,
            Style::default().fg(TEXT_DIM).add_modifier(Modifier::BOLD),
        ))
}

/// Cell tint for a comparison verdict: green when the month's signed
/// total moved up, red when it moved down, surface blue when unchanged.
pub(crate) fn direction_style(direction: Direction) -> Style {
    match direction {
        Direction::Up => Style::default().fg(HEADER_BG).bg(GREEN),
        Direction::Down => Style::default().fg(HEADER_BG).bg(RED),
        Direction::Flat => Style::default().fg(TEXT).bg(SURFACE),
    }
}
