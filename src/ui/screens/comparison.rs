use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use crate::report::month_label;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    if app.report.comparisons.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled(
                "No categories active in both periods",
                theme::dim_style(),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "A category must appear in the latest month and in the trailing window",
                theme::dim_style(),
            )),
        ];
        let block = theme::panel_block(" Category Comparison (0) ".into());
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = [
        "Category".to_string(),
        format!("Avg {} Months", app.params.comparison_months),
        "Current Month".to_string(),
    ]
    .into_iter()
    .map(|h| Cell::from(h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = app
        .report
        .comparisons
        .iter()
        .enumerate()
        .skip(app.comparison_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, cmp)| {
            let style = if i == app.comparison_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            // only the current cell is tinted; green means the signed total
            // moved up against the trailing average, red means it moved down
            Row::new(vec![
                Cell::from(truncate(&cmp.category, 24)),
                Cell::from(format_amount(cmp.trailing_average)),
                Cell::from(format_amount(cmp.current_total))
                    .style(theme::direction_style(cmp.direction())),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Min(16),
        Constraint::Length(16),
        Constraint::Length(16),
    ];

    let title = match app.report.latest_month {
        Some(month) => format!(
            " Category Comparison ({} vs prior {} months) ",
            month_label(month),
            app.params.comparison_months
        ),
        None => format!(" Category Comparison ({}) ", app.report.comparisons.len()),
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(theme::panel_block(title));

    f.render_widget(table, area);
}
