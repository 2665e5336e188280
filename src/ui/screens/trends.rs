use ratatui::{
    layout::Rect,
    symbols,
    text::{Line, Span},
    widgets::{Axis, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::report::{months_between, MonthlyTotal};
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{dollar_axis_labels, month_axis_labels, month_runs, to_f64, value_bounds};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let report = &app.report;
    if !report.has_data() {
        render_empty(f, area);
        return;
    }

    let first = match (report.income.first(), report.expenses.first()) {
        (Some(a), Some(b)) => a.month.min(b.month),
        (Some(a), None) => a.month,
        (None, Some(b)) => b.month,
        (None, None) => return,
    };
    let last = match (report.income.last(), report.expenses.last()) {
        (Some(a), Some(b)) => a.month.max(b.month),
        (Some(a), None) => a.month,
        (None, Some(b)) => b.month,
        (None, None) => return,
    };

    let to_xy = |p: &MonthlyTotal| (months_between(first, p.month) as f64, to_f64(p.amount));
    let income_runs: Vec<Vec<(f64, f64)>> = month_runs(&report.income)
        .into_iter()
        .map(|run| run.iter().map(to_xy).collect())
        .collect();
    let expense_runs: Vec<Vec<(f64, f64)>> = month_runs(&report.expenses)
        .into_iter()
        .map(|run| run.iter().map(to_xy).collect())
        .collect();

    // one dataset per contiguous run; name only the first so the legend
    // shows each series once
    let mut datasets = Vec::new();
    for (i, run) in income_runs.iter().enumerate() {
        let mut dataset = Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(theme::income_style())
            .data(run);
        if i == 0 {
            dataset = dataset.name("Income");
        }
        datasets.push(dataset);
    }
    for (i, run) in expense_runs.iter().enumerate() {
        let mut dataset = Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(theme::expense_style())
            .data(run);
        if i == 0 {
            dataset = dataset.name("Expenses");
        }
        datasets.push(dataset);
    }

    let values: Vec<f64> = report
        .income
        .iter()
        .chain(report.expenses.iter())
        .map(|p| to_f64(p.amount))
        .collect();
    let y_bounds = value_bounds(&values);
    let x_bounds = [0.0, (months_between(first, last) as f64).max(1.0)];

    let chart = Chart::new(datasets)
        .block(theme::panel_block(format!(
            " Income & Expenses ({}) ",
            app.window_label()
        )))
        .x_axis(
            Axis::default()
                .style(theme::dim_style())
                .bounds(x_bounds)
                .labels(month_axis_labels(first, last)),
        )
        .y_axis(
            Axis::default()
                .style(theme::dim_style())
                .bounds(y_bounds)
                .labels(dollar_axis_labels(y_bounds)),
        );

    f.render_widget(chart, area);
}

fn render_empty(f: &mut Frame, area: Rect) {
    let msg = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "No completed months to chart",
            theme::dim_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Rows in the ledger's newest month are held out until the month completes",
            theme::dim_style(),
        )),
    ])
    .centered()
    .block(theme::panel_block(" Income & Expenses ".into()));
    f.render_widget(msg, area);
}
