use ratatui::{
    layout::Rect,
    symbols,
    text::{Line, Span},
    widgets::{Axis, Chart, Dataset, GraphType, Paragraph},
    Frame,
};
use rust_decimal::Decimal;

use crate::report::months_between;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{dollar_axis_labels, month_axis_labels, to_f64, value_bounds};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let report = &app.report;
    let Some(first) = report.surplus.first().map(|p| p.month) else {
        render_empty(f, area);
        return;
    };
    let last = report.surplus.last().map_or(first, |p| p.month);

    let gains: Vec<(f64, f64)> = report
        .surplus
        .iter()
        .filter(|p| p.surplus >= Decimal::ZERO)
        .map(|p| (months_between(first, p.month) as f64, to_f64(p.surplus)))
        .collect();
    let losses: Vec<(f64, f64)> = report
        .surplus
        .iter()
        .filter(|p| p.surplus < Decimal::ZERO)
        .map(|p| (months_between(first, p.month) as f64, to_f64(p.surplus)))
        .collect();
    let trend: Vec<(f64, f64)> = report
        .surplus
        .iter()
        .filter_map(|p| {
            p.smoothed
                .map(|s| (months_between(first, p.month) as f64, to_f64(s)))
        })
        .collect();

    let mut datasets = Vec::new();
    if !gains.is_empty() {
        datasets.push(
            Dataset::default()
                .name("Saved")
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(theme::income_style())
                .data(&gains),
        );
    }
    if !losses.is_empty() {
        datasets.push(
            Dataset::default()
                .name("Overspent")
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(theme::expense_style())
                .data(&losses),
        );
    }
    if !trend.is_empty() {
        datasets.push(
            Dataset::default()
                .name(format!("{}-month trend", app.params.comparison_months))
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(theme::trend_style())
                .data(&trend),
        );
    }

    let values: Vec<f64> = report.surplus.iter().map(|p| to_f64(p.surplus)).collect();
    // keep zero in view so saved and overspent months read against the axis
    let mut y_bounds = value_bounds(&values);
    y_bounds[0] = y_bounds[0].min(0.0);
    y_bounds[1] = y_bounds[1].max(0.0);
    let x_bounds = [0.0, (months_between(first, last) as f64).max(1.0)];

    let chart = Chart::new(datasets)
        .block(theme::panel_block(format!(
            " Monthly Surplus ({}) ",
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
            "No months with both income and expenses",
            theme::dim_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Surplus is only computed for months that appear in both series",
            theme::dim_style(),
        )),
    ])
    .centered()
    .block(theme::panel_block(" Monthly Surplus ".into()));
    f.render_widget(msg, area);
}
