//! CO2 comparison bar chart
//!
//! One bar group per selected laptop with a "Nieuw" and a "Refurbished" bar;
//! a laptop only ever has a non-zero value in one of them.

use crate::aggregate::ChartEntry;
use crate::app::AppState;
use crate::catalog::Condition;
use crate::theme::{Styles, Theme};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};
use strum::IntoEnumIterator;

/// Bars of one entry, in series order
fn bars(entry: &ChartEntry<'_>) -> Vec<Bar<'static>> {
    Condition::iter()
        .map(|series| {
            let value = entry.value(series);
            let color = Theme::series_color(series);
            // zero bars stay unlabelled
            let label = (value > 0.0).then(|| value.to_string()).unwrap_or_default();
            Bar::default()
                .value(value.round() as u64)
                .text_value(label)
                .style(Style::default().fg(color))
                .value_style(Style::default().bg(color))
        })
        .collect()
}

fn legend() -> Line<'static> {
    let mut spans = vec![Span::styled(" Vergelijking CO2 Impact ", Styles::title())];
    for series in Condition::iter() {
        spans.push(Span::styled("■ ", Style::default().fg(Theme::series_color(series))));
        spans.push(Span::styled(format!("{} ", series), Styles::text_secondary()));
    }
    Line::from(spans)
}

/// Render the chart for the current selection
pub fn render_chart(f: &mut Frame, state: &AppState, area: Rect) {
    let entries = state.chart_entries();
    let groups: Vec<BarGroup> = entries
        .iter()
        .map(|entry| {
            BarGroup::default()
                .label(Line::from(entry.record.model))
                .bars(&bars(entry))
        })
        .collect();

    let mut chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(legend())
                .border_style(Styles::border_inactive()),
        )
        .bar_width(7)
        .bar_gap(0)
        .group_gap(2);

    for group in groups {
        chart = chart.data(group);
    }

    f.render_widget(chart, area);
}
