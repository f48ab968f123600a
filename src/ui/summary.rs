//! Conclusion panel and the about text

use crate::aggregate::Aggregate;
use crate::app::AppState;
use crate::report;
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Lines of the conclusion for a non-empty selection
pub fn summary_lines(aggregate: &Aggregate<'_>) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            report::total_line(aggregate),
            Styles::headline(Colors::INFO),
        )),
        Line::from(Span::styled(
            report::flights_line(aggregate.flights_equivalent),
            Styles::text_secondary(),
        )),
    ];

    if !aggregate.has_pairings() {
        return lines;
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Vergelijking Nieuw vs. Refurbished",
        Styles::title(),
    )));
    for pair in &aggregate.pairings {
        let [name, new, refurbished, saving] = report::pairing_lines(pair);
        lines.push(Line::from(Span::styled(name, Styles::headline(Colors::FG_PRIMARY))));
        lines.push(Line::from(Span::styled(format!("  {}", new), Styles::text())));
        lines.push(Line::from(Span::styled(format!("  {}", refurbished), Styles::text())));
        lines.push(Line::from(Span::styled(
            format!("  {}", saving),
            Styles::headline(Colors::SUCCESS),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        report::savings_total_line(aggregate),
        Styles::headline(Colors::SUCCESS),
    )));
    lines.push(Line::from(Span::styled(
        report::savings_flights_line(aggregate.savings_flights_equivalent),
        Styles::text_secondary(),
    )));

    lines
}

/// Render the conclusion panel. Callers only do so for a non-empty selection.
pub fn render_summary(f: &mut Frame, state: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Conclusie ")
        .border_style(Styles::border_inactive());

    f.render_widget(
        Paragraph::new(summary_lines(&state.aggregate()))
            .block(block)
            .wrap(Wrap { trim: true }),
        area,
    );
}

/// Render the about panel
pub fn render_about(f: &mut Frame, area: Rect) {
    let about = Paragraph::new(report::ABOUT_TEXT)
        .style(Styles::text_secondary())
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Over deze calculator ")
                .border_style(Styles::border_inactive()),
        );
    f.render_widget(about, area);
}
