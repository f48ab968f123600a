//! Search box and match list

use crate::app::{AppMode, AppState};
use crate::catalog::LaptopRecord;
use crate::report;
use crate::theme::{Styles, Theme};
use ratatui::{
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Render the search input, with a placeholder while empty
pub fn render_search_box(f: &mut Frame, state: &AppState, area: Rect) {
    let focused = state.mode == AppMode::Search;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Zoek en vergelijk laptops ")
        .border_style(Theme::border(focused));

    let content = if state.search.is_empty() {
        Line::from(Span::styled(report::SEARCH_PLACEHOLDER, Styles::text_muted()))
    } else {
        Line::from(Span::styled(state.search_term().to_string(), Styles::text()))
    };
    f.render_widget(Paragraph::new(content).block(block), area);

    if focused && !state.help_visible {
        f.set_cursor_position(cursor_position(area, state.search.cursor()));
    }
}

/// Terminal cursor for a char offset in the search box, clamped inside its border.
fn cursor_position(area: Rect, cursor: usize) -> Position {
    let offset = u16::try_from(cursor).unwrap_or(u16::MAX);
    let x = area
        .x
        .saturating_add(1)
        .saturating_add(offset)
        .min(area.right().saturating_sub(2));
    Position::new(x, area.y.saturating_add(1))
}

fn match_item(record: &LaptopRecord) -> ListItem<'static> {
    let mut spans = vec![Span::styled(report::record_line(record), Styles::text())];
    if record.is_refurbished {
        spans.push(Span::styled(" Refurbished", Styles::refurbished_badge()));
    }
    spans.push(Span::styled(
        format!("  {}", report::co2_label(record.co2)),
        Styles::text_secondary(),
    ));
    ListItem::new(Line::from(spans))
}

/// Render the matches for the current term
pub fn render_matches(f: &mut Frame, state: &AppState, area: Rect) {
    let focused = state.mode == AppMode::Search;
    let items: Vec<ListItem> = state.matches().iter().map(|r| match_item(r)).collect();

    let title = match state.highlighted_match() {
        Some(record) if focused => format!(
            " Resultaten ({}) - Ctrl+V: {} ",
            items.len(),
            report::add_variant_label(record)
        ),
        _ => format!(" Resultaten ({}) ", items.len()),
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Theme::border(focused)),
        )
        .highlight_style(Styles::selected())
        .highlight_symbol("▸ ");

    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(state.match_cursor));
    }
    f.render_stateful_widget(list, area, &mut list_state);
}
