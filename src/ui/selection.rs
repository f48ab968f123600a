//! Selected laptop cards

use crate::app::{AppMode, AppState};
use crate::catalog::LaptopRecord;
use crate::report;
use crate::theme::{Colors, Styles, Theme};
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

const EMPTY_HINT: &str = "Nog geen laptops geselecteerd. Zoek een laptop en druk op Enter.";

fn card(record: &LaptopRecord) -> ListItem<'static> {
    let mut name = vec![Span::styled(
        record.display_name(),
        Styles::headline(Colors::FG_PRIMARY),
    )];
    if record.is_refurbished {
        name.push(Span::styled(" Refurbished", Styles::refurbished_badge()));
    }

    ListItem::new(vec![
        Line::from(name),
        Line::from(Span::styled(
            format!("  Jaar: {}", record.year),
            Styles::text_secondary(),
        )),
        Line::from(Span::styled(
            format!("  CO2 Impact: {}", report::co2_label(record.co2)),
            Styles::text_secondary(),
        )),
        Line::from(Span::styled(
            format!("  {}", report::add_variant_label(record)),
            Styles::text_muted(),
        )),
        Line::from(""),
    ])
}

/// Render the selection as a list of cards
pub fn render_selection(f: &mut Frame, state: &AppState, area: Rect) {
    let focused = state.mode == AppMode::Selection;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Geselecteerde Laptops ({}) ", state.selection().len()))
        .border_style(Theme::border(focused));

    if state.selection().is_empty() {
        let hint = Paragraph::new(EMPTY_HINT)
            .style(Styles::text_muted())
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = state.selection().iter().map(card).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Styles::selected().remove_modifier(Modifier::BOLD))
        .highlight_symbol("▸ ");

    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(state.selection_cursor));
    }
    f.render_stateful_widget(list, area, &mut list_state);
}
