//! Bottom navigation bar listing the keys available in the current panel

use super::keybindings::NavBarItem;
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub struct NavBar {
    items: Vec<NavBarItem>,
}

impl NavBar {
    pub fn new(items: Vec<NavBarItem>) -> Self {
        Self { items }
    }

    fn line(&self) -> Line<'static> {
        let mut spans = Vec::with_capacity(self.items.len() * 3);
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  │  ", Style::default().fg(Colors::NAV_HINT)));
            }
            spans.push(Span::styled(
                item.key_display.clone(),
                Style::default()
                    .fg(Colors::SECONDARY)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(format!(" {}", item.action_label), Styles::text_secondary()));
        }
        Line::from(spans)
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        f.render_widget(Paragraph::new(self.line()).alignment(Alignment::Center), area);
    }
}
