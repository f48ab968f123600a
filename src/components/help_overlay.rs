//! Help overlay component
//!
//! Displays context-sensitive help in a centered floating window.

use super::keybindings::{HelpSection, KeybindingContext};
use crate::app::AppMode;
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Help overlay component
pub struct HelpOverlay {
    content: Vec<Line<'static>>,
}

impl HelpOverlay {
    /// Create a new help overlay for the given mode
    pub fn new(mode: &AppMode, keybinding_ctx: &KeybindingContext) -> Self {
        let sections = keybinding_ctx.get_help_content(mode);
        Self {
            content: Self::build_content(&sections, mode),
        }
    }

    /// Build the help content from sections
    fn build_content(sections: &[HelpSection], mode: &AppMode) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = Vec::new();

        lines.push(Line::from(vec![Span::styled(
            "  Laptop CO2 Calculator Help  ",
            Styles::title(),
        )]));
        lines.push(Line::from(""));

        lines.push(Line::from(vec![
            Span::styled("Current: ", Style::default().fg(Colors::FG_MUTED)),
            Span::styled(mode.to_string(), Style::default().fg(Colors::SECONDARY)),
        ]));
        lines.push(Line::from(""));

        for section in sections {
            lines.push(Line::from(vec![Span::styled(
                format!("  {}  ", section.title),
                Style::default()
                    .fg(Colors::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            )]));

            for (key, description) in &section.items {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(
                        format!("{:<10}", key),
                        Style::default()
                            .fg(Colors::PRIMARY)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(description.clone(), Styles::text()),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![Span::styled(
            "Press ?, F1 or Esc to close",
            Styles::text_muted(),
        )]));

        lines
    }

    /// Number of content lines, for sizing
    pub fn line_count(&self) -> usize {
        self.content.len()
    }

    /// Render the help overlay
    pub fn render(&self, f: &mut Frame, parent: Rect) {
        let height = (self.content.len() as u16 + 2).min(parent.height);
        let area = centered_rect(60, height, parent);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .border_style(Styles::border_active())
            .style(Styles::panel_bg());

        f.render_widget(Clear, area);
        f.render_widget(
            Paragraph::new(self.content.clone())
                .block(block)
                .wrap(Wrap { trim: false }),
            area,
        );
    }
}

/// A rect of `percent_x` width and fixed `height`, centered in `parent`.
pub fn centered_rect(percent_x: u16, height: u16, parent: Rect) -> Rect {
    let scaled = u32::from(parent.width) * u32::from(percent_x) / 100;
    let width = (scaled as u16).max(40).min(parent.width);
    let height = height.min(parent.height);
    Rect {
        x: parent.x + (parent.width - width) / 2,
        y: parent.y + (parent.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits_parent() {
        let parent = Rect::new(0, 0, 100, 30);
        let area = centered_rect(60, 20, parent);
        assert_eq!(area, Rect::new(20, 5, 60, 20));

        let small = Rect::new(0, 0, 30, 10);
        let area = centered_rect(60, 20, small);
        assert_eq!(area, Rect::new(0, 0, 30, 10));
    }

    #[test]
    fn test_content_mentions_mode() {
        let ctx = KeybindingContext::new();
        let overlay = HelpOverlay::new(&AppMode::Search, &ctx);
        let text: String = overlay
            .content
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect();
        assert!(text.contains("Zoeken"));
        assert!(text.contains("Ctrl+V"));
        assert!(overlay.line_count() > 6);
    }
}
