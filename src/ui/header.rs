//! Title, notice banner and the overlays shared by every screen

use crate::app::AppState;
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::components::nav_bar::NavBar;
use crate::report;
use crate::theme::{Styles, Theme};
use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the application title
pub fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new(report::TITLE)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center)
        .style(Styles::title());
    f.render_widget(title, area);
}

/// Render the live notice, if any
pub fn render_notice(f: &mut Frame, state: &AppState, area: Rect) {
    let Some(notice) = state.notice() else {
        return;
    };
    let banner = Paragraph::new(notice.message.as_str())
        .alignment(Alignment::Center)
        .style(Theme::notice_style(notice.kind));
    f.render_widget(banner, area);
}

/// Render the navigation bar
pub fn render_nav_bar(
    f: &mut Frame,
    state: &AppState,
    keybinding_ctx: &KeybindingContext,
    area: Rect,
) {
    let nav_bar = NavBar::new(keybinding_ctx.get_nav_items(&state.mode));
    nav_bar.render(f, area);
}

/// Render the help overlay
pub fn render_help_overlay(f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
    let area = f.area();
    let help_overlay = HelpOverlay::new(&state.mode, keybinding_ctx);
    help_overlay.render(f, area);
}
