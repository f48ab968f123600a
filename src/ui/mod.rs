//! User interface rendering module
//!
//! This module is organized into submodules for better maintainability:
//! - `header` - Title, notice banner, nav bar and help overlay
//! - `search` - Search box and match list
//! - `selection` - Selected laptop cards
//! - `summary` - Conclusion, pairings and the about panel
//! - `chart` - CO2 comparison bar chart
//!
//! Panels follow the state: the match list only shows for a non-empty term,
//! the summary only for a non-empty selection, the chart only when there is
//! more than one laptop to compare.

mod chart;
mod header;
mod search;
mod selection;
mod summary;

use crate::app::AppState;
use crate::components::keybindings::KeybindingContext;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Height of the about panel when enabled
const ABOUT_HEIGHT: u16 = 6;

/// Stateless renderer for the whole screen
#[derive(Debug, Default)]
pub struct UiRenderer;

impl UiRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Draw one frame
    pub fn render(&self, f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
        let area = f.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Search box
                Constraint::Length(1), // Notice
                Constraint::Min(8),    // Content
                Constraint::Length(if state.show_about { ABOUT_HEIGHT } else { 0 }),
                Constraint::Length(1), // Nav bar
            ])
            .split(area);

        header::render_title(f, chunks[0]);
        search::render_search_box(f, state, chunks[1]);
        header::render_notice(f, state, chunks[2]);
        self.render_content(f, state, chunks[3]);
        if state.show_about {
            summary::render_about(f, chunks[4]);
        }
        header::render_nav_bar(f, state, keybinding_ctx, chunks[5]);

        if state.help_visible {
            header::render_help_overlay(f, state, keybinding_ctx);
        }
    }

    fn render_content(&self, f: &mut Frame, state: &AppState, area: Rect) {
        // Conclusion column only exists for a non-empty selection
        if state.selection().is_empty() {
            self.render_left_column(f, state, area);
            return;
        }

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);

        self.render_left_column(f, state, columns[0]);

        if state.chart_visible() {
            let right = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(columns[1]);
            summary::render_summary(f, state, right[0]);
            chart::render_chart(f, state, right[1]);
        } else {
            summary::render_summary(f, state, columns[1]);
        }
    }

    fn render_left_column(&self, f: &mut Frame, state: &AppState, area: Rect) {
        if state.results_visible() {
            let left = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(area);
            search::render_matches(f, state, left[0]);
            selection::render_selection(f, state, left[1]);
        } else {
            selection::render_selection(f, state, area);
        }
    }
}
