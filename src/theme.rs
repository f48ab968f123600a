//! Centralized theme and styling for the TUI
//!
//! This module provides a single source of truth for all colors, styles,
//! and visual constants used throughout the application.
//!
//! # Usage
//! ```rust
//! use laptop_co2::theme::{Colors, Styles, Theme};
//! use laptop_co2::catalog::Condition;
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let title_style = Styles::title();
//! let bar = Theme::series_color(Condition::Refurbished);
//! ```

use crate::catalog::Condition;
use crate::notice::NoticeKind;
use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors
    // -------------------------------------------------------------------------

    /// Primary dark background - used for panels and the help window
    pub const BG_PRIMARY: Color = Color::Rgb(20, 20, 30);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Accent Colors
    // -------------------------------------------------------------------------

    /// Primary accent color - used for borders, titles, highlights
    pub const PRIMARY: Color = Color::Cyan;

    /// Secondary accent color - used for key hints, emphasis
    pub const SECONDARY: Color = Color::Yellow;

    // -------------------------------------------------------------------------
    // Semantic Colors
    // -------------------------------------------------------------------------

    /// Savings, refurbished badge
    pub const SUCCESS: Color = Color::Green;

    /// Soft outcomes (duplicate, no variant)
    pub const WARNING: Color = Color::Yellow;

    /// Informational feedback, totals
    pub const INFO: Color = Color::LightBlue;

    // -------------------------------------------------------------------------
    // Chart Series
    // -------------------------------------------------------------------------

    /// "Nieuw" bars (#3B82F6)
    pub const SERIES_NEW: Color = Color::Rgb(59, 130, 246);

    /// "Refurbished" bars (#10B981)
    pub const SERIES_REFURBISHED: Color = Color::Rgb(16, 185, 129);

    // -------------------------------------------------------------------------
    // UI Element Colors
    // -------------------------------------------------------------------------

    /// Focused panel border
    pub const BORDER_ACTIVE: Color = Color::Cyan;

    /// Unfocused panel border
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Highlighted row background
    pub const SELECTED_BG: Color = Color::Yellow;

    /// Highlighted row text (for contrast on yellow bg)
    pub const SELECTED_FG: Color = Color::Black;

    /// Navigation hint separators
    pub const NAV_HINT: Color = Color::DarkGray;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Muted/secondary text
    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Secondary text (gray)
    pub fn text_secondary() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// Main title style (cyan, bold)
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Bold headline inside a panel
    pub fn headline(color: Color) -> Style {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    /// Active border style
    pub fn border_active() -> Style {
        Style::default().fg(Colors::BORDER_ACTIVE)
    }

    /// Inactive border style
    pub fn border_inactive() -> Style {
        Style::default().fg(Colors::BORDER_INACTIVE)
    }

    /// Panel background
    pub fn panel_bg() -> Style {
        Style::default().bg(Colors::BG_PRIMARY)
    }

    /// Selected/highlighted item
    pub fn selected() -> Style {
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Colors::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Green "Refurbished" tag next to a record
    pub fn refurbished_badge() -> Style {
        Style::default()
            .fg(Colors::SUCCESS)
            .add_modifier(Modifier::BOLD)
    }
}

// =============================================================================
// SEMANTIC STYLING
// =============================================================================

/// Styles chosen by meaning rather than by element
pub struct Theme;

impl Theme {
    /// Border style for a panel depending on focus
    pub fn border(focused: bool) -> Style {
        if focused {
            Styles::border_active()
        } else {
            Styles::border_inactive()
        }
    }

    /// Notice banner style
    pub fn notice_style(kind: NoticeKind) -> Style {
        match kind {
            NoticeKind::Info => Style::default().fg(Colors::INFO),
            NoticeKind::Warning => Style::default().fg(Colors::WARNING),
        }
    }

    /// Bar color for a chart series
    pub fn series_color(series: Condition) -> Color {
        match series {
            Condition::New => Colors::SERIES_NEW,
            Condition::Refurbished => Colors::SERIES_REFURBISHED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_focus() {
        assert_eq!(Theme::border(true).fg, Some(Colors::BORDER_ACTIVE));
        assert_eq!(Theme::border(false).fg, Some(Colors::BORDER_INACTIVE));
    }

    #[test]
    fn test_series_colors_differ() {
        assert_ne!(
            Theme::series_color(Condition::New),
            Theme::series_color(Condition::Refurbished)
        );
    }
}
