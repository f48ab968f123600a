//! Application module
//!
//! Contains the main application loop and key handling.
//!
//! # Module Structure
//! - `state` - Session state and the input events it accepts
//! - Main module - App struct and event loop

mod state;

pub use state::{AppMode, AppState};

use crate::catalog::Catalog;
use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::config_file::CalculatorConfig;
use crate::input::InputResult;
use crate::ui::UiRenderer;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Main application struct
pub struct App {
    state: AppState,
    ui_renderer: UiRenderer,
    /// Keybinding context for actions, nav bar and help
    keybinding_context: KeybindingContext,
    tick_rate: Duration,
}

impl App {
    /// Create a new application instance
    pub fn new(config: &CalculatorConfig) -> Self {
        info!("Creating new App instance");
        let mut state = AppState::new(Catalog::builtin(), config.notice_duration());
        state.show_about = config.show_about;

        Self {
            state,
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
            tick_rate: config.tick_rate(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Toggle help overlay visibility
    pub fn toggle_help(&mut self) {
        self.state.help_visible = !self.state.help_visible;
    }

    /// Run the main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> std::io::Result<()> {
        info!("Starting main application loop");

        loop {
            self.state.tick(Instant::now());

            terminal.draw(|f| {
                self.ui_renderer
                    .render(f, &self.state, &self.keybinding_context)
            })?;

            if crossterm::event::poll(self.tick_rate)? {
                match crossterm::event::read()? {
                    Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                        if self.handle_key_event(key_event, Instant::now()) {
                            break;
                        }
                    }
                    Event::Resize(width, height) => {
                        debug!(width, height, "terminal resized");
                    }
                    _ => {}
                }
            }
        }

        info!("Leaving main application loop");
        Ok(())
    }

    /// Handle one key press. Returns `true` when the user asked to quit.
    pub fn handle_key_event(&mut self, key_event: KeyEvent, now: Instant) -> bool {
        // Help overlay swallows everything; ?, F1 or Esc dismiss it
        if self.state.help_visible {
            if matches!(
                key_event.code,
                KeyCode::Char('?') | KeyCode::F(1) | KeyCode::Esc
            ) {
                self.toggle_help();
            }
            return false;
        }

        let action = self
            .keybinding_context
            .action_for(&self.state.mode, &key_event);

        // Search box gets first pick of keys that are not bound to an action
        if action.is_none() && self.state.mode == AppMode::Search {
            if self.state.search.handle_key(key_event) == InputResult::Changed {
                self.state.refresh_matches();
            }
            return false;
        }

        match action {
            Some(action) => self.perform(action, now),
            None => false,
        }
    }

    fn perform(&mut self, action: KeyAction, now: Instant) -> bool {
        debug!(?action, mode = %self.state.mode, "key action");
        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => self.toggle_help(),
            KeyAction::SwitchFocus => self.state.toggle_mode(),
            KeyAction::NavigateUp => self.state.move_up(),
            KeyAction::NavigateDown => self.state.move_down(),
            KeyAction::ClearSearch => self.state.on_search_term_change(""),
            KeyAction::Select => {
                if let Some(record) = self.state.highlighted_match() {
                    self.state.on_laptop_chosen_from_results(record.id, now);
                }
            }
            KeyAction::AddVariant => {
                let target = match self.state.mode {
                    AppMode::Search => self.state.highlighted_match(),
                    AppMode::Selection => self.state.highlighted_selection(),
                };
                if let Some(record) = target {
                    self.state.on_add_variant_requested(record.id, now);
                }
            }
            KeyAction::Remove => {
                if let Some(record) = self.state.highlighted_selection() {
                    self.state.on_laptop_removed(record.id);
                }
            }
        }
        false
    }
}
