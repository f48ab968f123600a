//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the current focus.
//! The app resolves key events through [`KeybindingContext::action_for`] and the
//! nav bar and help overlay render from the same table, so they never drift.

use crate::app::AppMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateUp,
    NavigateDown,
    Select,
    AddVariant,
    Remove,
    ClearSearch,
    SwitchFocus,
    Help,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Whether this binding fires for `event`. Shift is ignored so `Q` and `q` agree.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        let modifiers = event.modifiers.difference(KeyModifiers::SHIFT);
        if modifiers != self.modifiers {
            return false;
        }
        match (self.key, event.code) {
            (KeyCode::Char(a), KeyCode::Char(b)) => a.eq_ignore_ascii_case(&b),
            (a, b) => a == b,
        }
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Mode-specific keybindings
    mode_bindings: HashMap<AppMode, Vec<Keybinding>>,
    /// Global keybindings (available in all modes)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            mode_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all modes
    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::F(1), KeyAction::Help, "F1", "Help"),
            Keybinding::new(KeyCode::Tab, KeyAction::SwitchFocus, "Tab", "Switch panel"),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "Ctrl+C",
                "Quit",
            ),
        ];

        // Search box owns printable keys, so actions need modifiers or special keys
        self.mode_bindings.insert(
            AppMode::Search,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Previous match"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Next match"),
                Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Add to comparison"),
                Keybinding::with_modifiers(
                    KeyCode::Char('v'),
                    KeyModifiers::CONTROL,
                    KeyAction::AddVariant,
                    "Ctrl+V",
                    "Add other variant",
                ),
                Keybinding::new(KeyCode::Esc, KeyAction::ClearSearch, "Esc", "Clear search"),
            ],
        );

        self.mode_bindings.insert(
            AppMode::Selection,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Previous laptop"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Next laptop"),
                Keybinding::new(
                    KeyCode::Char('v'),
                    KeyAction::AddVariant,
                    "V",
                    "Add other variant",
                ),
                Keybinding::new(KeyCode::Char('d'), KeyAction::Remove, "D", "Remove"),
                Keybinding::new(KeyCode::Delete, KeyAction::Remove, "Del", "Remove"),
                Keybinding::new(KeyCode::Char('/'), KeyAction::SwitchFocus, "/", "Search"),
                Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
                Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            ],
        );
    }

    /// Get keybindings for a specific mode (includes global bindings)
    pub fn get_bindings(&self, mode: &AppMode) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();

        if let Some(mode_bindings) = self.mode_bindings.get(mode) {
            bindings.extend(mode_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());

        bindings
    }

    /// Resolve a key event to an action in the given mode
    pub fn action_for(&self, mode: &AppMode, event: &KeyEvent) -> Option<KeyAction> {
        self.get_bindings(mode)
            .into_iter()
            .find(|b| b.matches(event))
            .map(|b| b.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, mode: &AppMode) -> Vec<NavBarItem> {
        let bindings = self.get_bindings(mode);

        let priority_actions = match mode {
            AppMode::Search => vec![
                KeyAction::NavigateUp,
                KeyAction::Select,
                KeyAction::AddVariant,
                KeyAction::SwitchFocus,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            AppMode::Selection => vec![
                KeyAction::NavigateUp,
                KeyAction::Remove,
                KeyAction::AddVariant,
                KeyAction::SwitchFocus,
                KeyAction::Help,
                KeyAction::Quit,
            ],
        };

        let mut items: Vec<NavBarItem> = Vec::new();
        for action in priority_actions {
            // Up/Down collapse into one item
            if action == KeyAction::NavigateUp {
                items.push(NavBarItem {
                    key_display: "Up/Dn".to_string(),
                    action_label: "Navigate".to_string(),
                });
                continue;
            }
            if let Some(binding) = bindings.iter().find(|b| b.action == action) {
                items.push(NavBarItem {
                    key_display: binding.display.clone(),
                    action_label: binding.description.clone(),
                });
            }
        }

        items
    }

    /// Get full help content for a mode (for help overlay)
    pub fn get_help_content(&self, mode: &AppMode) -> Vec<HelpSection> {
        let groups: [(&str, fn(KeyAction) -> bool); 3] = [
            ("Navigation", |a| {
                matches!(a, KeyAction::NavigateUp | KeyAction::NavigateDown)
            }),
            ("Actions", |a| {
                matches!(
                    a,
                    KeyAction::Select
                        | KeyAction::AddVariant
                        | KeyAction::Remove
                        | KeyAction::ClearSearch
                )
            }),
            ("General", |a| {
                matches!(a, KeyAction::SwitchFocus | KeyAction::Help | KeyAction::Quit)
            }),
        ];

        let bindings = self.get_bindings(mode);
        groups
            .iter()
            .filter_map(|(title, in_group)| {
                let items: Vec<(String, String)> = bindings
                    .iter()
                    .filter(|b| in_group(b.action))
                    .map(|b| (b.display.clone(), b.description.clone()))
                    .collect();
                (!items.is_empty()).then(|| HelpSection {
                    title: title.to_string(),
                    items,
                })
            })
            .collect()
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}
