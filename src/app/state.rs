//! Application state definitions
//!
//! `AppState` is the whole session: search box, match list, selection and the
//! live notice. Its `on_*` methods are the input events the UI raises; derived
//! figures are recomputed from the state on demand.

use crate::aggregate::{chart_entries, Aggregate, ChartEntry};
use crate::catalog::{Catalog, LaptopRecord};
use crate::input::TextInput;
use crate::notice::{Notice, NoticeBoard};
use crate::query::search;
use crate::report;
use crate::selection::{SelectOutcome, SelectionSet, VariantOutcome};
use std::time::{Duration, Instant};
use strum::{Display, EnumIter};
use tracing::{debug, warn};

/// Which panel owns the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum AppMode {
    /// Typing in the search box, picking from the matches
    #[strum(serialize = "Zoeken")]
    Search,
    /// Browsing the selected laptops
    #[strum(serialize = "Selectie")]
    Selection,
}

impl AppMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Search => Self::Selection,
            Self::Selection => Self::Search,
        }
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    catalog: Catalog<'static>,
    /// Current focus
    pub mode: AppMode,
    /// Search box contents
    pub search: TextInput,
    /// Search results for the current term, in catalog order
    matches: Vec<&'static LaptopRecord>,
    /// Highlighted row in the match list
    pub match_cursor: usize,
    /// Laptops being compared
    selection: SelectionSet<'static>,
    /// Highlighted card in the selection list
    pub selection_cursor: usize,
    /// Transient feedback message
    notices: NoticeBoard,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Whether the about panel is rendered
    pub show_about: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::builtin(), crate::notice::DEFAULT_NOTICE_DURATION)
    }
}

impl AppState {
    pub fn new(catalog: Catalog<'static>, notice_duration: Duration) -> Self {
        Self {
            catalog,
            mode: AppMode::Search,
            search: TextInput::new(),
            matches: search("", &catalog),
            match_cursor: 0,
            selection: SelectionSet::new(),
            selection_cursor: 0,
            notices: NoticeBoard::new(notice_duration),
            help_visible: false,
            show_about: true,
        }
    }

    pub fn catalog(&self) -> &Catalog<'static> {
        &self.catalog
    }

    pub fn search_term(&self) -> &str {
        self.search.value()
    }

    /// Every catalog record matching the current term.
    pub fn matches(&self) -> &[&'static LaptopRecord] {
        &self.matches
    }

    /// The match list is shown only for a non-empty term with results.
    pub fn results_visible(&self) -> bool {
        !self.search.is_empty() && !self.matches.is_empty()
    }

    pub fn selection(&self) -> &SelectionSet<'static> {
        &self.selection
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notices.active()
    }

    pub fn aggregate(&self) -> Aggregate<'static> {
        Aggregate::from_selection(&self.selection)
    }

    pub fn chart_entries(&self) -> Vec<ChartEntry<'static>> {
        chart_entries(&self.selection)
    }

    /// The chart only makes sense with something to compare.
    pub fn chart_visible(&self) -> bool {
        self.selection.len() > 1
    }

    pub fn highlighted_match(&self) -> Option<&'static LaptopRecord> {
        if !self.results_visible() {
            return None;
        }
        self.matches.get(self.match_cursor).copied()
    }

    pub fn highlighted_selection(&self) -> Option<&'static LaptopRecord> {
        self.selection.records().get(self.selection_cursor).copied()
    }

    // ---------------------------------------------------------------------
    // Input events
    // ---------------------------------------------------------------------

    /// The search text changed; recompute matches.
    pub fn on_search_term_change(&mut self, text: &str) {
        if self.search.value() != text {
            self.search.set(text);
        }
        self.refresh_matches();
    }

    /// Re-run the query for the text currently in the search box.
    pub fn refresh_matches(&mut self) {
        self.matches = search(self.search.value(), &self.catalog);
        self.match_cursor = clamp_cursor(self.match_cursor, self.matches.len());
        debug!(
            term = self.search.value(),
            matches = self.matches.len(),
            "search updated"
        );
    }

    /// A row of the match list was picked.
    ///
    /// Unknown ids are ignored and return `None`.
    pub fn on_laptop_chosen_from_results(
        &mut self,
        id: &str,
        now: Instant,
    ) -> Option<SelectOutcome<'static>> {
        let record = self.catalog.get(id)?;
        let outcome = self.selection.select(record);
        if outcome.is_added() {
            self.search.clear();
            self.refresh_matches();
        }
        self.post_select_notice(&outcome, now);
        Some(outcome)
    }

    /// The add-variant action was triggered on a record.
    pub fn on_add_variant_requested(
        &mut self,
        id: &str,
        now: Instant,
    ) -> Option<VariantOutcome<'static>> {
        let record = self.catalog.get(id)?;
        let outcome = self.selection.add_variant(record, &self.catalog);

        match &outcome {
            VariantOutcome::Selected(selected) => {
                if selected.is_added() {
                    self.search.clear();
                    self.refresh_matches();
                }
                self.post_select_notice(selected, now);
            }
            VariantOutcome::NotFound { wanted } => {
                warn!(id, %wanted, "no variant in catalog");
                let (message, kind) = report::variant_message(&outcome);
                self.notices.post(message, kind, now);
            }
        }
        Some(outcome)
    }

    /// A selected laptop was removed.
    pub fn on_laptop_removed(&mut self, id: &str) {
        if let Some(record) = self.selection.remove(id) {
            debug!(id = record.id, "removed from selection");
        }
        self.selection_cursor = clamp_cursor(self.selection_cursor, self.selection.len());
    }

    /// Clock tick; lets the notice timer run out.
    pub fn tick(&mut self, now: Instant) {
        self.notices.expire(now);
    }

    fn post_select_notice(&mut self, outcome: &SelectOutcome<'_>, now: Instant) {
        let (message, kind) = report::select_message(outcome);
        match outcome {
            SelectOutcome::Added(record) => debug!(id = record.id, "added to selection"),
            SelectOutcome::AlreadySelected(record) => warn!(id = record.id, "already selected"),
        }
        self.notices.post(message, kind, now);
    }

    // ---------------------------------------------------------------------
    // Cursor movement
    // ---------------------------------------------------------------------

    pub fn move_up(&mut self) {
        let cursor = self.cursor_mut();
        *cursor = cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let len = match self.mode {
            AppMode::Search if self.results_visible() => self.matches.len(),
            AppMode::Search => 0,
            AppMode::Selection => self.selection.len(),
        };
        let cursor = self.cursor_mut();
        if *cursor + 1 < len {
            *cursor += 1;
        }
    }

    fn cursor_mut(&mut self) -> &mut usize {
        match self.mode {
            AppMode::Search => &mut self.match_cursor,
            AppMode::Selection => &mut self.selection_cursor,
        }
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        debug!(mode = %self.mode, "focus changed");
    }
}

fn clamp_cursor(cursor: usize, len: usize) -> usize {
    cursor.min(len.saturating_sub(1))
}
