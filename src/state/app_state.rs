//! Application state and transitions.
//!
//! AppState is the root state type. Every mutation of the console goes
//! through its methods; side effects come back out as [`Command`]s for the
//! shell to dispatch.
//!
//! # Ownership
//!
//! - The input line is shared by the autocomplete engine (reads it) and
//!   suggestion navigation (writes highlighted text into it).
//! - The history store is read by autocomplete and written by search submit.
//! - The result scroll offset resets on every page change and new search.

use crate::model::{Command, Completion};
use crate::state::autocomplete::{AutocompleteEngine, AutocompleteState};
use crate::state::input::InputLine;
use crate::state::session::SearchSession;
use crate::store::{SuggestionStore, ThemePreference};
use std::time::{Duration, Instant};
use tracing::debug;

// ===== AppState =====

/// Application state.
#[derive(Debug)]
pub struct AppState {
    input: InputLine,
    autocomplete: AutocompleteEngine,
    session: SearchSession,
    history: SuggestionStore,
    theme: ThemePreference,
    help_visible: bool,
    /// Index of the first result card shown on the current page.
    results_scroll: usize,
    should_quit: bool,
}

impl AppState {
    /// Create the initial state around a loaded history store.
    ///
    /// The theme preference is read from the same backend.
    pub fn new(history: SuggestionStore, debounce: Duration) -> Self {
        let theme = ThemePreference::load(history.backend());
        Self {
            input: InputLine::default(),
            autocomplete: AutocompleteEngine::new(debounce),
            session: SearchSession::new(),
            history,
            theme,
            help_visible: false,
            results_scroll: 0,
            should_quit: false,
        }
    }

    // ===== Accessors =====

    /// Search input line.
    pub fn input(&self) -> &InputLine {
        &self.input
    }

    /// Autocomplete engine.
    pub fn autocomplete(&self) -> &AutocompleteEngine {
        &self.autocomplete
    }

    /// Search session.
    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    /// Search history.
    pub fn history(&self) -> &SuggestionStore {
        &self.history
    }

    /// Active theme.
    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    /// Whether the shortcut overlay is shown.
    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    /// Index of the first visible result card.
    pub fn results_scroll(&self) -> usize {
        self.results_scroll
    }

    /// Whether the user asked to exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    // ===== Input editing =====

    /// Type a character.
    pub fn insert_char(&mut self, ch: char, now: Instant) {
        self.input.insert_char(ch);
        self.input_changed(now);
    }

    /// Delete before the cursor.
    pub fn delete_backward(&mut self, now: Instant) {
        if self.input.delete_backward() {
            self.input_changed(now);
        }
    }

    /// Delete under the cursor.
    pub fn delete_forward(&mut self, now: Instant) {
        if self.input.delete_forward() {
            self.input_changed(now);
        }
    }

    /// Clear the input.
    pub fn clear_input(&mut self, now: Instant) {
        if self.input.clear() {
            self.input_changed(now);
        }
    }

    /// Cursor left.
    pub fn cursor_left(&mut self) {
        self.input.move_left();
    }

    /// Cursor right.
    pub fn cursor_right(&mut self) {
        self.input.move_right();
    }

    /// Cursor to start.
    pub fn cursor_home(&mut self) {
        self.input.move_home();
    }

    /// Cursor to end.
    pub fn cursor_end(&mut self) {
        self.input.move_end();
    }

    fn input_changed(&mut self, now: Instant) {
        self.autocomplete
            .on_input(self.input.text(), &self.history, now);
    }

    // ===== Autocomplete =====

    /// Fire the debounce timer if due.
    pub fn tick(&mut self, now: Instant) -> Option<Command> {
        self.autocomplete.poll_timer(now)
    }

    /// Earliest instant at which [`tick`](Self::tick) can do something.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.autocomplete.next_deadline()
    }

    /// Down arrow: next suggestion, or scroll results when no dropdown.
    pub fn select_next(&mut self) {
        if self.autocomplete.is_displaying() {
            if let Some(text) = self.autocomplete.select_next() {
                self.input.set_text(text);
            }
        } else {
            self.scroll_results_down();
        }
    }

    /// Up arrow: previous suggestion, or scroll results when no dropdown.
    ///
    /// Leaving the first row keeps whatever text the input holds.
    pub fn select_prev(&mut self) {
        if self.autocomplete.is_displaying() {
            if let Some(text) = self.autocomplete.select_prev() {
                self.input.set_text(text);
            }
        } else {
            self.scroll_results_up();
        }
    }

    /// Commit the dropdown row at `index`, e.g. after a mouse click.
    pub fn commit_suggestion(&mut self, index: usize) -> Option<Command> {
        let item = self.autocomplete.item(index)?;
        self.commit(item.text)
    }

    /// Click anywhere outside the input and dropdown.
    pub fn click_outside(&mut self) {
        if self.autocomplete.is_displaying() {
            self.autocomplete.dismiss();
        }
    }

    /// Put `text` in the input and search for it, as if typed and submitted.
    pub fn search_for(&mut self, text: &str) -> Option<Command> {
        self.commit(text.to_string())
    }

    fn commit(&mut self, text: String) -> Option<Command> {
        self.autocomplete.dismiss();
        self.input.set_text(text);
        self.submit_query()
    }

    // ===== Search =====

    /// Enter: commit the highlighted suggestion, else submit the input.
    pub fn submit(&mut self) -> Option<Command> {
        match self.autocomplete.selected() {
            Some(item) => self.commit(item.text),
            None => self.submit_query(),
        }
    }

    fn submit_query(&mut self) -> Option<Command> {
        let command = self
            .session
            .submit(self.input.trimmed(), &mut self.history)?;
        self.autocomplete.dismiss();
        self.results_scroll = 0;
        Some(command)
    }

    /// Route a dispatcher completion to its owner.
    ///
    /// Returns false if it was stale and dropped.
    pub fn apply_completion(&mut self, completion: Completion) -> bool {
        match completion {
            Completion::Suggestions {
                generation,
                query,
                result,
            } => self
                .autocomplete
                .on_suggestions(generation, &query, result, self.input.text()),
            Completion::Search {
                generation,
                query,
                result,
            } => {
                let applied = self.session.on_complete(generation, &query, result);
                if applied {
                    self.results_scroll = 0;
                }
                applied
            }
        }
    }

    /// Escape: close the autocomplete pipeline, else help, else the banner.
    pub fn dismiss(&mut self) {
        let autocomplete_active = matches!(
            self.autocomplete.state(),
            AutocompleteState::Pending { .. }
                | AutocompleteState::Fetching { .. }
                | AutocompleteState::Displaying { .. }
        );

        if autocomplete_active {
            self.autocomplete.dismiss();
        } else if self.help_visible {
            self.help_visible = false;
        } else if self.session.dismiss_error() {
            debug!("error banner dismissed");
        }
    }

    // ===== Pagination =====

    /// Jump to page `page` (clamped) and scroll to the top.
    pub fn go_to_page(&mut self, page: usize) {
        if let Some(pagination) = self.session.pagination_mut() {
            pagination.go_to_page(page);
            self.results_scroll = 0;
        }
    }

    /// Next page.
    pub fn next_page(&mut self) {
        if let Some(page) = self.session.pagination().map(|p| p.current_page() + 1) {
            self.go_to_page(page);
        }
    }

    /// Previous page.
    pub fn prev_page(&mut self) {
        if let Some(page) = self
            .session
            .pagination()
            .map(|p| p.current_page().saturating_sub(1))
        {
            self.go_to_page(page);
        }
    }

    /// Scroll the current page down one card.
    pub fn scroll_results_down(&mut self) {
        let visible = self.session.current_page_items().len();
        if self.results_scroll + 1 < visible {
            self.results_scroll += 1;
        }
    }

    /// Scroll the current page up one card.
    pub fn scroll_results_up(&mut self) {
        self.results_scroll = self.results_scroll.saturating_sub(1);
    }

    // ===== Application =====

    /// Switch light/dark and persist the choice.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.theme.save(self.history.backend_mut());
    }

    /// Show or hide the shortcut overlay.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Ask the event loop to exit.
    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
