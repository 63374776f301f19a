//! Autocomplete state machine.
//!
//! AutocompleteState is a sum type with five states:
//! - Idle: nothing typed, nothing shown
//! - Pending: debounce timer armed, history matches computed
//! - Fetching: remote lookup in flight
//! - Displaying: dropdown visible, optionally with a highlighted row
//! - Dismissed: hidden by the user until the next keystroke
//!
//! The dropdown is only visible in `Displaying`.

use crate::model::{
    ClientError, Command, SuggestionItem, SuggestionSet, HISTORY_SUGGESTION_LIMIT,
};
use crate::state::debounce::DebounceTimer;
use crate::store::SuggestionStore;
use std::time::{Duration, Instant};
use tracing::debug;

// ===== AutocompleteState =====

/// Autocomplete state. Exactly one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutocompleteState {
    /// Input empty or nothing to suggest.
    Idle,
    /// Waiting for the typing pause.
    Pending {
        /// Trimmed input.
        query: String,
        /// History matches computed at keystroke time.
        history: Vec<String>,
    },
    /// Remote lookup issued, waiting for its completion.
    Fetching {
        /// Trimmed input the lookup was issued for.
        query: String,
        /// History matches computed at keystroke time.
        history: Vec<String>,
    },
    /// Dropdown visible.
    Displaying {
        /// Query the suggestions were computed for; drives match highlighting.
        query: String,
        /// Rows, history first.
        suggestions: SuggestionSet,
        /// Highlighted row. `None` leaves the typed text in charge.
        cursor: Option<usize>,
    },
    /// Closed by Escape, a click outside, or a commit.
    Dismissed,
}

// ===== AutocompleteEngine =====

/// Debounced, stale-safe autocomplete.
///
/// Every armed timer bumps `generation`. A remote completion is applied only
/// if its generation is still current, the engine is `Fetching`, and its
/// query equals the live trimmed input.
#[derive(Debug, Clone)]
pub struct AutocompleteEngine {
    state: AutocompleteState,
    timer: DebounceTimer,
    generation: u64,
}

impl AutocompleteEngine {
    /// Create an idle engine with the given debounce delay.
    pub fn new(debounce: Duration) -> Self {
        Self {
            state: AutocompleteState::Idle,
            timer: DebounceTimer::new(debounce),
            generation: 0,
        }
    }

    /// Current state.
    pub fn state(&self) -> &AutocompleteState {
        &self.state
    }

    /// Current generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Deadline of the armed debounce timer, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    /// React to the input text changing.
    ///
    /// Empty (after trimming) input hides everything. Otherwise history
    /// matches are computed immediately and the debounce timer restarts.
    pub fn on_input(&mut self, text: &str, history: &SuggestionStore, now: Instant) {
        let query = text.trim();
        if query.is_empty() {
            self.timer.cancel();
            self.state = AutocompleteState::Idle;
            return;
        }

        let history = history.matches(query, HISTORY_SUGGESTION_LIMIT);
        self.generation += 1;
        self.timer.arm(now);
        self.state = AutocompleteState::Pending {
            query: query.to_string(),
            history,
        };
    }

    /// Fire the debounce timer if due, emitting exactly one lookup.
    pub fn poll_timer(&mut self, now: Instant) -> Option<Command> {
        let AutocompleteState::Pending { query, history } = &self.state else {
            return None;
        };
        if !self.timer.fire_if_due(now) {
            return None;
        }

        let query = query.clone();
        self.state = AutocompleteState::Fetching {
            query: query.clone(),
            history: history.clone(),
        };
        Some(Command::FetchSuggestions {
            generation: self.generation,
            query,
        })
    }

    /// Apply a lookup completion. Returns false if it was stale and dropped.
    pub fn on_suggestions(
        &mut self,
        generation: u64,
        query: &str,
        result: Result<Vec<String>, ClientError>,
        live_input: &str,
    ) -> bool {
        let history = match &self.state {
            AutocompleteState::Fetching {
                query: pending,
                history,
            } if generation == self.generation
                && pending == query
                && query == live_input.trim() =>
            {
                history.clone()
            }
            _ => {
                debug!(
                    generation,
                    current = self.generation,
                    query,
                    "dropping stale suggestions"
                );
                return false;
            }
        };

        let suggestions = match result {
            Ok(lexicon) => SuggestionSet::new(history, lexicon),
            Err(err) => {
                debug!(error = %err, query, "autocomplete failed, using history only");
                SuggestionSet::history_only(history)
            }
        };

        self.state = if suggestions.is_empty() {
            AutocompleteState::Idle
        } else {
            AutocompleteState::Displaying {
                query: query.to_string(),
                suggestions,
                cursor: None,
            }
        };
        true
    }

    /// Highlight the next row, clamped at the last one.
    ///
    /// Returns the newly highlighted text so it can be copied into the input.
    pub fn select_next(&mut self) -> Option<String> {
        let AutocompleteState::Displaying {
            suggestions,
            cursor,
            ..
        } = &mut self.state
        else {
            return None;
        };

        let last = suggestions.len().checked_sub(1)?;
        let next = match *cursor {
            None => 0,
            Some(i) => (i + 1).min(last),
        };
        *cursor = Some(next);
        suggestions.get(next).map(|item| item.text)
    }

    /// Highlight the previous row; from the first row, clear the highlight.
    ///
    /// Returns the newly highlighted text, or `None` when nothing is
    /// highlighted afterwards (the input keeps whatever it holds).
    pub fn select_prev(&mut self) -> Option<String> {
        let AutocompleteState::Displaying {
            suggestions,
            cursor,
            ..
        } = &mut self.state
        else {
            return None;
        };

        *cursor = match *cursor {
            None | Some(0) => None,
            Some(i) => Some(i - 1),
        };
        cursor.and_then(|i| suggestions.get(i)).map(|item| item.text)
    }

    /// The highlighted row, if any.
    pub fn selected(&self) -> Option<SuggestionItem> {
        match &self.state {
            AutocompleteState::Displaying {
                suggestions,
                cursor: Some(i),
                ..
            } => suggestions.get(*i),
            _ => None,
        }
    }

    /// Row at `index` of the visible dropdown.
    pub fn item(&self, index: usize) -> Option<SuggestionItem> {
        match &self.state {
            AutocompleteState::Displaying { suggestions, .. } => suggestions.get(index),
            _ => None,
        }
    }

    /// True when the dropdown is visible.
    pub fn is_displaying(&self) -> bool {
        matches!(self.state, AutocompleteState::Displaying { .. })
    }

    /// Hide the dropdown, cancel the timer and invalidate in-flight lookups.
    pub fn dismiss(&mut self) {
        self.timer.cancel();
        self.generation += 1;
        self.state = AutocompleteState::Dismissed;
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "autocomplete_tests.rs"]
mod tests;
