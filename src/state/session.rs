//! Search session controller.
//!
//! SearchPhase is a sum type covering what the results area shows:
//! - Idle: nothing searched yet, or error dismissed
//! - Loading: a search is in flight
//! - Loaded: a non-empty result set with its pagination
//! - Empty: the last search matched nothing
//! - Failed: the last search failed; the banner text is ready to show

use crate::model::{ClientError, Command, ResultSet, SearchResponse, SearchResult};
use crate::state::pagination::Pagination;
use crate::store::SuggestionStore;
use tracing::{debug, info, warn};

/// Fallback detail when the server gave no error text.
pub const GENERIC_FAILURE: &str = "Search failed";

/// What the results area currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchPhase {
    /// No search yet.
    Idle,
    /// Waiting for the search completion.
    Loading {
        /// Query as submitted.
        query: String,
    },
    /// Results available.
    Loaded {
        /// Received results.
        results: ResultSet,
        /// Current page over `results`.
        pagination: Pagination,
    },
    /// Search succeeded with zero results.
    Empty {
        /// Query as submitted.
        query: String,
    },
    /// Search failed.
    Failed {
        /// Full banner text.
        message: String,
    },
}

/// Banner text for a failed search.
pub fn failure_message(err: &ClientError) -> String {
    format!(
        "An error occurred while searching: {}",
        err.server_message().unwrap_or(GENERIC_FAILURE)
    )
}

/// Owns the search phase and stamps each submission with a generation.
#[derive(Debug, Clone)]
pub struct SearchSession {
    phase: SearchPhase,
    generation: u64,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSession {
    /// Create an idle session.
    pub fn new() -> Self {
        Self {
            phase: SearchPhase::Idle,
            generation: 0,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> &SearchPhase {
        &self.phase
    }

    /// Generation of the latest submission.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True while a search is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, SearchPhase::Loading { .. })
    }

    /// Submit a query.
    ///
    /// Blank input is ignored entirely. Otherwise the query is recorded in
    /// history, previous results and errors are cleared, and a search
    /// command carrying the exact text is returned.
    pub fn submit(&mut self, query: &str, history: &mut SuggestionStore) -> Option<Command> {
        if query.trim().is_empty() {
            return None;
        }

        history.record(query);
        self.generation += 1;
        self.phase = SearchPhase::Loading {
            query: query.to_string(),
        };
        info!(query, generation = self.generation, "search submitted");

        Some(Command::RunSearch {
            generation: self.generation,
            query: query.to_string(),
        })
    }

    /// Apply a search completion. Returns false if it was superseded.
    pub fn on_complete(
        &mut self,
        generation: u64,
        query: &str,
        result: Result<SearchResponse, ClientError>,
    ) -> bool {
        if generation != self.generation || !self.is_loading() {
            debug!(
                generation,
                current = self.generation,
                query,
                "dropping superseded search completion"
            );
            return false;
        }

        self.phase = match result {
            Ok(mut response) => {
                if response.query.is_empty() {
                    response.query = query.to_string();
                }
                match ResultSet::from_response(response) {
                    Some(results) => {
                        info!(
                            query,
                            total = results.total(),
                            received = results.items().len(),
                            "search completed"
                        );
                        let pagination = Pagination::new(results.items().len());
                        SearchPhase::Loaded {
                            results,
                            pagination,
                        }
                    }
                    None => {
                        info!(query, "search returned no results");
                        SearchPhase::Empty {
                            query: query.to_string(),
                        }
                    }
                }
            }
            Err(err) => {
                warn!(error = %err, query, "search failed");
                SearchPhase::Failed {
                    message: failure_message(&err),
                }
            }
        };
        true
    }

    /// Clear a failure banner. Returns true if one was showing.
    pub fn dismiss_error(&mut self) -> bool {
        if matches!(self.phase, SearchPhase::Failed { .. }) {
            self.phase = SearchPhase::Idle;
            return true;
        }
        false
    }

    /// Current result set, if loaded.
    pub fn results(&self) -> Option<&ResultSet> {
        match &self.phase {
            SearchPhase::Loaded { results, .. } => Some(results),
            _ => None,
        }
    }

    /// Pagination of the current result set, if loaded.
    pub fn pagination(&self) -> Option<&Pagination> {
        match &self.phase {
            SearchPhase::Loaded { pagination, .. } => Some(pagination),
            _ => None,
        }
    }

    /// Mutable pagination of the current result set, if loaded.
    pub fn pagination_mut(&mut self) -> Option<&mut Pagination> {
        match &mut self.phase {
            SearchPhase::Loaded { pagination, .. } => Some(pagination),
            _ => None,
        }
    }

    /// Results of the current page. Empty unless loaded.
    pub fn current_page_items(&self) -> &[SearchResult] {
        match &self.phase {
            SearchPhase::Loaded {
                results,
                pagination,
            } => pagination.slice(results.items()),
            _ => &[],
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
