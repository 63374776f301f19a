//! Search history log (the suggestion store).
//!
//! Keeps the user's past queries most-recent-first, unique by exact text and
//! bounded to `HISTORY_LIMIT` entries. The list is persisted as a JSON array
//! of strings under `HISTORY_KEY` after every change.

use super::KeyValueStore;
use tracing::{debug, warn};

/// Maximum number of stored queries.
pub const HISTORY_LIMIT: usize = 10;

/// Storage key of the history list.
pub const HISTORY_KEY: &str = "search_history";

/// Persistent, bounded, most-recent-first query log.
///
/// Owns the key-value backend shared with other preferences; use
/// [`SuggestionStore::backend_mut`] to reach it.
#[derive(Debug)]
pub struct SuggestionStore {
    entries: Vec<String>,
    backend: Box<dyn KeyValueStore>,
}

impl SuggestionStore {
    /// Load history from `backend`.
    ///
    /// A missing key is an empty history. An unreadable or malformed value is
    /// logged and treated as empty. Lists longer than the limit are truncated.
    pub fn load(backend: Box<dyn KeyValueStore>) -> Self {
        let entries = match backend.get(HISTORY_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(mut entries) => {
                    dedup_preserving_order(&mut entries);
                    entries.truncate(HISTORY_LIMIT);
                    entries
                }
                Err(err) => {
                    warn!(error = %err, "Stored search history is malformed, ignoring it");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(error = %err, "Could not read search history");
                Vec::new()
            }
        };

        debug!(count = entries.len(), "Loaded search history");
        Self { entries, backend }
    }

    /// Record a submitted query.
    ///
    /// Any earlier exact-text occurrence is removed first so repeats move to
    /// the front, then the list is truncated to the limit and persisted.
    /// Persistence failures are logged and swallowed; the in-memory list is
    /// updated regardless.
    pub fn record(&mut self, query: &str) {
        self.entries.retain(|entry| entry != query);
        self.entries.insert(0, query.to_string());
        self.entries.truncate(HISTORY_LIMIT);

        let encoded = match serde_json::to_string(&self.entries) {
            Ok(encoded) => encoded,
            Err(err) => {
                warn!(error = %err, "Could not encode search history");
                return;
            }
        };

        if let Err(err) = self.backend.set(HISTORY_KEY, &encoded) {
            warn!(error = %err, "Could not persist search history");
        }
    }

    /// Entries containing `query` case-insensitively, at most `limit`.
    ///
    /// Stored recency order is preserved. Pure read.
    pub fn matches(&self, query: &str, limit: usize) -> Vec<String> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.to_lowercase().contains(&needle))
            .take(limit)
            .cloned()
            .collect()
    }

    /// All entries, most recent first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Shared key-value backend.
    pub fn backend(&self) -> &dyn KeyValueStore {
        self.backend.as_ref()
    }

    /// Shared key-value backend, mutable.
    pub fn backend_mut(&mut self) -> &mut dyn KeyValueStore {
        self.backend.as_mut()
    }
}

/// Drop later duplicates, keeping the first (most recent) occurrence.
fn dedup_preserving_order(entries: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    entries.retain(|entry| seen.insert(entry.clone()));
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
