//! Autocomplete suggestion values.
//!
//! A `SuggestionSet` is created once per keystroke cycle and discarded on the
//! next input or on dismissal. History-derived items always come first.

use std::ops::Range;

/// Maximum number of history matches shown in the dropdown.
pub const HISTORY_SUGGESTION_LIMIT: usize = 3;

/// Maximum number of remote lexicon suggestions shown in the dropdown.
pub const LEXICON_SUGGESTION_LIMIT: usize = 5;

/// Where a suggestion came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuggestionSource {
    /// The user's own past query.
    History,
    /// The remote service's vocabulary.
    Lexicon,
}

/// One row of the dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionItem {
    /// Text copied into the input when the item is highlighted or chosen.
    pub text: String,
    /// Origin of the suggestion, rendered with a distinct label.
    pub source: SuggestionSource,
}

/// History and lexicon matches for one query, each capped.
///
/// The caps are enforced by the constructor so no `SuggestionSet` can ever
/// hold more than 3 history or 5 lexicon entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionSet {
    history: Vec<String>,
    lexicon: Vec<String>,
}

impl SuggestionSet {
    /// Build a set, truncating both lists to their caps.
    pub fn new(mut history: Vec<String>, mut lexicon: Vec<String>) -> Self {
        history.truncate(HISTORY_SUGGESTION_LIMIT);
        lexicon.truncate(LEXICON_SUGGESTION_LIMIT);
        Self { history, lexicon }
    }

    /// Build a set that only carries history matches (remote lookup failed).
    pub fn history_only(history: Vec<String>) -> Self {
        Self::new(history, Vec::new())
    }

    /// History matches in recency order.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Remote lexicon suggestions in server order.
    pub fn lexicon(&self) -> &[String] {
        &self.lexicon
    }

    /// True when there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty() && self.lexicon.is_empty()
    }

    /// Total number of rendered items.
    pub fn len(&self) -> usize {
        self.history.len() + self.lexicon.len()
    }

    /// Flattened items, history first.
    pub fn items(&self) -> Vec<SuggestionItem> {
        let history = self.history.iter().map(|text| SuggestionItem {
            text: text.clone(),
            source: SuggestionSource::History,
        });
        let lexicon = self.lexicon.iter().map(|text| SuggestionItem {
            text: text.clone(),
            source: SuggestionSource::Lexicon,
        });
        history.chain(lexicon).collect()
    }

    /// Item at a flattened index, history first.
    pub fn get(&self, index: usize) -> Option<SuggestionItem> {
        if let Some(text) = self.history.get(index) {
            return Some(SuggestionItem {
                text: text.clone(),
                source: SuggestionSource::History,
            });
        }
        self.lexicon
            .get(index - self.history.len())
            .map(|text| SuggestionItem {
                text: text.clone(),
                source: SuggestionSource::Lexicon,
            })
    }
}

// ===== Match Highlighting =====

/// Locate the first case-insensitive occurrence of `query` in `text`.
///
/// Returns the byte range of the match within `text`, suitable for slicing.
/// Comparison is per character using full Unicode lowercasing, so the range
/// always falls on character boundaries even when lowercasing changes the
/// byte length of a character. Returns `None` for an empty query.
pub fn match_range(text: &str, query: &str) -> Option<Range<usize>> {
    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return None;
    }

    for (start, _) in text.char_indices() {
        let mut pending = needle.iter();
        let mut end = start;
        let mut matched = false;

        for (offset, ch) in text[start..].char_indices() {
            let mut all_equal = true;
            for lower in ch.to_lowercase() {
                match pending.next() {
                    Some(expected) if *expected == lower => {}
                    _ => {
                        all_equal = false;
                        break;
                    }
                }
            }
            if !all_equal {
                break;
            }
            end = start + offset + ch.len_utf8();
            if pending.as_slice().is_empty() {
                matched = true;
                break;
            }
        }

        if matched {
            return Some(start..end);
        }
    }

    None
}

/// Split `text` into (before, matched, after) around the highlighted query.
///
/// When there is no match the whole text is returned as `before`.
pub fn split_highlight<'a>(text: &'a str, query: &str) -> (&'a str, &'a str, &'a str) {
    match match_range(text, query) {
        Some(range) => (&text[..range.start], &text[range.clone()], &text[range.end..]),
        None => (text, "", ""),
    }
}
